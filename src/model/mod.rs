use serde::{Deserialize, Serialize};

use crate::glyph;

/// One emoji as served by the EmojiHub API.
///
/// Records are read-only once loaded; the dataset is shared behind an `Arc`
/// by [`crate::state::AppState`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmojiRecord {
    pub name: String,
    pub category: String,
    pub group: String,
    /// `U+XXXX` code points, first element is the displayed glyph.
    #[serde(default, rename = "unicode", alias = "codePoints")]
    pub code_points: Vec<String>,
    /// Pre-rendered HTML entities (`&#128512;`), used when `code_points` is empty.
    #[serde(default, rename = "htmlCode")]
    pub html_code: Vec<String>,
}

impl EmojiRecord {
    pub fn new(name: &str, category: &str, group: &str, code_points: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            group: group.to_string(),
            code_points: code_points.iter().map(|c| c.to_string()).collect(),
            html_code: Vec::new(),
        }
    }

    /// Canonical glyph source: first code point, falling back to the first HTML entity.
    pub fn glyph_source(&self) -> Option<&str> {
        self.code_points
            .first()
            .or_else(|| self.html_code.first())
            .map(|s| s.as_str())
    }

    /// Displayable character for this record, empty when the source is invalid.
    pub fn glyph(&self) -> String {
        self.glyph_source()
            .map(glyph::display_glyph)
            .unwrap_or_default()
    }

    /// Every code point rendered, for multi-code-point emoji such as flags.
    pub fn full_glyph(&self) -> String {
        if self.code_points.is_empty() {
            glyph::display_sequence(&self.html_code)
        } else {
            glyph::display_sequence(&self.code_points)
        }
    }
}

/// Parses the JSON array returned by the API (or stored in a local file).
pub fn parse_records(raw: &str) -> Result<Vec<EmojiRecord>, serde_json::Error> {
    serde_json::from_str::<Vec<EmojiRecord>>(raw)
}
