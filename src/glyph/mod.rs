use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

pub const MAX_CODE_POINT: u32 = 0x10FFFF;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("unrecognized code point representation: {raw}")]
    UnknownFormat { raw: String },

    #[error("invalid hexadecimal digits in {raw}")]
    InvalidDigits { raw: String },

    #[error("code point {value:#X} is outside 0x0..=0x10FFFF")]
    OutOfRange { value: u64 },

    #[error("code point {value:#X} is not a scalar value")]
    NotScalar { value: u32 },
}

fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^&#(?:[xX](?P<hex>[0-9A-Fa-f]+)|(?P<dec>[0-9]+));$")
            .expect("entity pattern is valid")
    })
}

fn to_char(value: u64) -> Result<char, GlyphError> {
    if value > u64::from(MAX_CODE_POINT) {
        return Err(GlyphError::OutOfRange { value });
    }
    let value = value as u32;
    char::from_u32(value).ok_or(GlyphError::NotScalar { value })
}

fn parse_radix(digits: &str, radix: u32, raw: &str) -> Result<u64, GlyphError> {
    // Anything wider than u64 is out of range anyway.
    match u64::from_str_radix(digits, radix) {
        Ok(v) => Ok(v),
        Err(e) if matches!(e.kind(), std::num::IntErrorKind::PosOverflow) => {
            Err(GlyphError::OutOfRange { value: u64::MAX })
        }
        Err(_) => Err(GlyphError::InvalidDigits {
            raw: raw.to_string(),
        }),
    }
}

/// Parses a `U+XXXX` code point.
pub fn parse_code_point(raw: &str) -> Result<char, GlyphError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .ok_or_else(|| GlyphError::UnknownFormat {
            raw: raw.to_string(),
        })?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GlyphError::InvalidDigits {
            raw: raw.to_string(),
        });
    }
    to_char(parse_radix(digits, 16, raw)?)
}

/// Parses a numeric HTML character reference (`&#128512;` or `&#x1F600;`).
pub fn parse_html_entity(raw: &str) -> Result<char, GlyphError> {
    let caps = entity_regex()
        .captures(raw.trim())
        .ok_or_else(|| GlyphError::UnknownFormat {
            raw: raw.to_string(),
        })?;
    let value = if let Some(hex) = caps.name("hex") {
        parse_radix(hex.as_str(), 16, raw)?
    } else if let Some(dec) = caps.name("dec") {
        parse_radix(dec.as_str(), 10, raw)?
    } else {
        return Err(GlyphError::UnknownFormat {
            raw: raw.to_string(),
        });
    };
    to_char(value)
}

/// Parses either representation served by the API.
pub fn parse_representation(raw: &str) -> Result<char, GlyphError> {
    if raw.trim_start().starts_with("&#") {
        parse_html_entity(raw)
    } else {
        parse_code_point(raw)
    }
}

/// Displayable glyph for one representation; invalid input yields an empty string.
pub fn display_glyph(raw: &str) -> String {
    match parse_representation(raw) {
        Ok(c) => c.to_string(),
        Err(e) => {
            log::debug!("dropping glyph: {e}");
            String::new()
        }
    }
}

pub fn display_sequence(raws: &[String]) -> String {
    raws.iter().map(|r| display_glyph(r)).collect()
}
