use serde::{Deserialize, Serialize};

use crate::model::EmojiRecord;

/// Active (or pending) filter choices. Both fields apply together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterSelection {
    pub group: Option<String>,
    pub category: Option<String>,
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl FilterSelection {
    pub fn new(group: Option<String>, category: Option<String>) -> Self {
        Self {
            group: normalize(group),
            category: normalize(category),
        }
    }

    pub fn with_group(mut self, group: Option<String>) -> Self {
        self.group = normalize(group);
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = normalize(category);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_none() && self.category.is_none()
    }

    pub fn matches(&self, record: &EmojiRecord) -> bool {
        if let Some(group) = self.group.as_deref() {
            if record.group != group {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref() {
            if record.category != category {
                return false;
            }
        }
        true
    }
}

/// Order-preserving subsequence of `records` matching every set field of `selection`.
pub fn apply_filter<'a, I>(records: I, selection: &FilterSelection) -> Vec<&'a EmojiRecord>
where
    I: IntoIterator<Item = &'a EmojiRecord>,
{
    records
        .into_iter()
        .filter(|r| selection.matches(r))
        .collect()
}
