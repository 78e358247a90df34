use itertools::Itertools;
use serde::Serialize;

use crate::model::EmojiRecord;

/// Distinct values of each filterable attribute, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptionVocabulary {
    pub groups: Vec<String>,
    pub categories: Vec<String>,
}

impl FilterOptionVocabulary {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.categories.is_empty()
    }
}

pub fn extract_options(records: &[EmojiRecord]) -> FilterOptionVocabulary {
    FilterOptionVocabulary {
        groups: records.iter().map(|r| r.group.clone()).unique().collect(),
        categories: records.iter().map(|r| r.category.clone()).unique().collect(),
    }
}
