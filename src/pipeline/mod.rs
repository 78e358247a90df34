//! Filter-and-page pipeline.
//!
//! Dataset → [`extract_options`] (choice vocabularies) and
//! dataset + [`FilterSelection`] → [`apply_filter`] → [`paginate`].
//! Every stage is a pure function of its inputs.

mod filter;
mod options;
mod paginate;

pub use filter::{apply_filter, FilterSelection};
pub use options::{extract_options, FilterOptionVocabulary};
pub use paginate::{
    clamp_page, page_window, paginate, total_pages, Page, PageState, DEFAULT_PAGE_SIZE,
    DEFAULT_WINDOW_CAP,
};
