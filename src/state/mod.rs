//! Application state and its transitions.
//!
//! [`AppState::apply`] is the only way state changes. Derived data (choice
//! vocabularies, filtered set, visible page) is never stored; [`AppState::view`]
//! recomputes it from the current inputs.

use std::sync::Arc;

use serde::Serialize;

use crate::model::EmojiRecord;
use crate::pipeline::{
    self, FilterOptionVocabulary, FilterSelection, Page, DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_CAP,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Ready,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    DatasetLoaded(Vec<EmojiRecord>),
    /// The dataset could not be loaded; the state stays `Loading`.
    LoadFailed(String),
    SelectGroup(Option<String>),
    SelectCategory(Option<String>),
    /// Commits the pending selection and returns to page 1.
    Submit,
    /// Drops both pending and active selections and returns to page 1.
    ClearFilters,
    GoToPage(usize),
    NextPage,
    PreviousPage,
    /// Zero is ignored.
    SetPageSize(usize),
}

#[derive(Clone, Debug)]
pub struct AppState {
    dataset: Arc<[EmojiRecord]>,
    status: LoadStatus,
    pending: FilterSelection,
    active: FilterSelection,
    current_page: usize,
    page_size: usize,
    window_cap: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_CAP)
    }
}

impl AppState {
    pub fn new(page_size: usize, window_cap: usize) -> Self {
        Self {
            dataset: Arc::from(Vec::new()),
            status: LoadStatus::Loading,
            pending: FilterSelection::default(),
            active: FilterSelection::default(),
            current_page: 1,
            page_size: page_size.max(1),
            window_cap: window_cap.max(1),
        }
    }

    pub fn dataset(&self) -> &[EmojiRecord] {
        &self.dataset
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn pending(&self) -> &FilterSelection {
        &self.pending
    }

    pub fn active(&self) -> &FilterSelection {
        &self.active
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn window_cap(&self) -> usize {
        self.window_cap
    }

    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::DatasetLoaded(records) => {
                self.dataset = Arc::from(records);
                self.status = LoadStatus::Ready;
            }
            Event::LoadFailed(_) => {}
            Event::SelectGroup(group) => {
                self.pending = self.pending.with_group(group);
            }
            Event::SelectCategory(category) => {
                self.pending = self.pending.with_category(category);
            }
            Event::Submit => {
                self.active = self.pending.clone();
                self.current_page = 1;
            }
            Event::ClearFilters => {
                self.pending = FilterSelection::default();
                self.active = FilterSelection::default();
                self.current_page = 1;
            }
            Event::GoToPage(page) => {
                self.current_page = page;
            }
            Event::NextPage => {
                self.current_page = self.current_page.saturating_add(1);
            }
            Event::PreviousPage => {
                self.current_page = self.current_page.saturating_sub(1);
            }
            Event::SetPageSize(size) => {
                if size > 0 {
                    self.page_size = size;
                }
            }
        }
        self.reclamp();
        self
    }

    pub fn apply_all<I: IntoIterator<Item = Event>>(self, events: I) -> Self {
        events.into_iter().fold(self, |state, event| state.apply(event))
    }

    fn matched_len(&self) -> usize {
        self.dataset
            .iter()
            .filter(|r| self.active.matches(r))
            .count()
    }

    fn reclamp(&mut self) {
        let total = pipeline::total_pages(self.matched_len(), self.page_size);
        self.current_page = pipeline::clamp_page(self.current_page, total);
    }

    pub fn view(&self) -> View<'_> {
        let filtered = pipeline::apply_filter(self.dataset.iter(), &self.active);
        let page = pipeline::paginate(&filtered, self.current_page, self.page_size, self.window_cap);
        View {
            status: self.status,
            vocabulary: pipeline::extract_options(&self.dataset),
            pending: &self.pending,
            active: &self.active,
            dataset_len: self.dataset.len(),
            matched: filtered.len(),
            page,
        }
    }
}

/// Everything a renderer needs, derived from one [`AppState`].
#[derive(Clone, Debug)]
pub struct View<'a> {
    pub status: LoadStatus,
    pub vocabulary: FilterOptionVocabulary,
    pub pending: &'a FilterSelection,
    pub active: &'a FilterSelection,
    pub dataset_len: usize,
    pub matched: usize,
    pub page: Page<&'a EmojiRecord>,
}

impl View<'_> {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<EmojiRecord> {
        (0..n)
            .map(|i| {
                let group = if i % 2 == 0 { "face" } else { "animal" };
                EmojiRecord::new(&format!("emoji {i}"), "misc", group, &["U+1F600"])
            })
            .collect()
    }

    fn loaded(n: usize) -> AppState {
        AppState::default().apply(Event::DatasetLoaded(records(n)))
    }

    #[test]
    fn starts_loading_and_empty() {
        let state = AppState::default();
        let view = state.view();
        assert!(view.is_loading());
        assert!(view.vocabulary.is_empty());
        assert!(view.page.items.is_empty());
        assert_eq!(view.page.state.current_page, 1);
    }

    #[test]
    fn load_failure_stays_loading() {
        let state = AppState::default().apply(Event::LoadFailed("boom".to_string()));
        assert_eq!(state.status(), LoadStatus::Loading);
        assert!(state.dataset().is_empty());
    }

    #[test]
    fn loading_populates_vocabulary() {
        let state = loaded(3);
        let view = state.view();
        assert_eq!(view.status, LoadStatus::Ready);
        assert_eq!(view.vocabulary.groups, vec!["face", "animal"]);
        assert_eq!(view.vocabulary.categories, vec!["misc"]);
    }

    #[test]
    fn pending_selection_is_invisible_until_submit() {
        let state = loaded(25).apply(Event::SelectGroup(Some("face".to_string())));
        assert_eq!(state.view().matched, 25);
        let state = state.apply(Event::Submit);
        assert_eq!(state.view().matched, 13);
        assert_eq!(state.active().group.as_deref(), Some("face"));
    }

    #[test]
    fn submit_resets_to_first_page() {
        let state = loaded(25)
            .apply(Event::GoToPage(3))
            .apply(Event::SelectCategory(Some("misc".to_string())))
            .apply(Event::Submit);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn clear_filters_restores_everything() {
        let state = loaded(25)
            .apply(Event::SelectGroup(Some("animal".to_string())))
            .apply(Event::Submit)
            .apply(Event::ClearFilters);
        assert!(state.pending().is_empty());
        assert!(state.active().is_empty());
        assert_eq!(state.view().matched, 25);
    }

    #[test]
    fn navigation_clamps_at_edges() {
        let state = loaded(25).apply(Event::PreviousPage);
        assert_eq!(state.current_page(), 1);
        let state = state.apply_all([Event::NextPage, Event::NextPage, Event::NextPage]);
        assert_eq!(state.current_page(), 3);
        let state = state.apply(Event::GoToPage(40));
        assert_eq!(state.current_page(), 3);
        let state = state.apply(Event::GoToPage(0));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn shrinking_result_reclamps_page() {
        let state = loaded(25).apply(Event::GoToPage(3));
        assert_eq!(state.current_page(), 3);
        let state = state.apply(Event::SetPageSize(20));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.view().page.items.len(), 5);
    }

    #[test]
    fn zero_page_size_is_ignored() {
        let state = loaded(25).apply(Event::SetPageSize(0));
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn view_exposes_navigation() {
        let view_state = loaded(25).apply(Event::GoToPage(2));
        let view = view_state.view();
        assert_eq!(view.page.state.current_page, 2);
        assert_eq!(view.page.window, vec![1, 2, 3]);
        assert!(view.page.state.has_previous());
        assert!(view.page.state.has_next());
        assert_eq!(view.page.items[0].name, "emoji 10");
    }

    #[test]
    fn dataset_is_shared_not_copied_on_clone() {
        let state = loaded(5);
        let copy = state.clone();
        assert!(std::ptr::eq(state.dataset(), copy.dataset()));
    }
}
