use std::ops::RangeInclusive;

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_WINDOW_CAP: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl PageState {
    /// Builds a page state with `requested` clamped to `[1, max(1, total_pages)]`.
    ///
    /// A zero `page_size` is treated as one so the state never divides by zero.
    pub fn new(requested: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let mut state = Self {
            current_page: 1,
            page_size,
            total_items,
        };
        state.current_page = clamp_page(requested, state.total_pages());
        state
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Index range of the current page within the filtered sequence.
    pub fn bounds(&self) -> (usize, usize) {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        (start, end)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Page numbers shown in the navigation bar.
///
/// With `half = ceil(cap / 2)`: all pages when they fit, the first `cap` pages
/// near the start, the last `cap` pages once `current >= total - half` (as long
/// as that window still holds `current`), and `[current - half, current + half - 1]`
/// otherwise. The current page is always inside the window.
pub fn page_window(current_page: usize, total_pages: usize, cap: usize) -> RangeInclusive<usize> {
    let cap = cap.max(1);
    if total_pages <= cap {
        return 1..=total_pages;
    }
    let half = cap.div_ceil(2);
    if current_page <= half {
        1..=cap
    } else if current_page >= total_pages - half && current_page > total_pages - cap {
        (total_pages - cap + 1)..=total_pages
    } else {
        (current_page - half)..=(current_page + half - 1)
    }
}

/// One rendered page of a filtered sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub state: PageState,
    pub window: Vec<usize>,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }
}

pub fn paginate<T: Clone>(items: &[T], requested: usize, page_size: usize, cap: usize) -> Page<T> {
    let state = PageState::new(requested, page_size, items.len());
    let (start, end) = state.bounds();
    Page {
        items: items[start..end].to_vec(),
        state,
        window: page_window(state.current_page, state.total_pages(), cap).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_twenty_five() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(&items, 1, 10, DEFAULT_WINDOW_CAP);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.window, vec![1, 2, 3]);
        assert!(!page.state.has_previous());
        assert!(page.state.has_next());
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(&items, 3, 10, DEFAULT_WINDOW_CAP);
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
        assert!(page.state.has_previous());
        assert!(!page.state.has_next());
    }

    #[test]
    fn empty_sequence_has_zero_pages() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 4, 10, DEFAULT_WINDOW_CAP);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages(), 0);
        assert_eq!(page.state.current_page, 1);
        assert!(page.window.is_empty());
        assert!(!page.state.has_previous());
        assert!(!page.state.has_next());
    }

    #[test]
    fn out_of_range_requests_clamp() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&items, 0, 10, 10).state.current_page, 1);
        assert_eq!(paginate(&items, 99, 10, 10).state.current_page, 3);
    }

    #[test]
    fn window_shows_everything_under_cap() {
        assert_eq!(page_window(4, 7, 10), 1..=7);
        assert_eq!(page_window(10, 10, 10), 1..=10);
    }

    #[test]
    fn window_near_start() {
        assert_eq!(page_window(1, 20, 10), 1..=10);
        assert_eq!(page_window(5, 20, 10), 1..=10);
    }

    #[test]
    fn window_near_end() {
        assert_eq!(page_window(15, 20, 10), 11..=20);
        assert_eq!(page_window(20, 20, 10), 11..=20);
    }

    #[test]
    fn window_centered() {
        assert_eq!(page_window(6, 20, 10), 1..=10);
        assert_eq!(page_window(10, 20, 10), 5..=14);
        assert_eq!(page_window(14, 20, 10), 9..=18);
    }

    #[test]
    fn odd_cap_centered_span() {
        // half = 3, so the centered window is current-3 ..= current+2
        assert_eq!(page_window(10, 20, 5), 7..=12);
    }

    #[test]
    fn single_page_cap_keeps_current_page() {
        assert_eq!(page_window(2, 3, 1), 1..=2);
        assert_eq!(page_window(3, 3, 1), 3..=3);
        assert_eq!(page_window(1, 3, 1), 1..=1);
    }

    #[test]
    fn window_always_holds_current_page() {
        for cap in 1..=11 {
            for total in 0..40 {
                for current in 1..=total {
                    let window = page_window(current, total, cap);
                    assert!(
                        window.contains(&current),
                        "current={current} total={total} cap={cap} window={window:?}"
                    );
                    assert!(*window.start() >= 1 && *window.end() <= total);
                }
            }
        }
    }

    #[test]
    fn zero_current_page_reads_as_first() {
        let state = PageState {
            current_page: 0,
            page_size: 10,
            total_items: 5,
        };
        assert_eq!(state.bounds(), (0, 5));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }
}
