//! Fixed-size windowing over a reverse-chronological view.

use crate::models::PageState;
use crate::models::page::total_pages;

/// Derived pagination facts for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: i64,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

pub fn page_info(view_len: usize, state: &PageState) -> PageInfo {
    let total = total_pages(view_len, state.page_size);
    PageInfo {
        current_page: state.current_page,
        total_pages: total,
        has_prev: state.current_page > 1,
        has_next: state.current_page < total as i64 && view_len > 0,
    }
}

/// Items on the current page. Out-of-range pages give an empty slice.
pub fn page_slice<'v, T>(view: &'v [T], state: &PageState) -> &'v [T] {
    if state.current_page < 1 {
        return &[];
    }

    let start = (state.current_page as usize - 1).saturating_mul(state.page_size);
    if start >= view.len() {
        return &[];
    }
    let end = start.saturating_add(state.page_size).min(view.len());
    &view[start..end]
}
