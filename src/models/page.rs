pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Pagination cursor over a view.
///
/// `current_page` is signed: `change_page` may push it out of range (even
/// below 1) until the next `clamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page_size: usize,
    pub current_page: i64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.current_page = page;
        self
    }

    pub fn change_page(&mut self, delta: i64) {
        self.current_page = self.current_page.saturating_add(delta);
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn clamp(&mut self, view_len: usize) {
        let max = total_pages(view_len, self.page_size) as i64;
        self.current_page = self.current_page.clamp(1, max);
    }
}

pub fn total_pages(view_len: usize, page_size: usize) -> usize {
    view_len.div_ceil(page_size.max(1)).max(1)
}
