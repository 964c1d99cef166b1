//! Session-scoped view state: the active filter and page cursor, plus the
//! full recompute that derives everything the presentation needs.

use crate::core::filter::filter_view;
use crate::core::pager::{PageInfo, page_info, page_slice};
use crate::core::summary::summarize;
use crate::models::{EntryType, FilterSelector, LogEntry, PageState, Summary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub selector: FilterSelector,
    pub page: PageState,
}

/// Result of a full recompute over the store.
#[derive(Debug, Clone)]
pub struct ViewState<'a> {
    /// Filtered entries, most recent first.
    pub view: Vec<&'a LogEntry>,
    pub page: PageInfo,
    pub summary: Summary,
    pub current_status: Option<EntryType>,
}

impl<'a> ViewState<'a> {
    pub fn visible(&self, state: &PageState) -> &[&'a LogEntry] {
        page_slice(&self.view, state)
    }
}

impl Session {
    pub fn new(selector: FilterSelector, page: PageState) -> Self {
        Self { selector, page }
    }

    /// Changing the filter restarts from the first page.
    pub fn set_filter(&mut self, selector: FilterSelector) {
        self.selector = selector;
        self.page.reset();
    }

    pub fn change_page(&mut self, delta: i64) {
        self.page.change_page(delta);
    }

    pub fn reset(&mut self) {
        self.selector = FilterSelector::default();
        self.page.reset();
    }

    /// Filter, clamp the page cursor, summarize.
    pub fn recompute<'a>(&mut self, entries: &'a [LogEntry]) -> ViewState<'a> {
        let view = filter_view(entries, &self.selector);
        self.page.clamp(view.len());
        let summary = summarize(view.iter().copied());

        ViewState {
            page: page_info(view.len(), &self.page),
            summary,
            current_status: entries.last().map(|e| e.kind),
            view,
        }
    }
}
