//! Terminal rendering of a computed view.

use crate::core::{PageInfo, ViewState};
use crate::models::{EntryType, LogEntry, PageState, Summary};
use crate::utils::colors::{GREY, RESET, colorize_in_out, colorize_optional};
use crate::utils::formatting::{bold, describe_geolocation, italic, wrap_notes};

const NOTES_WIDTH: usize = 72;

pub fn render_entry(entry: &LogEntry) -> String {
    let time = entry.local_time().format("%Y-%m-%d %H:%M:%S").to_string();
    let mut out = format!(
        "{}  {}\n",
        bold(&time),
        colorize_in_out(entry.kind.label(), entry.kind.is_in())
    );

    if entry.has_notes() {
        out.push_str(&italic("  Notes:"));
        out.push('\n');
        out.push_str(&wrap_notes(&entry.notes, NOTES_WIDTH, "    "));
        out.push('\n');
    }

    let geo = describe_geolocation(entry.geolocation.as_ref());
    out.push_str("  ");
    out.push_str(&colorize_optional(&geo, entry.geolocation.is_some()));
    if let Some(g) = &entry.geolocation {
        out.push_str(&format!(" {GREY}{}{RESET}", g.map_url()));
    }
    out.push('\n');
    out
}

pub fn render_status(status: Option<EntryType>) -> String {
    match status {
        Some(kind) => format!("Currently: {kind}"),
        None => "Not clocked in".to_string(),
    }
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Total: {} | Clock In: {} | Clock Out: {}",
        summary.total, summary.clock_in_count, summary.clock_out_count
    )
}

pub fn render_page_footer(page: &PageInfo) -> String {
    let mut out = format!("Page {} of {}", page.current_page, page.total_pages);
    if page.has_prev {
        out.push_str(&format!("  ‹ --page {}", page.current_page - 1));
    }
    if page.has_next {
        out.push_str(&format!("  --page {} ›", page.current_page + 1));
    }
    out
}

/// Whole list screen: entries on the current page, footer, summary.
pub fn render_view(view: &ViewState<'_>, state: &PageState) -> String {
    let mut out = String::new();
    let visible = view.visible(state);

    if visible.is_empty() {
        out.push_str(&colorize_optional("No logs for the selected period.", false));
        out.push('\n');
    } else {
        for entry in visible {
            out.push_str(&render_entry(entry));
            out.push('\n');
        }
    }

    out.push_str(&render_page_footer(&view.page));
    out.push('\n');
    out.push_str(&render_summary(&view.summary));
    out.push('\n');
    out
}
