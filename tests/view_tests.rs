mod common;
use absencelog::core::{Session, filter_view, page_info, page_slice, summarize};
use absencelog::models::{EntryType, FilterSelector, LogEntry, PageState, Summary};
use common::{entry, store_with, two_year_dataset};
use chrono::Datelike;

#[test]
fn test_scenario_two_years_no_filter() {
    let store = store_with(&two_year_dataset());
    let mut session = Session::default();

    let view = session.recompute(store.entries());
    assert_eq!(view.view.len(), 7);
    assert_eq!(view.page.total_pages, 2);
    assert!(!view.page.has_prev);
    assert!(view.page.has_next);

    // Page 1: the five most recent, newest first.
    let visible = view.visible(&session.page);
    let expected: Vec<_> = store.entries().iter().rev().take(5).collect();
    assert_eq!(visible, expected.as_slice());
}

#[test]
fn test_scenario_filter_year_2023() {
    let store = store_with(&two_year_dataset());
    let mut session = Session::default();
    session.set_filter(FilterSelector::new(None, Some(2023)).unwrap());

    let view = session.recompute(store.entries());
    assert_eq!(view.view.len(), 4);
    assert_eq!(view.page.total_pages, 1);
    assert!(!view.page.has_next);
    assert_eq!(
        view.summary,
        Summary {
            total: 4,
            clock_in_count: 2,
            clock_out_count: 2,
        }
    );
}

#[test]
fn test_filter_is_conjunctive_and_reverse_chronological() {
    let data = two_year_dataset();
    let selectors = [
        FilterSelector::default(),
        FilterSelector::new(Some(7), None).unwrap(),
        FilterSelector::new(None, Some(2024)).unwrap(),
        FilterSelector::new(Some(1), Some(2024)).unwrap(),
        FilterSelector::new(Some(1), Some(2023)).unwrap(),
    ];

    for sel in selectors {
        let view = filter_view(&data, &sel);

        for e in &data {
            let local = e.local_time();
            let expected = sel.month.is_none_or(|m| local.month() == m)
                && sel.year.is_none_or(|y| local.year() == y);
            assert_eq!(view.contains(&e), expected, "{sel:?} vs {e:?}");
        }
        assert!(view.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }
}

#[test]
fn test_invalid_month_rejected() {
    assert!(FilterSelector::new(Some(0), None).is_err());
    assert!(FilterSelector::new(Some(13), Some(2024)).is_err());
}

#[test]
fn test_period_parsing() {
    assert_eq!(
        FilterSelector::from_period("2024").unwrap(),
        FilterSelector::new(None, Some(2024)).unwrap()
    );
    assert_eq!(
        FilterSelector::from_period("2024-03").unwrap(),
        FilterSelector::new(Some(3), Some(2024)).unwrap()
    );
    assert!(FilterSelector::from_period("2024-13").is_err());
    assert!(FilterSelector::from_period("March").is_err());
}

#[test]
fn test_pages_cover_view_exactly() {
    let mut data = Vec::new();
    for d in 1..=23 {
        let kind = if d % 2 == 0 { EntryType::ClockOut } else { EntryType::ClockIn };
        data.push(entry(kind, 2024, 4, d));
    }
    let view = filter_view(&data, &FilterSelector::default());

    for size in [1usize, 2, 5, 7, 23, 50] {
        let total = page_info(view.len(), &PageState::new(size)).total_pages;
        let mut joined = Vec::new();
        for p in 1..=total as i64 {
            joined.extend_from_slice(page_slice(&view, &PageState::new(size).with_page(p)));
        }
        assert_eq!(joined, view, "page size {size}");
    }
}

#[test]
fn test_empty_view_has_one_page() {
    let state = PageState::default();
    let info = page_info(0, &state);
    assert_eq!(info.total_pages, 1);
    assert!(!info.has_prev);
    assert!(!info.has_next);

    let empty: Vec<u8> = Vec::new();
    assert!(page_slice(&empty, &state).is_empty());
}

#[test]
fn test_change_page_is_clamped_only_on_recompute() {
    let store = store_with(&two_year_dataset());
    let mut session = Session::default();

    session.change_page(5);
    assert_eq!(session.page.current_page, 6);

    let view = session.recompute(store.entries());
    assert_eq!(session.page.current_page, 2);
    assert!(view.page.has_prev);
    assert!(!view.page.has_next);
    assert_eq!(view.visible(&session.page).len(), 2);

    session.change_page(-4);
    assert_eq!(session.page.current_page, -2);
    assert!(page_slice(&view.view, &session.page).is_empty());

    session.recompute(store.entries());
    assert_eq!(session.page.current_page, 1);
}

#[test]
fn test_extreme_page_deltas_saturate() {
    let store = store_with(&two_year_dataset());
    let mut session = Session::default();

    session.change_page(i64::MIN);
    session.change_page(i64::MIN);
    assert_eq!(session.page.current_page, i64::MIN);
    session.recompute(store.entries());
    assert_eq!(session.page.current_page, 1);

    session.change_page(i64::MAX);
    session.change_page(i64::MAX);
    assert_eq!(session.page.current_page, i64::MAX);
    session.recompute(store.entries());
    assert_eq!(session.page.current_page, 2);
}

#[test]
fn test_out_of_range_page_slice_is_empty() {
    let data = two_year_dataset();
    let view = filter_view(&data, &FilterSelector::default());
    assert!(page_slice(&view, &PageState::default().with_page(3)).is_empty());
}

#[test]
fn test_narrowing_filter_clamps_page() {
    let store = store_with(&two_year_dataset());
    let mut session = Session::default();
    session.change_page(1);
    session.recompute(store.entries());
    assert_eq!(session.page.current_page, 2);

    // Keep the page but narrow the view: recompute pulls it back in range.
    session.selector = FilterSelector::new(None, Some(2024)).unwrap();
    session.recompute(store.entries());
    assert_eq!(session.page.current_page, 1);
}

#[test]
fn test_summary_additivity() {
    let data = two_year_dataset();
    let all = summarize(&data);
    assert_eq!(all.clock_in_count + all.clock_out_count, all.total);

    let by_year: Summary = [2023, 2024]
        .into_iter()
        .map(|y| {
            let sel = FilterSelector::new(None, Some(y)).unwrap();
            summarize(filter_view(&data, &sel))
        })
        .sum();
    assert_eq!(by_year, all);
    assert_eq!(summarize(&Vec::<LogEntry>::new()), Summary::default());
}

#[test]
fn test_current_status_follows_last_entry() {
    let mut data = two_year_dataset();
    data.push(entry(EntryType::ClockIn, 2024, 2, 21));
    let store = store_with(&data);
    let mut session = Session::new(
        FilterSelector::new(None, Some(2023)).unwrap(),
        PageState::default(),
    );

    // Status ignores the filter: it is always the last entry in the store.
    let view = session.recompute(store.entries());
    assert_eq!(view.current_status, Some(EntryType::ClockIn));
}
