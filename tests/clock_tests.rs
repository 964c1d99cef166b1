mod common;
use absencelog::core::{ClockController, ClockOutcome, ClockState, EventStore, Session};
use absencelog::db::MemoryKv;
use absencelog::location::{LocationError, LocationOptions, NoProvider};
use absencelog::models::{EntryType, FilterSelector, Geolocation, PageState};
use chrono::{DateTime, TimeZone, Utc};
use common::{BrokenKv, FakeErr, FakeOk, Slow, store_with, two_year_dataset};
use std::time::Duration;

fn june_2024() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn test_unsupported_provider_records_entry_without_location() {
    let mut store = EventStore::load(MemoryKv::new());
    let mut session = Session::default();
    let mut controller = ClockController::new(&NoProvider);

    let outcome = controller
        .submit(&mut store, &mut session, EntryType::ClockIn, "")
        .await
        .unwrap();

    assert!(matches!(outcome, ClockOutcome::LocationUnsupported(_)));
    assert_eq!(controller.state(), ClockState::CompletedWithoutLocation);
    assert_eq!(store.len(), 1);

    let e = &store.entries()[0];
    assert_eq!(e.kind, EntryType::ClockIn);
    assert_eq!(e.notes, "");
    assert_eq!(e.geolocation, None);
}

#[tokio::test]
async fn test_successful_reading_is_attached() {
    let geo = Geolocation::new(45.46421, 9.19, 12.0);
    let provider = FakeOk(geo);
    let mut store = EventStore::load(MemoryKv::new());
    let mut session = Session::default();
    let mut controller = ClockController::new(&provider).with_clock(june_2024);

    assert_eq!(controller.state(), ClockState::Idle);
    let outcome = controller
        .submit(&mut store, &mut session, EntryType::ClockOut, "left early\nsick")
        .await
        .unwrap();

    assert!(outcome.has_location());
    assert_eq!(controller.state(), ClockState::Completed);
    assert_eq!(outcome.location_status(), "Location captured successfully.");

    let e = store.last().unwrap();
    assert_eq!(e.geolocation, Some(geo));
    assert_eq!(e.timestamp, june_2024());
    assert_eq!(e.notes, "left early\nsick");
    assert_eq!(store.current_status(), Some(EntryType::ClockOut));
}

#[tokio::test]
async fn test_provider_error_is_reported_not_raised() {
    let provider = FakeErr(LocationError::PermissionDenied("blocked".into()));
    let mut store = EventStore::load(MemoryKv::new());
    let mut session = Session::default();
    let mut controller = ClockController::new(&provider);

    let outcome = controller
        .submit(&mut store, &mut session, EntryType::ClockIn, "note")
        .await
        .unwrap();

    match &outcome {
        ClockOutcome::LocationFailed { reason, entry } => {
            assert!(reason.contains("blocked"));
            assert_eq!(entry.geolocation, None);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert!(outcome.status_message().ends_with("(location failed)."));
    assert_eq!(controller.state(), ClockState::CompletedWithoutLocation);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_timeout_records_without_location() {
    let provider = Slow(Duration::from_secs(5));
    let mut store = EventStore::load(MemoryKv::new());
    let mut session = Session::default();
    let mut controller =
        ClockController::new(&provider).with_options(LocationOptions::with_timeout_ms(20));

    let outcome = controller
        .submit(&mut store, &mut session, EntryType::ClockIn, "")
        .await
        .unwrap();

    match outcome {
        ClockOutcome::LocationFailed { reason, .. } => assert!(reason.contains("Timeout")),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(store.len(), 1);
    assert_eq!(store.entries()[0].geolocation, None);
}

#[tokio::test]
async fn test_default_options_request_fresh_high_accuracy_fix() {
    let controller = ClockController::new(&NoProvider);
    let opts = controller.options();
    assert!(opts.high_accuracy);
    assert_eq!(opts.timeout, Duration::from_millis(10_000));
    assert_eq!(opts.max_cached_age, Duration::ZERO);
}

#[tokio::test]
async fn test_each_submit_appends_exactly_one() {
    let ok = FakeOk(Geolocation::new(1.0, 1.0, 1.0));
    let err = FakeErr(LocationError::Unavailable("no signal".into()));
    let mut store = store_with(&two_year_dataset());
    let mut session = Session::default();

    let before = store.len();
    ClockController::new(&ok)
        .submit(&mut store, &mut session, EntryType::ClockIn, "a")
        .await
        .unwrap();
    ClockController::new(&err)
        .submit(&mut store, &mut session, EntryType::ClockIn, "b")
        .await
        .unwrap();
    ClockController::new(&NoProvider)
        .submit(&mut store, &mut session, EntryType::ClockOut, "c")
        .await
        .unwrap();

    assert_eq!(store.len(), before + 3);
    let notes: Vec<_> = store.entries()[before..].iter().map(|e| e.notes.as_str()).collect();
    assert_eq!(notes, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_matching_filter_resets_page() {
    let mut store = store_with(&two_year_dataset());
    let mut session = Session::new(
        FilterSelector::new(Some(6), Some(2024)).unwrap(),
        PageState::default().with_page(3),
    );

    ClockController::new(&NoProvider)
        .with_clock(june_2024)
        .submit(&mut store, &mut session, EntryType::ClockIn, "")
        .await
        .unwrap();

    assert_eq!(session.page.current_page, 1);
}

#[tokio::test]
async fn test_empty_filter_resets_page() {
    let mut store = store_with(&two_year_dataset());
    let mut session = Session::new(FilterSelector::default(), PageState::default().with_page(2));

    ClockController::new(&NoProvider)
        .submit(&mut store, &mut session, EntryType::ClockOut, "")
        .await
        .unwrap();

    assert_eq!(session.page.current_page, 1);
}

#[tokio::test]
async fn test_non_matching_filter_keeps_page() {
    let mut store = store_with(&two_year_dataset());
    let mut session = Session::new(
        FilterSelector::new(None, Some(2023)).unwrap(),
        PageState::default().with_page(2),
    );

    ClockController::new(&NoProvider)
        .with_clock(june_2024)
        .submit(&mut store, &mut session, EntryType::ClockIn, "")
        .await
        .unwrap();

    assert_eq!(session.page.current_page, 2);
    assert_eq!(session.selector.year, Some(2023));
}

#[tokio::test]
async fn test_failed_write_does_not_count_as_recorded() {
    let mut store = EventStore::load(BrokenKv {
        fail_set: true,
        ..Default::default()
    });
    let mut session = Session::default();
    let mut controller = ClockController::new(&NoProvider);

    let res = controller
        .submit(&mut store, &mut session, EntryType::ClockIn, "lost")
        .await;

    assert!(res.is_err());
    assert!(store.is_empty());
    assert_eq!(store.current_status(), None);
}
