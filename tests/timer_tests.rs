use std::time::{Duration, Instant};
use studymetrics::core::timer::StudyTimer;
use studymetrics::errors::AppError;
use studymetrics::utils::time::format_hms;

#[test]
fn start_stop_accumulates_exact_interval() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();

    timer.start_at(t0).expect("start from idle");
    assert!(timer.is_running());

    assert!(timer.stop_at(t0 + Duration::from_secs(90)));
    assert!(!timer.is_running());
    assert_eq!(timer.elapsed_at(t0 + Duration::from_secs(90)), Duration::from_secs(90));
}

#[test]
fn elapsed_is_frozen_while_idle() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();

    timer.start_at(t0).expect("start");
    timer.stop_at(t0 + Duration::from_secs(30));

    // Reading far in the future must not change the total.
    assert_eq!(
        timer.elapsed_at(t0 + Duration::from_secs(3600)),
        Duration::from_secs(30)
    );
}

#[test]
fn second_stop_is_a_noop() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();

    timer.start_at(t0).expect("start");
    assert!(timer.stop_at(t0 + Duration::from_secs(10)));

    // Already idle: no transition, no double counting.
    assert!(!timer.stop_at(t0 + Duration::from_secs(50)));
    assert_eq!(
        timer.elapsed_at(t0 + Duration::from_secs(50)),
        Duration::from_secs(10)
    );
}

#[test]
fn double_start_is_rejected() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();

    timer.start_at(t0).expect("start");
    let err = timer.start_at(t0 + Duration::from_secs(1)).unwrap_err();
    assert!(matches!(err, AppError::Timer(_)));

    // Original interval still intact.
    assert!(timer.is_running());
    assert_eq!(
        timer.elapsed_at(t0 + Duration::from_secs(5)),
        Duration::from_secs(5)
    );
}

#[test]
fn stop_and_resume_accumulates_across_intervals() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();

    timer.start_at(t0).expect("first start");
    timer.stop_at(t0 + Duration::from_secs(10));

    timer.start_at(t0 + Duration::from_secs(100)).expect("resume");
    timer.stop_at(t0 + Duration::from_secs(125));

    assert_eq!(
        timer.elapsed_at(t0 + Duration::from_secs(125)),
        Duration::from_secs(35)
    );
}

#[test]
fn display_reads_are_monotonic_while_running() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();
    timer.start_at(t0).expect("start");

    let mut last = Duration::ZERO;
    for offset in [0u64, 1, 2, 5, 30, 3600] {
        let elapsed = timer.elapsed_at(t0 + Duration::from_secs(offset));
        assert!(elapsed >= last, "elapsed went backwards at +{}s", offset);
        last = elapsed;
    }
}

#[test]
fn take_elapsed_closes_the_session_boundary() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();

    timer.start_at(t0).expect("start");
    timer.stop_at(t0 + Duration::from_secs(42));

    assert_eq!(timer.take_elapsed(), Duration::from_secs(42));
    // A second take yields nothing: finalizing twice cannot double-save.
    assert_eq!(timer.take_elapsed(), Duration::ZERO);
}

#[test]
fn clear_resets_a_running_timer() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();

    timer.start_at(t0).expect("start");
    timer.clear();

    assert!(!timer.is_running());
    assert_eq!(timer.elapsed_at(t0 + Duration::from_secs(99)), Duration::ZERO);
}

#[test]
fn display_formats_zero_padded_hms() {
    let t0 = Instant::now();
    let mut timer = StudyTimer::new();
    timer.start_at(t0).expect("start");

    assert_eq!(timer.display_at(t0 + Duration::from_secs(0)), "00:00:00");
    assert_eq!(timer.display_at(t0 + Duration::from_secs(61)), "00:01:01");
    assert_eq!(timer.display_at(t0 + Duration::from_secs(3661)), "01:01:01");
}

#[test]
fn hours_are_unbounded_not_wrapped() {
    assert_eq!(format_hms(100 * 3600), "100:00:00");
    assert_eq!(format_hms(360_000 + 59), "100:00:59");
}
