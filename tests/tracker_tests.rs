mod common;
use common::test_pool;

use std::time::{Duration, Instant};
use studymetrics::core::tracker::SessionTracker;
use studymetrics::db::queries::all_sessions;
use studymetrics::models::subject::Subject;
use studymetrics::weather::WeatherService;

/// A weather service with no API key configured: snapshots degrade to the
/// fallback without touching the network.
fn offline_weather() -> WeatherService {
    WeatherService::from_parts(
        "http://127.0.0.1:9".to_string(),
        String::new(),
        "Nowhere".to_string(),
        1,
        300,
    )
    .expect("weather service")
}

#[test]
fn stop_persists_the_accumulated_interval() {
    let (_dir, mut pool) = test_pool();
    let mut weather = offline_weather();

    {
        let mut tracker =
            SessionTracker::new(&mut pool, &mut weather, Subject::Math, "Desk".to_string());

        let t0 = Instant::now();
        tracker.timer.start_at(t0).expect("start");
        tracker.timer.stop_at(t0 + Duration::from_secs(1500));

        let id = tracker.stop().expect("finalize").expect("session saved");
        assert!(id > 0);
    }

    let sessions = all_sessions(&mut pool).expect("load");
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration_secs, 1500);
    assert_eq!(sessions[0].subject, Subject::Math);
    assert_eq!(sessions[0].weather_condition, "Unknown");
    assert_eq!(sessions[0].location, "Desk");
}

#[test]
fn zero_elapsed_stop_writes_nothing() {
    let (_dir, mut pool) = test_pool();
    let mut weather = offline_weather();

    {
        let mut tracker =
            SessionTracker::new(&mut pool, &mut weather, Subject::General, String::new());

        assert_eq!(tracker.stop().expect("stop with nothing"), None);
    }

    assert!(all_sessions(&mut pool).expect("load").is_empty());
}

#[test]
fn repeated_stop_does_not_duplicate_the_session() {
    let (_dir, mut pool) = test_pool();
    let mut weather = offline_weather();

    {
        let mut tracker =
            SessionTracker::new(&mut pool, &mut weather, Subject::History, String::new());

        let t0 = Instant::now();
        tracker.timer.start_at(t0).expect("start");
        tracker.timer.stop_at(t0 + Duration::from_secs(600));

        assert!(tracker.stop().expect("first stop").is_some());
        // Second stop: timer already idle and drained.
        assert_eq!(tracker.stop().expect("second stop"), None);
    }

    assert_eq!(all_sessions(&mut pool).expect("load").len(), 1);
}

#[test]
fn reset_finalizes_before_clearing() {
    let (_dir, mut pool) = test_pool();
    let mut weather = offline_weather();

    {
        let mut tracker =
            SessionTracker::new(&mut pool, &mut weather, Subject::Science, String::new());

        let t0 = Instant::now();
        tracker.timer.start_at(t0).expect("start");
        tracker.timer.stop_at(t0 + Duration::from_secs(300));
        tracker.timer.start_at(t0 + Duration::from_secs(400)).expect("resume");
        tracker.timer.stop_at(t0 + Duration::from_secs(500));

        // 300 + 100 accumulated; reset saves them, then zeroes the timer.
        assert!(tracker.reset().expect("reset").is_some());
        assert!(!tracker.timer.is_running());
        assert!(tracker.timer.elapsed().is_zero());
    }

    let sessions = all_sessions(&mut pool).expect("load");
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration_secs, 400);
}
