mod common;
use common::test_pool;

use rusqlite::params;
use studymetrics::core::progress::progress_percent;
use studymetrics::db::pool::DbPool;
use studymetrics::db::queries::{
    all_sessions, current_goals, daily_study_time, get_setting, save_goals, save_session,
    save_setting, total_study_time, weekly_study_time,
};
use studymetrics::errors::AppError;
use studymetrics::models::goals::StudyGoals;
use studymetrics::models::subject::Subject;

/// Insert a session row directly, bypassing the store's now()-based
/// timestamps, to simulate historical data.
fn insert_backdated(pool: &mut DbPool, start: &str, end: &str, duration: i64, subject: &str) {
    pool.conn
        .execute(
            "INSERT INTO study_sessions
             (start_time, end_time, duration, subject, weather_condition, location)
             VALUES (?1, ?2, ?3, ?4, 'Unknown', '')",
            params![start, end, duration, subject],
        )
        .expect("insert backdated session");
}

#[test]
fn save_session_roundtrip() {
    let (_dir, mut pool) = test_pool();

    let id = save_session(&mut pool, 1500, "Math", "Clouds", "Library").expect("save");
    assert!(id > 0);

    let sessions = all_sessions(&mut pool).expect("load");
    assert_eq!(sessions.len(), 1);

    let s = &sessions[0];
    assert_eq!(s.id, id);
    assert_eq!(s.duration_secs, 1500);
    assert_eq!(s.subject, Subject::Math);
    assert_eq!(s.weather_condition, "Clouds");
    assert_eq!(s.location, "Library");

    // duration == end_time - start_time, by construction.
    assert_eq!(
        s.end_time - s.start_time,
        chrono::Duration::seconds(1500)
    );
}

#[test]
fn invalid_subject_is_rejected_and_nothing_persisted() {
    let (_dir, mut pool) = test_pool();

    let err = save_session(&mut pool, 600, "Chemistry", "Unknown", "").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(err.to_string().contains("Invalid subject"));

    assert!(all_sessions(&mut pool).expect("load").is_empty());
}

#[test]
fn subject_validation_is_exact_match() {
    let (_dir, mut pool) = test_pool();

    // Lowercase is not in the canonical set; normalization is a CLI concern.
    let err = save_session(&mut pool, 600, "math", "Unknown", "").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn non_positive_duration_is_rejected() {
    let (_dir, mut pool) = test_pool();

    for bad in [0, -5] {
        let err = save_session(&mut pool, bad, "Math", "Unknown", "").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("positive"));
    }

    assert!(all_sessions(&mut pool).expect("load").is_empty());
}

#[test]
fn fallback_weather_string_is_stored_verbatim() {
    let (_dir, mut pool) = test_pool();

    save_session(&mut pool, 300, "General", "Unknown", "").expect("save");

    let sessions = all_sessions(&mut pool).expect("load");
    assert_eq!(sessions[0].weather_condition, "Unknown");
}

#[test]
fn total_study_time_sums_durations() {
    let (_dir, mut pool) = test_pool();

    assert_eq!(total_study_time(&mut pool).expect("empty total"), 0);

    for d in [100, 200, 300] {
        save_session(&mut pool, d, "General", "Unknown", "").expect("save");
    }

    assert_eq!(total_study_time(&mut pool).expect("total"), 600);
}

#[test]
fn sessions_are_returned_most_recent_first() {
    let (_dir, mut pool) = test_pool();

    // Both saved "now"; the longer one starts earlier (start = now - duration).
    save_session(&mut pool, 100, "Math", "Unknown", "").expect("save short");
    save_session(&mut pool, 200, "Science", "Unknown", "").expect("save long");
    insert_backdated(
        &mut pool,
        "2020-01-01 10:00:00",
        "2020-01-01 11:00:00",
        3600,
        "History",
    );

    let sessions = all_sessions(&mut pool).expect("load");
    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0].duration_secs, 100);
    assert_eq!(sessions[1].duration_secs, 200);
    assert_eq!(sessions[2].subject, Subject::History);
}

#[test]
fn daily_sum_excludes_backdated_sessions() {
    let (_dir, mut pool) = test_pool();

    // Tiny duration keeps the computed start_time on today's date even
    // when the test runs just after midnight.
    save_session(&mut pool, 5, "Math", "Unknown", "").expect("save today");
    insert_backdated(
        &mut pool,
        "2020-06-15 09:00:00",
        "2020-06-15 10:00:00",
        3600,
        "Math",
    );

    assert_eq!(daily_study_time(&mut pool).expect("daily"), 5);
    assert_eq!(total_study_time(&mut pool).expect("total"), 3605);
}

#[test]
fn weekly_sum_counts_only_the_current_iso_week() {
    let (_dir, mut pool) = test_pool();

    save_session(&mut pool, 7, "Language", "Unknown", "").expect("save this week");
    insert_backdated(
        &mut pool,
        "2020-06-15 09:00:00",
        "2020-06-15 10:00:00",
        3600,
        "Language",
    );

    assert_eq!(weekly_study_time(&mut pool).expect("weekly"), 7);
}

#[test]
fn goals_default_to_zero_when_unset() {
    let (_dir, mut pool) = test_pool();

    let goals = current_goals(&mut pool).expect("goals");
    assert_eq!(goals, StudyGoals::default());
    assert!(!goals.is_set());
}

#[test]
fn goals_upsert_replaces_the_singleton() {
    let (_dir, mut pool) = test_pool();

    save_goals(&mut pool, StudyGoals::new(3600, 7200)).expect("first save");
    save_goals(&mut pool, StudyGoals::new(1800, 0)).expect("second save");

    // Full replacement, not a merge: weekly went back to zero.
    let goals = current_goals(&mut pool).expect("goals");
    assert_eq!(goals, StudyGoals::new(1800, 0));

    // Still exactly one logical row.
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM study_goals", [], |r| r.get(0))
        .expect("count");
    assert_eq!(count, 1);
}

#[test]
fn negative_goals_are_rejected() {
    let (_dir, mut pool) = test_pool();

    let err = save_goals(&mut pool, StudyGoals::new(-1, 0)).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn settings_json_roundtrip() {
    let (_dir, mut pool) = test_pool();

    save_setting(&mut pool, "theme", &serde_json::json!("dark")).expect("save");
    save_setting(&mut pool, "chart_days", &serde_json::json!(14)).expect("save");

    assert_eq!(
        get_setting(&mut pool, "theme").expect("get"),
        Some(serde_json::json!("dark"))
    );
    assert_eq!(
        get_setting(&mut pool, "chart_days").expect("get"),
        Some(serde_json::json!(14))
    );
    assert_eq!(get_setting(&mut pool, "missing").expect("get"), None);

    // Overwrite keeps keys unique.
    save_setting(&mut pool, "theme", &serde_json::json!("light")).expect("overwrite");
    assert_eq!(
        get_setting(&mut pool, "theme").expect("get"),
        Some(serde_json::json!("light"))
    );
}

#[test]
fn malformed_setting_value_falls_back_to_raw_string() {
    let (_dir, mut pool) = test_pool();

    pool.conn
        .execute(
            "INSERT INTO settings (key, value) VALUES ('legacy', '{not json')",
            [],
        )
        .expect("insert raw");

    assert_eq!(
        get_setting(&mut pool, "legacy").expect("get"),
        Some(serde_json::Value::String("{not json".to_string()))
    );
}

#[test]
fn goal_progress_is_capped_and_never_divides_by_zero() {
    assert_eq!(progress_percent(1800, 3600), 50);
    assert_eq!(progress_percent(3600, 3600), 100);
    assert_eq!(progress_percent(9999, 3600), 100);
    assert_eq!(progress_percent(1800, 0), 0);
    assert_eq!(progress_percent(0, 3600), 0);
}
