use crate::core::validate::validate_study_session;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::goals::StudyGoals;
use crate::models::session::{StudySession, format_timestamp, parse_timestamp};
use crate::models::subject::Subject;
use crate::utils::date;
use chrono::{Duration, Local};
use rusqlite::{OptionalExtension, Row, params};
use serde_json::Value;

/// Persist a completed study session.
///
/// Validation (positive duration, known subject) runs before any mutation;
/// a rejected save persists nothing. On success the store computes
/// `end_time = now` and `start_time = end_time - duration`, so the
/// `duration == end_time - start_time` invariant holds by construction.
/// Returns the id assigned to the new row.
pub fn save_session(
    pool: &mut DbPool,
    duration_secs: i64,
    subject: &str,
    weather: &str,
    location: &str,
) -> AppResult<i64> {
    let subject = validate_study_session(duration_secs, subject)?;

    let end_time = Local::now().naive_local();
    let start_time = end_time - Duration::seconds(duration_secs);

    let tx = pool
        .conn
        .transaction()
        .map_err(|e| AppError::storage("save_session", e))?;

    tx.execute(
        "INSERT INTO study_sessions
         (start_time, end_time, duration, subject, weather_condition, location)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            format_timestamp(&start_time),
            format_timestamp(&end_time),
            duration_secs,
            subject.to_db_str(),
            weather,
            location,
        ],
    )
    .map_err(|e| AppError::storage("save_session", e))?;

    let id = tx.last_insert_rowid();

    tx.commit().map_err(|e| AppError::storage("save_session", e))?;

    Ok(id)
}

pub fn map_row(row: &Row) -> rusqlite::Result<StudySession> {
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let start_time = parse_timestamp(&start_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(start_str.clone())),
        )
    })?;

    let end_time = parse_timestamp(&end_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(end_str.clone())),
        )
    })?;

    let subject_str: String = row.get("subject")?;
    let subject = Subject::from_db_str(&subject_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Validation(format!(
                "Invalid subject: {}",
                subject_str
            ))),
        )
    })?;

    Ok(StudySession {
        id: row.get("id")?,
        start_time,
        end_time,
        duration_secs: row.get("duration")?,
        subject,
        weather_condition: row.get("weather_condition")?,
        location: row.get("location")?,
    })
}

/// All sessions, most-recent-first by `start_time` (id breaks ties for
/// sessions saved within the same second).
pub fn all_sessions(pool: &mut DbPool) -> AppResult<Vec<StudySession>> {
    let mut stmt = pool
        .conn
        .prepare(
            "SELECT * FROM study_sessions
             ORDER BY start_time DESC, id DESC",
        )
        .map_err(|e| AppError::storage("all_sessions", e))?;

    let rows = stmt
        .query_map([], map_row)
        .map_err(|e| AppError::storage("all_sessions", e))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::storage("all_sessions", e))?);
    }
    Ok(out)
}

/// Sum of all recorded durations, in seconds. Zero when empty.
pub fn total_study_time(pool: &mut DbPool) -> AppResult<i64> {
    pool.conn
        .query_row(
            "SELECT COALESCE(SUM(duration), 0) FROM study_sessions",
            [],
            |row| row.get(0),
        )
        .map_err(|e| AppError::storage("total_study_time", e))
}

/// Seconds studied on the current local calendar date.
pub fn daily_study_time(pool: &mut DbPool) -> AppResult<i64> {
    let today = date::today().format("%Y-%m-%d").to_string();
    pool.conn
        .query_row(
            "SELECT COALESCE(SUM(duration), 0) FROM study_sessions
             WHERE DATE(start_time) = ?1",
            [today],
            |row| row.get(0),
        )
        .map_err(|e| AppError::storage("daily_study_time", e))
}

/// Seconds studied in the current local ISO week (Monday through Sunday).
pub fn weekly_study_time(pool: &mut DbPool) -> AppResult<i64> {
    let (monday, sunday) = date::iso_week_bounds(date::today());
    pool.conn
        .query_row(
            "SELECT COALESCE(SUM(duration), 0) FROM study_sessions
             WHERE DATE(start_time) BETWEEN ?1 AND ?2",
            params![
                monday.format("%Y-%m-%d").to_string(),
                sunday.format("%Y-%m-%d").to_string(),
            ],
            |row| row.get(0),
        )
        .map_err(|e| AppError::storage("weekly_study_time", e))
}

/// Replace the singleton goals record (upsert, not merge).
pub fn save_goals(pool: &mut DbPool, goals: StudyGoals) -> AppResult<()> {
    if goals.daily_secs < 0 || goals.weekly_secs < 0 {
        return Err(AppError::Validation(
            "Goals must be non-negative durations".to_string(),
        ));
    }

    pool.conn
        .execute(
            "INSERT OR REPLACE INTO study_goals (id, daily_goal, weekly_goal, timestamp)
             VALUES (1, ?1, ?2, datetime('now','localtime'))",
            params![goals.daily_secs, goals.weekly_secs],
        )
        .map_err(|e| AppError::storage("save_goals", e))?;
    Ok(())
}

/// Current goals, `{0, 0}` if never set.
pub fn current_goals(pool: &mut DbPool) -> AppResult<StudyGoals> {
    let row = pool
        .conn
        .query_row(
            "SELECT daily_goal, weekly_goal FROM study_goals WHERE id = 1",
            [],
            |row| Ok(StudyGoals::new(row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| AppError::storage("current_goals", e))?;

    Ok(row.unwrap_or_default())
}

/// Store a setting value, JSON-encoded.
pub fn save_setting(pool: &mut DbPool, key: &str, value: &Value) -> AppResult<()> {
    let encoded = serde_json::to_string(value)
        .map_err(|e| AppError::Other(format!("Failed to encode setting '{}': {}", key, e)))?;

    pool.conn
        .execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, encoded],
        )
        .map_err(|e| AppError::storage("save_setting", e))?;
    Ok(())
}

/// Read a setting value. Malformed stored JSON degrades to the raw text
/// as a JSON string instead of failing.
pub fn get_setting(pool: &mut DbPool, key: &str) -> AppResult<Option<Value>> {
    let raw: Option<String> = pool
        .conn
        .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| AppError::storage("get_setting", e))?;

    Ok(raw.map(|r| serde_json::from_str(&r).unwrap_or(Value::String(r))))
}

/// All settings, sorted by key.
pub fn all_settings(pool: &mut DbPool) -> AppResult<Vec<(String, Value)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT key, value FROM settings ORDER BY key ASC")
        .map_err(|e| AppError::storage("all_settings", e))?;

    let rows = stmt
        .query_map([], |row| {
            let key: String = row.get(0)?;
            let raw: String = row.get(1)?;
            Ok((key, raw))
        })
        .map_err(|e| AppError::storage("all_settings", e))?;

    let mut out = Vec::new();
    for r in rows {
        let (key, raw) = r.map_err(|e| AppError::storage("all_settings", e))?;
        let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        out.push((key, value));
    }
    Ok(out)
}
