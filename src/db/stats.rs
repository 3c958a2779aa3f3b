use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::subject::Subject;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::collections::HashMap;
use std::fs;

/// Per-subject duration sums, largest first.
pub fn subject_totals(pool: &mut DbPool) -> AppResult<Vec<(Subject, i64)>> {
    let mut stmt = pool
        .conn
        .prepare(
            "SELECT subject, SUM(duration) AS total
             FROM study_sessions
             GROUP BY subject
             ORDER BY total DESC",
        )
        .map_err(|e| AppError::storage("subject_totals", e))?;

    let rows = stmt
        .query_map([], |row| {
            let name: String = row.get(0)?;
            let total: i64 = row.get(1)?;
            Ok((name, total))
        })
        .map_err(|e| AppError::storage("subject_totals", e))?;

    let mut out = Vec::new();
    for r in rows {
        let (name, total) = r.map_err(|e| AppError::storage("subject_totals", e))?;
        if let Some(subject) = Subject::from_db_str(&name) {
            out.push((subject, total));
        }
    }
    Ok(out)
}

/// Duration sums per calendar date, for the given dates (zero-filled).
pub fn daily_totals(pool: &mut DbPool, dates: &[NaiveDate]) -> AppResult<Vec<(NaiveDate, i64)>> {
    let mut by_date: HashMap<String, i64> = HashMap::new();

    {
        let mut stmt = pool
            .conn
            .prepare(
                "SELECT DATE(start_time) AS day, SUM(duration)
                 FROM study_sessions
                 GROUP BY day",
            )
            .map_err(|e| AppError::storage("daily_totals", e))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(|e| AppError::storage("daily_totals", e))?;

        for r in rows {
            let (day, total) = r.map_err(|e| AppError::storage("daily_totals", e))?;
            by_date.insert(day, total);
        }
    }

    Ok(dates
        .iter()
        .map(|d| {
            let key = d.format("%Y-%m-%d").to_string();
            (*d, by_date.get(&key).copied().unwrap_or(0))
        })
        .collect())
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL SESSIONS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM study_sessions", [], |row| row.get(0))?;
    println!(
        "{}• Total sessions:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT DATE(start_time) FROM study_sessions ORDER BY start_time ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT DATE(start_time) FROM study_sessions ORDER BY start_time DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE SESSION DURATION
    //
    if count > 0 {
        let avg: f64 = pool.conn.query_row(
            "SELECT AVG(duration) FROM study_sessions",
            [],
            |row| row.get(0),
        )?;
        println!(
            "{}• Average session:{} {}",
            CYAN,
            RESET,
            crate::utils::time::format_compact(avg as i64)
        );
    }

    println!();
    Ok(())
}
