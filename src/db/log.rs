use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .map_err(|e| AppError::storage("ttlog", e))?;

    stmt.execute(params![now, operation, target, message])
        .map_err(|e| AppError::storage("ttlog", e))?;

    Ok(())
}
