//! Single-owner SQLite connection handle.
//!
//! Every command invocation opens its own `DbPool`; a handle is never
//! shared across threads. Writes go through explicit transactions on
//! `conn`, so a save either fully applies or fully rolls back.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let conn =
            Connection::open(Path::new(path)).map_err(|e| AppError::storage("open", e))?;

        // A short busy timeout lets a concurrent reader wait out an
        // in-flight write instead of failing immediately.
        conn.busy_timeout(std::time::Duration::from_secs(5))
            .map_err(|e| AppError::storage("open", e))?;

        Ok(Self { conn })
    }
}
