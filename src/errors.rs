//! Unified application error type.
//! All modules (db, core, weather, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    /// A persistence operation failed. Carries the name of the store
    /// operation so the caller knows exactly which write or read broke.
    #[error("Storage error in {operation}: {source}")]
    Storage {
        operation: String,
        #[source]
        source: rusqlite::Error,
    },

    // ---------------------------
    // Domain validation
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Timer
    // ---------------------------
    #[error("Timer error: {0}")]
    Timer(String),

    // ---------------------------
    // Weather lookup (never fatal for saves)
    // ---------------------------
    #[error("Weather service unavailable: {0}")]
    WeatherUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Wrap a rusqlite error with the name of the store operation that
    /// produced it.
    pub fn storage(operation: &str, source: rusqlite::Error) -> Self {
        AppError::Storage {
            operation: operation.to_string(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
