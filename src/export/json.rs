use crate::errors::{AppError, AppResult};
use crate::models::session::StudySession;
use std::path::Path;

/// Write sessions as pretty-printed JSON.
pub fn write_json(path: &Path, sessions: &[StudySession]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sessions)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
