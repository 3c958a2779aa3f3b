use crate::db::pool::DbPool;
use crate::db::queries::all_sessions;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::{csv, json, notify_export_success};
use crate::ui::messages::warning;
use chrono::Local;
use std::path::PathBuf;

/// High-level export flow: load sessions, resolve the output path,
/// dispatch to the format writer.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(Self::default_filename(format)),
        };

        ensure_writable(&path, force)?;

        // Stored order is most-recent-first; exports read better
        // chronologically.
        let mut sessions = all_sessions(pool)?;
        sessions.reverse();

        if sessions.is_empty() {
            warning("No sessions to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => csv::write_csv(&path, &sessions)?,
            ExportFormat::Json => json::write_json(&path, &sessions)?,
        }

        notify_export_success(format.as_str().to_uppercase().as_str(), &path);

        Ok(())
    }

    /// Timestamped default name, e.g. `study_sessions_20260806_094500.csv`.
    fn default_filename(format: ExportFormat) -> String {
        format!(
            "study_sessions_{}.{}",
            Local::now().format("%Y%m%d_%H%M%S"),
            format.as_str()
        )
    }
}
