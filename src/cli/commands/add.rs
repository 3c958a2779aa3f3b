use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::save_session;
use crate::errors::{AppError, AppResult};
use crate::models::subject::Subject;
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_hms, parse_duration_spec};
use crate::weather::WeatherService;

/// Log a completed study session directly, without running the timer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        duration,
        subject,
        location,
        weather,
    } = cmd
    {
        //
        // 1. Parse duration spec (mandatory)
        //
        let duration_secs = parse_duration_spec(duration)?;

        //
        // 2. Resolve subject (default from config)
        //
        let name = subject
            .as_deref()
            .unwrap_or(cfg.default_subject.as_str());
        let subject = Subject::from_code(name).ok_or_else(|| {
            AppError::Validation(format!(
                "Invalid subject '{}'. Valid options: {}",
                name,
                Subject::valid_names()
            ))
        })?;

        //
        // 3. Weather snapshot (explicit value skips the lookup)
        //
        let condition = match weather {
            Some(w) => w.clone(),
            None => WeatherService::new(cfg)?.snapshot_condition(),
        };

        //
        // 4. Persist
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let location = location.clone().unwrap_or_default();
        let id = save_session(
            &mut pool,
            duration_secs,
            subject.name(),
            &condition,
            &location,
        )?;

        success(format!(
            "Session #{} saved: {} ({}, {})",
            id,
            format_hms(duration_secs),
            subject.name(),
            condition
        ));

        if let Err(e) = ttlog(
            &pool.conn,
            "session_saved",
            subject.name(),
            &format!(
                "Logged {} session of {}",
                subject.name(),
                format_hms(duration_secs)
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
