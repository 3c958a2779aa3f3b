use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::all_sessions;
use crate::errors::{AppError, AppResult};
use crate::models::session::StudySession;
use crate::models::subject::Subject;
use crate::utils::colors::{CYAN, RESET, grey_placeholder};
use crate::utils::time::format_hms;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, subject } = cmd {
        let filter = match subject {
            Some(name) => Some(Subject::from_code(name).ok_or_else(|| {
                AppError::Validation(format!(
                    "Invalid subject '{}'. Valid options: {}",
                    name,
                    Subject::valid_names()
                ))
            })?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let sessions = all_sessions(&mut pool)?;

        let rows: Vec<&StudySession> = sessions
            .iter()
            .filter(|s| filter.map(|f| s.subject == f).unwrap_or(true))
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        if rows.is_empty() {
            println!("No sessions found.");
            return Ok(());
        }

        println!("\n📅 Saved sessions (most recent first):\n");
        println!(
            "{}{:>5}  {:<19}  {:>9}  {:<9}  {:<14}  {}{}",
            CYAN, "id", "start", "duration", "subject", "weather", "location", RESET
        );

        for s in rows {
            let location = if s.location.is_empty() {
                grey_placeholder()
            } else {
                s.location.clone()
            };

            println!(
                "{:>5}  {:<19}  {:>9}  {:<9}  {:<14}  {}",
                s.id,
                s.start_str(),
                format_hms(s.duration_secs),
                s.subject.name(),
                s.weather_condition,
                location
            );
        }

        println!();
    }
    Ok(())
}
