use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::SessionTracker;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::subject::Subject;
use crate::ui::messages::{error, info, warning};
use crate::weather::WeatherService;
use std::io::{self, BufRead, Write};

/// Interactive timer session driven by stdin commands.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Track { subject, location } = cmd {
        let subject = resolve_subject(subject.as_deref(), cfg)?;
        let location = location.clone().unwrap_or_default();

        let mut pool = DbPool::new(&cfg.database)?;
        let mut weather = WeatherService::new(cfg)?;
        let mut tracker = SessionTracker::new(&mut pool, &mut weather, subject, location);

        info(format!(
            "Tracking subject {} — commands: start | stop | reset | status | subject NAME | quit",
            subject.name()
        ));

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let input = line.trim();

            match input {
                "" => {}
                "start" => {
                    if let Err(e) = tracker.start() {
                        warning(e.to_string());
                    } else {
                        println!("▶ {}", tracker.display());
                    }
                }
                "stop" => {
                    if let Err(e) = tracker.stop() {
                        error(e.to_string());
                    }
                }
                "reset" => {
                    if let Err(e) = tracker.reset() {
                        error(e.to_string());
                    }
                    println!("⏱ {}", tracker.display());
                }
                "status" => {
                    println!(
                        "⏱ {} — {} ({})",
                        tracker.display(),
                        tracker.subject.name(),
                        if tracker.timer.is_running() {
                            "running"
                        } else {
                            "idle"
                        }
                    );
                }
                "quit" | "exit" => {
                    return finish(&mut tracker);
                }
                other => {
                    if let Some(name) = other.strip_prefix("subject ") {
                        match Subject::from_code(name.trim()) {
                            Some(s) => {
                                tracker.subject = s;
                                println!("📚 Subject set to {}", s.name());
                            }
                            None => warning(format!(
                                "Unknown subject '{}'. Valid options: {}",
                                name.trim(),
                                Subject::valid_names()
                            )),
                        }
                    } else {
                        warning(format!("Unknown command: {}", other));
                    }
                }
            }

            io::stdout().flush().ok();
        }

        // EOF behaves like quit.
        return finish(&mut tracker);
    }
    Ok(())
}

/// Finalize any tracked time before leaving the interactive session, so
/// quitting never silently drops a running interval.
fn finish(tracker: &mut SessionTracker) -> AppResult<()> {
    if tracker.timer.is_running() || !tracker.timer.elapsed().is_zero() {
        tracker.stop()?;
    }
    Ok(())
}

fn resolve_subject(requested: Option<&str>, cfg: &Config) -> AppResult<Subject> {
    let name = requested.unwrap_or(cfg.default_subject.as_str());
    Subject::from_code(name).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid subject '{}'. Valid options: {}",
            name,
            Subject::valid_names()
        ))
    })
}
