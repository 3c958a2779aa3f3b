use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::progress_percent;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{current_goals, daily_study_time, save_goals, weekly_study_time};
use crate::errors::AppResult;
use crate::models::goals::StudyGoals;
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_compact, parse_duration_spec};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goals { daily, weekly } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let current = current_goals(&mut pool)?;

        //
        // Update mode: at least one of --daily / --weekly given. Unset
        // flags keep their current value; the store replaces the record.
        //
        if daily.is_some() || weekly.is_some() {
            let daily_secs = match daily {
                Some(spec) => parse_duration_spec(spec)?,
                None => current.daily_secs,
            };
            let weekly_secs = match weekly {
                Some(spec) => parse_duration_spec(spec)?,
                None => current.weekly_secs,
            };

            let goals = StudyGoals::new(daily_secs, weekly_secs);
            save_goals(&mut pool, goals)?;

            success(format!(
                "Goals updated: daily {}, weekly {}",
                format_compact(goals.daily_secs),
                format_compact(goals.weekly_secs)
            ));

            if let Err(e) = ttlog(
                &pool.conn,
                "goals_updated",
                "",
                &format!(
                    "Goals set to daily={}s weekly={}s",
                    goals.daily_secs, goals.weekly_secs
                ),
            ) {
                warning(format!("Failed to write internal log: {}", e));
            }

            return Ok(());
        }

        //
        // Display mode
        //
        if !current.is_set() {
            println!("No goals set. Use --daily / --weekly to set them.");
            return Ok(());
        }

        let daily_done = daily_study_time(&mut pool)?;
        let weekly_done = weekly_study_time(&mut pool)?;

        println!("🎯 Study goals:");
        println!(
            "  Daily:  {} / {} ({}%)",
            format_compact(daily_done),
            format_compact(current.daily_secs),
            progress_percent(daily_done, current.daily_secs)
        );
        println!(
            "  Weekly: {} / {} ({}%)",
            format_compact(weekly_done),
            format_compact(current.weekly_secs),
            progress_percent(weekly_done, current.weekly_secs)
        );
    }
    Ok(())
}
