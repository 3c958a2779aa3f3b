use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::progress::{progress_bar, progress_percent};
use crate::db::pool::DbPool;
use crate::db::queries::{current_goals, daily_study_time, total_study_time, weekly_study_time};
use crate::db::stats::{daily_totals, subject_totals};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, color_for_progress};
use crate::utils::date::last_n_days;
use crate::utils::time::format_compact;

/// Cumulative total-hour milestones shown as achievements.
const MILESTONES: [i64; 3] = [10, 50, 100];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { days } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let total = total_study_time(&mut pool)?;
        let daily = daily_study_time(&mut pool)?;
        let weekly = weekly_study_time(&mut pool)?;

        header("📊 Study statistics");
        println!("  Total:     {}", format_compact(total));
        println!("  Today:     {}", format_compact(daily));
        println!("  This week: {}", format_compact(weekly));

        //
        // Per-subject breakdown
        //
        let by_subject = subject_totals(&mut pool)?;
        if !by_subject.is_empty() {
            header("📚 By subject");
            for (subject, secs) in &by_subject {
                let share = if total > 0 {
                    (*secs as f64 / total as f64) * 100.0
                } else {
                    0.0
                };
                println!(
                    "  {:<9} {:>9}  ({:.1}%)",
                    subject.name(),
                    format_compact(*secs),
                    share
                );
            }
        }

        //
        // Daily trend
        //
        let trend = daily_totals(&mut pool, &last_n_days(*days))?;
        header(format!("📈 Daily trend (last {} days)", days));
        for (date, secs) in &trend {
            let rendered = format_compact(*secs);
            if *secs == 0 {
                println!("  {}  {}{}{}", date, GREY, rendered, RESET);
            } else {
                println!("  {}  {}", date, rendered);
            }
        }

        //
        // Goal progress
        //
        let goals = current_goals(&mut pool)?;
        if goals.is_set() {
            header("🎯 Goal progress");
            print_goal("Daily", daily, goals.daily_secs);
            print_goal("Weekly", weekly, goals.weekly_secs);
        }

        //
        // Achievements
        //
        header("🏆 Achievements");
        let total_hours = total / 3600;
        for hours in MILESTONES {
            let mark = if total_hours >= hours { "★" } else { "☆" };
            println!("  {} {} hours", mark, hours);
        }
        println!();
    }
    Ok(())
}

fn print_goal(label: &str, studied: i64, goal: i64) {
    if goal == 0 {
        println!("  {:<7} {}no goal set{}", label, GREY, RESET);
        return;
    }

    let pct = progress_percent(studied, goal);
    println!(
        "  {:<7} {}{:>3}%{} {} {} / {}",
        label,
        color_for_progress(pct),
        pct,
        RESET,
        progress_bar(pct, 20),
        format_compact(studied),
        format_compact(goal)
    );
}
