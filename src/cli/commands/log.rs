use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;

/// Color the operation column by kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "session_saved" => Colour::Green,
        "goals_updated" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;

        let mut stmt = pool
            .conn
            .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")
            .map_err(|e| AppError::storage("print_log", e))?;

        let rows = stmt
            .query_map([], |row| {
                let id: i64 = row.get(0)?;
                let raw_date: String = row.get(1)?;
                let operation: String = row.get(2)?;
                let target: String = row.get(3)?;
                let message: String = row.get(4)?;

                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                Ok((id, date, operation, target, message))
            })
            .map_err(|e| AppError::storage("print_log", e))?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r.map_err(|e| AppError::storage("print_log", e))?);
        }

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| {
                if target.is_empty() {
                    op.len()
                } else {
                    op.len() + target.len() + 3
                }
            })
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{} ({})", operation, target)
            };

            // Padding is computed on the plain width; only the operation
            // word itself carries color.
            let padding = " ".repeat(op_w.saturating_sub(op_target.len()));
            let mut colored = color.paint(operation.as_str()).to_string();
            if !target.is_empty() {
                colored.push_str(&format!(" ({})", target));
            }

            println!("{:>4}: {} | {}{} => {}", id, date, colored, padding, message);
        }
    }

    Ok(())
}
