use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{all_settings, get_setting, save_setting};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde_json::Value;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings { set, get, list } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(pair) = set {
            let [key, raw] = pair.as_slice() else {
                return Err(AppError::Validation(
                    "--set requires exactly KEY VALUE".to_string(),
                ));
            };

            // Valid JSON is stored as-is; anything else becomes a string.
            let value: Value =
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()));
            save_setting(&mut pool, key, &value)?;
            success(format!("Setting '{}' saved.", key));
            return Ok(());
        }

        if let Some(key) = get {
            match get_setting(&mut pool, key)? {
                Some(value) => println!("{}", render(&value)),
                None => println!("(unset)"),
            }
            return Ok(());
        }

        if *list {
            let settings = all_settings(&mut pool)?;
            if settings.is_empty() {
                println!("No settings stored.");
            } else {
                for (key, value) in settings {
                    println!("{} = {}", key, render(&value));
                }
            }
            return Ok(());
        }

        println!("Nothing to do: use --set, --get or --list.");
    }
    Ok(())
}

/// Strings print bare; everything else as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
