use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, *format, file, *force)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported sessions as {}", format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
