use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::foodlog::FoodLog;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        let log = FoodLog::load(SqliteStore::new(&pool.conn, &cfg.storage_key))?;

        let n = ExportLogic::export(log.entries(), *format, file, range.as_deref(), *force)?;

        if n > 0
            && let Err(e) = ttlog(
                &pool.conn,
                "export",
                file,
                &format!("Exported {} entries as {}", n, format.as_str()),
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
