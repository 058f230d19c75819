use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::foodlog::FoodLog;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, toast, warning};
use crate::ui::prompt::confirm;
use crate::utils::formatting::fmt_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let mut log = FoodLog::load(SqliteStore::new(&pool.conn, &cfg.storage_key))?;

        //
        // Confirmation prompt (only when there is something to delete)
        //
        if let Some(entry) = log.find(id) {
            let prompt = format!(
                "Delete entry #{} ({} {} {} kcal on {})? This action is irreversible.",
                entry.id,
                entry.meal.label(),
                entry.food,
                fmt_amount(entry.calories),
                entry.date
            );
            if !*yes && !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        match log.delete_entry(id)? {
            Some(entry) => {
                toast("删除成功", "记录已删除");
                if let Err(e) = ttlog(&pool.conn, "del", &entry.id, &entry.food) {
                    warning(format!("Failed to write internal log: {}", e));
                }
            }
            None => info(format!("No entry with id {}, nothing deleted.", id)),
        }
    }

    Ok(())
}
