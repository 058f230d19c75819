use crate::cli::commands::list::entries_table;
use crate::config::Config;
use crate::core::foodlog::FoodLog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::{bold, pad_left};

/// Today's intake totals followed by today's entries.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;
    let log = FoodLog::load(SqliteStore::new(&pool.conn, &cfg.storage_key))?;

    let today = date::today();
    let totals = log.totals_on(today);

    header(format!("今日摄入统计 {}", today));
    let cells = [
        ("热量 (kcal)", format!("{:.0}", totals.calories)),
        ("蛋白质 (g)", format!("{:.1}", totals.protein)),
        ("碳水 (g)", format!("{:.1}", totals.carbs)),
        ("脂肪 (g)", format!("{:.1}", totals.fat)),
    ];
    for (label, value) in cells {
        println!("{CYAN}{}{RESET}  {}", pad_left(label, 12), bold(&value));
    }

    println!();
    header("今日记录");
    let entries = log.entries_on(today);
    if entries.is_empty() {
        println!("{GREY}暂无今日记录{RESET}");
    } else {
        print!("{}", entries_table(&entries, false, cfg.separator()));
    }

    Ok(())
}
