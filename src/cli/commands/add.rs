use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::foodlog::FoodLog;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryDraft;
use crate::models::meal::Meal;
use crate::ui::messages::{info, toast, warning};
use crate::utils::formatting::fmt_amount;

/// Log a new food entry for today.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        food,
        calories,
        meal,
        protein,
        carbs,
        fat,
    } = cmd
    {
        let meal = Meal::from_input(meal).ok_or_else(|| AppError::InvalidMeal(meal.clone()))?;

        let draft = EntryDraft {
            meal,
            food: food.clone(),
            calories: calories.clone(),
            protein: protein.clone(),
            carbs: carbs.clone(),
            fat: fat.clone(),
        };

        let pool = DbPool::open(&cfg.database)?;
        let mut log = FoodLog::load(SqliteStore::new(&pool.conn, &cfg.storage_key))?;

        let entry = log.add_entry(&draft)?;

        toast("添加成功", "饮食记录已保存");
        info(format!(
            "#{} {} {} | {} kcal | 蛋白质 {}g | 碳水 {}g | 脂肪 {}g",
            entry.id,
            entry.meal.label(),
            entry.food,
            fmt_amount(entry.calories),
            fmt_amount(entry.protein),
            fmt_amount(entry.carbs),
            fmt_amount(entry.fat),
        ));

        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &entry.id,
            &format!(
                "{} {} {} kcal",
                entry.meal.code(),
                entry.food,
                fmt_amount(entry.calories)
            ),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    Ok(())
}
