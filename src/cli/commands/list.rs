use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::foodlog::FoodLog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::FoodEntry;
use crate::models::macros::MacroTotals;
use crate::models::meal::Meal;
use crate::utils::colors::{RESET, color_for_meal, colorize_amount};
use crate::utils::date;
use crate::utils::formatting::{bold, fmt_amount};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, meal, now } = cmd {
        let meal = match meal {
            Some(m) => Some(Meal::from_input(m).ok_or_else(|| AppError::InvalidMeal(m.clone()))?),
            None => None,
        };

        let (from, to) = if *now {
            let t = date::today();
            (t, t)
        } else {
            resolve_period(period.as_deref())?
        };

        let pool = DbPool::open(&cfg.database)?;
        let log = FoodLog::load(SqliteStore::new(&pool.conn, &cfg.storage_key))?;

        let entries: Vec<&FoodEntry> = log
            .entries_between(from, to)
            .into_iter()
            .filter(|e| meal.is_none_or(|m| e.meal == m))
            .collect();

        if entries.is_empty() {
            println!("No entries between {} and {}.", from, to);
            return Ok(());
        }

        print!("{}", entries_table(&entries, true, cfg.separator()));

        let totals = MacroTotals::sum(entries.iter().copied());
        println!(
            "\n{} entries | {} kcal | 蛋白质 {}g | 碳水 {}g | 脂肪 {}g",
            entries.len(),
            bold(&fmt_amount(totals.calories)),
            fmt_amount(totals.protein),
            fmt_amount(totals.carbs),
            fmt_amount(totals.fat),
        );
    }
    Ok(())
}

fn resolve_period(period: Option<&str>) -> AppResult<(chrono::NaiveDate, chrono::NaiveDate)> {
    match period {
        Some(p) if p.eq_ignore_ascii_case("all") => Ok((chrono::NaiveDate::MIN, chrono::NaiveDate::MAX)),
        Some(p) => date::range_bounds(p),
        None => date::current_month_bounds(),
    }
}

/// Render entries as a table; `with_date` adds the date column.
pub fn entries_table(entries: &[&FoodEntry], with_date: bool, separator: char) -> String {
    let mut columns = vec![Column::left("ID")];
    if with_date {
        columns.push(Column::left("Date"));
    }
    columns.extend([
        Column::left("餐次"),
        Column::left("食物"),
        Column::right("kcal"),
        Column::right("蛋白质"),
        Column::right("碳水"),
        Column::right("脂肪"),
    ]);

    let mut table = Table::new(columns).with_separator(separator);

    for e in entries {
        let mut row = vec![e.id.clone()];
        if with_date {
            row.push(e.date_str());
        }
        row.extend([
            e.meal.label().to_string(),
            e.food.clone(),
            fmt_amount(e.calories),
            fmt_amount(e.protein),
            fmt_amount(e.carbs),
            fmt_amount(e.fat),
        ]);
        table.add_row(row);
    }

    colorize_rows(&table.render(), entries)
}

/// Colour meal labels and grey out zero amounts once widths are fixed.
fn colorize_rows(rendered: &str, entries: &[&FoodEntry]) -> String {
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        let line = match i.checked_sub(2).and_then(|idx| entries.get(idx)) {
            Some(e) => {
                let label = e.meal.label();
                let painted = format!("{}{}{}", color_for_meal(e.meal), label, RESET);
                let line = line.replacen(label, &painted, 1);
                grey_trailing_zeros(&line)
            }
            None => line.to_string(),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn grey_trailing_zeros(line: &str) -> String {
    // the last four cells are the numeric columns
    let mut parts: Vec<String> = line.split(' ').map(str::to_string).collect();
    let mut seen = 0;
    for p in parts.iter_mut().rev() {
        if p.is_empty() {
            continue;
        }
        if seen == 4 {
            break;
        }
        *p = colorize_amount(p);
        seen += 1;
    }
    parts.join(" ")
}
