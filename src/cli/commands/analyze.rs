use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyzer::{self, NutritionReport};
use crate::core::foodlog::FoodLog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, color_for_trend};
use crate::utils::date;
use crate::utils::formatting::{bold, pad_right, progress_bar, wrap_text};

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze { date: end } = cmd {
        let end = match end {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let pool = DbPool::open(&cfg.database)?;
        let log = FoodLog::load(SqliteStore::new(&pool.conn, &cfg.storage_key))?;

        let report = analyzer::analyze(log.entries(), end)?;
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &NutritionReport) {
    header("每周营养分析");
    println!(
        "{GREY}过去7天的平均每日营养摄入 ({} ~ {}, {} 条记录){RESET}\n",
        report.from, report.to, report.entry_count
    );

    for item in &report.items {
        let color = color_for_trend(item.trend);
        println!(
            "{} {}{}{}  {:.1} / {} {}",
            pad_right(item.nutrient.label(), 10),
            color,
            item.trend.label(),
            RESET,
            item.average,
            item.target,
            item.nutrient.unit(),
        );
        println!("{}", progress_bar(item.percent, BAR_WIDTH));
    }

    println!();
    header("营养建议");
    if report.advice.is_empty() {
        println!("{GREY}暂无建议{RESET}");
    }
    for advice in &report.advice {
        println!("• {}", bold(&format!("{}：", advice.title())));
        println!("{}", wrap_text(advice.text(), 60, "  "));
    }

    println!();
    header("数据说明");
    println!(
        "{}",
        wrap_text(
            "以上数据基于您过去7天的饮食记录计算得出。推荐值为成年人平均每日营养需求参考值，实际需求因个人身高、体重、活动量等因素而异。如需更精准的营养指导，建议咨询专业营养师。",
            60,
            ""
        )
    );
}
