//! Weekly nutrition analysis against fixed daily targets.

use crate::errors::{AppError, AppResult};
use crate::models::entry::FoodEntry;
use crate::models::macros::MacroTotals;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Averages are always divided by this many days, whatever the number of
/// days that actually have entries.
pub const WINDOW_DAYS: i64 = 7;

/// Recommended daily intake for an average adult.
pub const RECOMMENDED: MacroTotals = MacroTotals {
    calories: 2000.0,
    protein: 60.0,
    carbs: 275.0,
    fat: 60.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    High,
    Low,
    Normal,
}

impl Trend {
    /// High above 110% of target, low below 90%, both bounds inclusive for normal.
    pub fn classify(value: f64, target: f64) -> Self {
        // scaled by ten so that exact boundaries compare exactly
        if value * 10.0 > target * 11.0 {
            Trend::High
        } else if value * 10.0 < target * 9.0 {
            Trend::Low
        } else {
            Trend::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::High => "偏高",
            Trend::Low => "偏低",
            Trend::Normal => "正常",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Calories => "热量",
            Nutrient::Protein => "蛋白质",
            Nutrient::Carbs => "碳水化合物",
            Nutrient::Fat => "脂肪",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }

    pub fn pick(&self, m: &MacroTotals) -> f64 {
        match self {
            Nutrient::Calories => m.calories,
            Nutrient::Protein => m.protein,
            Nutrient::Carbs => m.carbs,
            Nutrient::Fat => m.fat,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NutrientStatus {
    pub nutrient: Nutrient,
    pub average: f64,
    pub target: f64,
    /// Share of target, capped at 100 (progress bar fill)
    pub percent: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    LowCalories,
    LowProtein,
    HighCarbs,
    Balanced,
}

impl Advice {
    pub fn title(&self) -> &'static str {
        match self {
            Advice::LowCalories => "热量摄入不足",
            Advice::LowProtein => "蛋白质摄入不足",
            Advice::HighCarbs => "碳水化合物偏高",
            Advice::Balanced => "营养均衡",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Advice::LowCalories => {
                "您的平均每日热量摄入低于推荐值，建议适当增加主食和健康脂肪的摄入。"
            }
            Advice::LowProtein => "建议增加瘦肉、鱼类、豆制品等优质蛋白来源。",
            Advice::HighCarbs => "建议减少精制碳水的摄入，选择全谷物和粗粮。",
            Advice::Balanced => "您的饮食营养搭配良好，请继续保持！",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NutritionReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub entry_count: usize,
    pub averages: MacroTotals,
    pub items: Vec<NutrientStatus>,
    pub advice: Vec<Advice>,
}

/// Daily averages over the seven calendar days ending on `now`,
/// always divided by 7.
pub fn weekly_averages(entries: &[FoodEntry], now: NaiveDate) -> AppResult<MacroTotals> {
    let from = window_start(now)?;
    Ok(MacroTotals::sum(in_window(entries, from, now)).divided_by(WINDOW_DAYS as f64))
}

pub fn percent_of_target(value: f64, target: f64) -> f64 {
    (value / target * 100.0).min(100.0)
}

/// Independent advisory checks; several may apply at once.
pub fn advise(avg: &MacroTotals) -> Vec<Advice> {
    let t = RECOMMENDED;
    let mut out = Vec::new();

    if avg.calories * 10.0 < t.calories * 9.0 {
        out.push(Advice::LowCalories);
    }
    if avg.protein * 10.0 < t.protein * 9.0 {
        out.push(Advice::LowProtein);
    }
    if avg.carbs * 10.0 > t.carbs * 11.0 {
        out.push(Advice::HighCarbs);
    }
    if within_tenth(avg.calories, t.calories) && within_tenth(avg.protein, t.protein) {
        out.push(Advice::Balanced);
    }

    out
}

pub fn analyze(entries: &[FoodEntry], now: NaiveDate) -> AppResult<NutritionReport> {
    let from = window_start(now)?;
    let entry_count = in_window(entries, from, now).count();
    let averages = weekly_averages(entries, now)?;

    let items = Nutrient::ALL
        .into_iter()
        .map(|n| {
            let average = n.pick(&averages);
            let target = n.pick(&RECOMMENDED);
            NutrientStatus {
                nutrient: n,
                average,
                target,
                percent: percent_of_target(average, target),
                trend: Trend::classify(average, target),
            }
        })
        .collect();

    Ok(NutritionReport {
        from,
        to: now,
        entry_count,
        averages,
        items,
        advice: advise(&averages),
    })
}

/// First day of the window: `now` counts as the seventh day.
fn window_start(now: NaiveDate) -> AppResult<NaiveDate> {
    now.checked_sub_signed(Duration::days(WINDOW_DAYS - 1))
        .ok_or_else(|| AppError::InvalidDate(now.to_string()))
}

fn in_window(
    entries: &[FoodEntry],
    from: NaiveDate,
    to: NaiveDate,
) -> impl Iterator<Item = &FoodEntry> {
    entries.iter().filter(move |e| e.date >= from && e.date <= to)
}

/// |value - target| strictly under 10% of target
fn within_tenth(value: f64, target: f64) -> bool {
    (value - target).abs() * 10.0 < target
}
