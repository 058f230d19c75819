/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::core::analyzer::Trend;
use crate::models::meal::Meal;

/// high → red, low → yellow, normal → green
pub fn color_for_trend(trend: Trend) -> &'static str {
    match trend {
        Trend::High => RED,
        Trend::Low => YELLOW,
        Trend::Normal => GREEN,
    }
}

pub fn color_for_meal(meal: Meal) -> &'static str {
    match meal {
        Meal::Breakfast => YELLOW,
        Meal::Lunch => GREEN,
        Meal::Dinner => BLUE,
        Meal::Snack => CYAN,
    }
}

/// Greys out zero amounts ("0", "0.0").
pub fn colorize_amount(value: &str) -> String {
    if value.trim().parse::<f64>().map(|v| v == 0.0).unwrap_or(false) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
