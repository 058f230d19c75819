use serde::Serialize;
use std::ops::Add;

use super::entry::FoodEntry;

/// Sum (or average) of the four macro-nutrients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroTotals {
    pub fn of(entry: &FoodEntry) -> Self {
        Self {
            calories: entry.calories,
            protein: entry.protein,
            carbs: entry.carbs,
            fat: entry.fat,
        }
    }

    pub fn sum<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a FoodEntry>,
    {
        entries
            .into_iter()
            .fold(Self::default(), |acc, e| acc + Self::of(e))
    }

    pub fn divided_by(self, divisor: f64) -> Self {
        Self {
            calories: self.calories / divisor,
            protein: self.protein / divisor,
            carbs: self.carbs / divisor,
            fat: self.fat / divisor,
        }
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}
