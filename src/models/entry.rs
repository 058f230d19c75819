use super::meal::Meal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged food item.
///
/// The JSON shape is the persisted format of the `foodEntries` list:
/// `{"id","date":"YYYY-MM-DD","meal","food","calories","protein","carbs","fat"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: String,
    pub date: NaiveDate,
    pub meal: Meal,
    pub food: String,
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
}

impl FoodEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Raw user input for a new entry, as typed on the command line.
///
/// `food` and `calories` are mandatory; the other macros fall back to zero
/// when missing or unparseable.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub meal: Meal,
    pub food: String,
    pub calories: String,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
}

impl EntryDraft {
    pub fn new(food: impl Into<String>, calories: impl Into<String>) -> Self {
        Self {
            food: food.into(),
            calories: calories.into(),
            ..Self::default()
        }
    }

    pub fn meal(mut self, meal: Meal) -> Self {
        self.meal = meal;
        self
    }

    pub fn protein(mut self, v: impl Into<String>) -> Self {
        self.protein = Some(v.into());
        self
    }

    pub fn carbs(mut self, v: impl Into<String>) -> Self {
        self.carbs = Some(v.into());
        self
    }

    pub fn fat(mut self, v: impl Into<String>) -> Self {
        self.fat = Some(v.into());
        self
    }
}
