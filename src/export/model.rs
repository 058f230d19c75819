use crate::models::entry::FoodEntry;
use serde::Serialize;

/// Flat row for exporting entries.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub date: String,
    pub meal: String,
    pub meal_label: String,
    pub food: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<&FoodEntry> for EntryExport {
    fn from(e: &FoodEntry) -> Self {
        Self {
            id: e.id.clone(),
            date: e.date_str(),
            meal: e.meal.code().to_string(),
            meal_label: e.meal.label().to_string(),
            food: e.food.clone(),
            calories: e.calories,
            protein: e.protein,
            carbs: e.carbs,
            fat: e.fat,
        }
    }
}
