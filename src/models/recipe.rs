use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "简单",
            Difficulty::Medium => "中等",
            Difficulty::Hard => "困难",
        }
    }
}

/// Static recipe record, compiled into the binary.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    /// Preparation time in minutes
    pub time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: &'static [&'static str],
    pub steps: &'static [&'static str],
}
