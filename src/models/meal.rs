use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    #[default]
    Breakfast, // 早餐
    Lunch,     // 午餐
    Dinner,    // 晚餐
    Snack,     // 加餐
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack];

    pub fn code(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Snack => "snack",
        }
    }

    /// Chinese label shown in tables and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "早餐",
            Meal::Lunch => "午餐",
            Meal::Dinner => "晚餐",
            Meal::Snack => "加餐",
        }
    }

    /// Helper: convert input from CLI (English code in any case, or Chinese label)
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        Meal::ALL
            .into_iter()
            .find(|m| m.code().eq_ignore_ascii_case(s) || m.label() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_labels() {
        assert_eq!(Meal::from_input("Lunch"), Some(Meal::Lunch));
        assert_eq!(Meal::from_input("加餐"), Some(Meal::Snack));
        assert_eq!(Meal::from_input("brunch"), None);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&Meal::Dinner).unwrap();
        assert_eq!(json, "\"dinner\"");
    }
}
