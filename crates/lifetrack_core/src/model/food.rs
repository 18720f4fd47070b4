//! Food log entry record and calorie input parsing.
//!
//! # Invariants
//! - `calories` is a whole non-negative number; free-text input goes through
//!   [`parse_calories`] before a draft is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::EntryId;

/// Meal slot a food entry is logged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Capitalized display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

/// One logged food item on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: EntryId,
    pub name: String,
    pub calories: u32,
    pub date: NaiveDate,
    pub meal: MealType,
}

impl FoodEntry {
    /// Materializes a draft into a record with a fresh id.
    pub fn new(draft: FoodDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            calories: draft.calories,
            date: draft.date,
            meal: draft.meal,
        }
    }
}

/// User input for logging a food entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub calories: u32,
    pub date: NaiveDate,
    pub meal: MealType,
}

impl FoodDraft {
    pub fn new(name: impl Into<String>, calories: u32, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            calories,
            date,
            meal: MealType::Breakfast,
        }
    }
}

/// Parses user-typed calorie input into a whole number.
///
/// Returns `None` for anything that is not a plain unsigned integer; callers
/// are expected to re-prompt rather than coerce.
pub fn parse_calories(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_calories;

    #[test]
    fn parse_calories_accepts_whole_numbers() {
        assert_eq!(parse_calories("350"), Some(350));
        assert_eq!(parse_calories("  0 "), Some(0));
    }

    #[test]
    fn parse_calories_rejects_non_numeric_input() {
        assert_eq!(parse_calories(""), None);
        assert_eq!(parse_calories("abc"), None);
        assert_eq!(parse_calories("12.5"), None);
        assert_eq!(parse_calories("-40"), None);
    }
}
