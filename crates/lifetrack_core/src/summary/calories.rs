//! Calorie totals and daily summary math.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::{is_today, last_n_days};
use crate::model::food::{FoodEntry, MealType};

/// Day-level calorie rollup against a target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieSummary {
    /// Calories logged on the day.
    pub total: u32,
    /// Target minus total; negative once the target is exceeded.
    pub remaining: i64,
    /// Share of the target consumed, clamped to [0, 100].
    pub progress_pct: f64,
}

/// Sum of calories for entries logged on `day`.
pub fn daily_total(entries: &[FoodEntry], day: NaiveDate) -> u32 {
    entries
        .iter()
        .filter(|entry| is_today(entry.date, day))
        .map(|entry| entry.calories)
        .sum()
}

/// Sum of calories for entries logged on `day` in one meal slot.
pub fn total_by_meal(entries: &[FoodEntry], day: NaiveDate, meal: MealType) -> u32 {
    entries
        .iter()
        .filter(|entry| is_today(entry.date, day) && entry.meal == meal)
        .map(|entry| entry.calories)
        .sum()
}

/// Rolls one day up against `target`.
///
/// A zero target reads as fully consumed once anything is logged, keeping the
/// percentage total without dividing by zero.
pub fn daily_summary(entries: &[FoodEntry], day: NaiveDate, target: u32) -> CalorieSummary {
    let total = daily_total(entries, day);
    let progress_pct = if target == 0 {
        if total > 0 {
            100.0
        } else {
            0.0
        }
    } else {
        (f64::from(total) * 100.0 / f64::from(target)).min(100.0)
    };

    CalorieSummary {
        total,
        remaining: i64::from(target) - i64::from(total),
        progress_pct,
    }
}

/// One point of a per-day calorie series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCalories {
    pub day: NaiveDate,
    pub total: u32,
}

/// Per-day totals for the trailing `n`-day window ending at `today`.
pub fn daily_series(entries: &[FoodEntry], today: NaiveDate, n: u32) -> Vec<DayCalories> {
    last_n_days(today, n)
        .into_iter()
        .map(|day| DayCalories {
            day,
            total: daily_total(entries, day),
        })
        .collect()
}
