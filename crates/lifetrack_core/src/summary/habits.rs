//! Habit completion rate and recent-completion grid.

use chrono::NaiveDate;

use crate::dates::{in_last_n_days, last_n_days};
use crate::model::habit::{Frequency, Habit};

/// Percentage of expected completions actually recorded in the frequency's
/// lookback window.
///
/// Daily habits look back 7 days against 7 expected completions, weekly 28
/// days against 4, monthly 90 days against 3. The value is deliberately not
/// capped: a habit completed more often than its cadence exceeds 100.
pub fn completion_rate(habit: &Habit, today: NaiveDate) -> f64 {
    let (window, expected) = match habit.frequency {
        Frequency::Daily => (7, 7.0),
        Frequency::Weekly => (28, 4.0),
        Frequency::Monthly => (90, 3.0),
    };

    let completed = habit
        .completed_dates
        .iter()
        .filter(|day| in_last_n_days(**day, today, window))
        .count();

    completed as f64 / expected * 100.0
}

/// `(day, completed)` pairs for the trailing `n` days ending at `today`.
///
/// Backs the per-day completion grid shown beside each habit.
pub fn completion_grid(habit: &Habit, today: NaiveDate, n: u32) -> Vec<(NaiveDate, bool)> {
    last_n_days(today, n)
        .into_iter()
        .map(|day| (day, habit.is_completed_on(day)))
        .collect()
}
