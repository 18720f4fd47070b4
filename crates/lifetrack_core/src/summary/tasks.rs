//! Task completion counts and per-day series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::last_n_days;
use crate::model::task::Task;

/// `(completed, total)` over the whole collection.
pub fn completion_counts(tasks: &[Task]) -> (usize, usize) {
    let completed = tasks.iter().filter(|task| task.completed).count();
    (completed, tasks.len())
}

/// Completed share of the whole collection, 0 to 100. Empty input reads 0.
pub fn completion_pct(tasks: &[Task]) -> f64 {
    let (completed, total) = completion_counts(tasks);
    if total == 0 {
        0.0
    } else {
        completed as f64 * 100.0 / total as f64
    }
}

/// One point of a per-day task series, bucketed by due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayTaskCounts {
    pub day: NaiveDate,
    pub completed: usize,
    pub total: usize,
}

/// Due-date-bucketed completed/total pairs for the trailing `n` days.
///
/// Tasks without a due date contribute to no bucket.
pub fn completed_by_day(tasks: &[Task], today: NaiveDate, n: u32) -> Vec<DayTaskCounts> {
    last_n_days(today, n)
        .into_iter()
        .map(|day| {
            let due_that_day = tasks
                .iter()
                .filter(|task| task.due_date == Some(day))
                .collect::<Vec<_>>();
            DayTaskCounts {
                day,
                completed: due_that_day.iter().filter(|task| task.completed).count(),
                total: due_that_day.len(),
            }
        })
        .collect()
}
