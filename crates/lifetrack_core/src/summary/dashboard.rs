//! Whole-session dashboard rollup.
//!
//! # Responsibility
//! - Reduce every store to the flat display-ready numbers the overview
//!   screen shows.

use chrono::NaiveDate;
use serde::Serialize;

use crate::session::Session;
use crate::summary::calories::daily_summary;
use crate::summary::tasks::{completion_counts, completion_pct};

/// Flat summary of the session for the overview cards.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DashboardSummary {
    pub tasks_completed: usize,
    pub tasks_total: usize,
    pub task_progress_pct: f64,
    pub goals_completed: usize,
    pub goals_total: usize,
    pub goal_progress_pct: f64,
    pub calories_today: u32,
    pub calories_remaining: i64,
    pub calorie_progress_pct: f64,
    /// Highest current streak across all habits.
    pub best_streak: u32,
    pub unread_notifications: usize,
}

/// Recomputes the dashboard numbers from the session's current state.
pub fn dashboard_summary(session: &Session, today: NaiveDate) -> DashboardSummary {
    let (tasks_completed, tasks_total) = completion_counts(session.tasks.all());

    let goals_total = session.bucket_list.len();
    let goals_completed = session.bucket_list.completed().len();
    let goal_progress_pct = if goals_total == 0 {
        0.0
    } else {
        goals_completed as f64 * 100.0 / goals_total as f64
    };

    let calories = daily_summary(
        session.food_log.all(),
        today,
        session.settings.preferences.calorie_target,
    );

    let best_streak = session
        .habits
        .iter()
        .map(|habit| habit.streak)
        .max()
        .unwrap_or(0);

    DashboardSummary {
        tasks_completed,
        tasks_total,
        task_progress_pct: completion_pct(session.tasks.all()),
        goals_completed,
        goals_total,
        goal_progress_pct,
        calories_today: calories.total,
        calories_remaining: calories.remaining,
        calorie_progress_pct: calories.progress_pct,
        best_streak,
        unread_notifications: session.notifications.unread_count(),
    }
}
