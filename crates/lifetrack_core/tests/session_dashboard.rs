use chrono::NaiveDate;
use lifetrack_core::{
    category_distribution, dashboard_summary, completion_rate, Session, TaskDraft,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_session_reads_all_zeroes() {
    let today = day(2025, 3, 8);
    let session = Session::new();
    let overview = dashboard_summary(&session, today);

    assert_eq!(overview.tasks_total, 0);
    assert_eq!(overview.task_progress_pct, 0.0);
    assert_eq!(overview.goals_total, 0);
    assert_eq!(overview.goal_progress_pct, 0.0);
    assert_eq!(overview.calories_today, 0);
    assert_eq!(overview.calories_remaining, 2200);
    assert_eq!(overview.best_streak, 0);
    assert_eq!(overview.unread_notifications, 0);
}

#[test]
fn seeded_session_matches_the_stock_numbers() {
    let today = day(2025, 3, 8);
    let session = Session::with_sample_data(today);

    assert_eq!(session.tasks.len(), 5);
    assert_eq!(session.bucket_list.len(), 4);
    assert_eq!(session.food_log.len(), 5);
    assert_eq!(session.habits.len(), 4);
    assert_eq!(session.notifications.len(), 5);

    let overview = dashboard_summary(&session, today);
    assert_eq!(overview.tasks_completed, 1);
    assert_eq!(overview.tasks_total, 5);
    assert_eq!(overview.goals_completed, 1);
    assert_eq!(overview.goals_total, 4);
    assert_eq!(overview.goal_progress_pct, 25.0);
    assert_eq!(overview.calories_today, 1700);
    assert_eq!(overview.calories_remaining, 500);
    assert!(overview.calorie_progress_pct < 100.0);
    assert_eq!(overview.best_streak, 7);
    assert_eq!(overview.unread_notifications, 2);
}

#[test]
fn seeded_time_buckets_are_populated() {
    let today = day(2025, 3, 8);
    let session = Session::with_sample_data(today);

    assert_eq!(session.tasks.due_today(today).len(), 2);
    let upcoming: Vec<&str> = session
        .tasks
        .upcoming(today)
        .into_iter()
        .map(|task| task.title.as_str())
        .collect();
    assert_eq!(
        upcoming,
        ["Grocery shopping", "Call mom", "Complete project proposal"]
    );
}

#[test]
fn seeded_daily_habits_hold_their_streak_rates() {
    let today = day(2025, 3, 8);
    let session = Session::with_sample_data(today);

    let meditation = session
        .habits
        .iter()
        .find(|habit| habit.name == "Morning Meditation")
        .unwrap();
    assert_eq!(meditation.streak, 7);
    assert_eq!(completion_rate(meditation, today), 100.0);
    assert!(meditation.is_completed_on(today));
}

#[test]
fn category_distribution_over_seeded_tasks() {
    let today = day(2025, 3, 8);
    let mut session = Session::with_sample_data(today);
    session.tasks.add(TaskDraft {
        category: "work".to_string(),
        ..TaskDraft::new("File expense report")
    });

    let shares = category_distribution(
        session.tasks.iter().map(|task| task.category.as_str()),
    );
    let work = shares.iter().find(|share| share.category == "work").unwrap();
    assert_eq!(work.count, 2);
    let total: usize = shares.iter().map(|share| share.count).sum();
    assert_eq!(total, 6);
    let pct_sum: f64 = shares.iter().map(|share| share.pct).sum();
    assert!((pct_sum - 100.0).abs() < 1e-9);
}

#[test]
fn dashboard_recomputes_after_mutations() {
    let today = day(2025, 3, 8);
    let mut session = Session::with_sample_data(today);

    let first_unread = session
        .notifications
        .iter()
        .find(|n| !n.read)
        .map(|n| n.id)
        .unwrap();
    session.notifications.mark_read(first_unread);

    let workout = session
        .tasks
        .iter()
        .find(|task| task.title == "Morning workout")
        .map(|task| task.id)
        .unwrap();
    session.tasks.toggle_completed(workout);

    let overview = dashboard_summary(&session, today);
    assert_eq!(overview.unread_notifications, 1);
    assert_eq!(overview.tasks_completed, 0);
}
