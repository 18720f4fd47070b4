//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifetrack_core` linkage.
//! - Walk the seeded session through the main derivations and print
//!   deterministic summary lines.

use chrono::Local;
use lifetrack_core::{
    build_corpus, core_version, dashboard_summary, default_log_level, init_logging, search,
    SearchQuery, Session,
};

fn main() {
    let log_dir = std::env::temp_dir().join("lifetrack-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: temp dir is not valid UTF-8"),
    }

    let today = Local::now().date_naive();
    let session = Session::with_sample_data(today);
    let overview = dashboard_summary(&session, today);

    println!("lifetrack_core version={}", core_version());
    println!(
        "tasks completed={}/{} ({:.0}%)",
        overview.tasks_completed, overview.tasks_total, overview.task_progress_pct
    );
    println!(
        "bucket list completed={}/{} ({:.0}%)",
        overview.goals_completed, overview.goals_total, overview.goal_progress_pct
    );
    println!(
        "calories today={} remaining={} ({:.0}%)",
        overview.calories_today, overview.calories_remaining, overview.calorie_progress_pct
    );
    println!("best habit streak={}", overview.best_streak);
    println!("unread notifications={}", overview.unread_notifications);
    println!(
        "tasks due today={} upcoming={}",
        session.tasks.due_today(today).len(),
        session.tasks.upcoming(today).len()
    );

    let corpus = build_corpus(&session, today);
    let hits = search(&corpus, &SearchQuery::new("guitar"));
    match hits.first() {
        Some(hit) => println!("search \"guitar\" hits={} first={}", hits.len(), hit.title),
        None => println!("search \"guitar\" hits=0"),
    }
}
