//! Core domain logic for LifeTrack.
//! This crate is the single source of truth for tracker invariants; rendering
//! layers consume its records and derivations and add nothing of their own.

pub mod dates;
pub mod logging;
pub mod model;
pub mod search;
mod seed;
pub mod session;
pub mod store;
pub mod summary;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::bucket::{BucketDraft, BucketListItem};
pub use model::food::{parse_calories, FoodDraft, FoodEntry, MealType};
pub use model::habit::{Frequency, Habit, HabitDraft};
pub use model::notification::{Notification, NotificationDraft};
pub use model::settings::{AlertSettings, Preferences, Profile, UserSettings};
pub use model::task::{Priority, Task, TaskDraft};
pub use model::{EntityKind, EntryId};
pub use search::{build_corpus, search, SearchQuery, SearchRecord};
pub use session::Session;
pub use store::{BucketListStore, FoodLog, HabitStore, NotificationFeed, TaskStore};
pub use summary::calories::{daily_summary, daily_total, total_by_meal, CalorieSummary};
pub use summary::categories::{category_distribution, CategoryShare};
pub use summary::dashboard::{dashboard_summary, DashboardSummary};
pub use summary::habits::{completion_grid, completion_rate};
pub use summary::tasks::{completion_counts, completion_pct};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
