//! Single in-memory tracker session.
//!
//! # Responsibility
//! - Own the five entity collections and the user settings.
//!
//! # Invariants
//! - Exactly one session exists per process; every mutation runs to
//!   completion before the next one starts.
//! - State lives only in memory and resets with the process.

use chrono::NaiveDate;

use crate::model::settings::UserSettings;
use crate::seed;
use crate::store::{BucketListStore, FoodLog, HabitStore, NotificationFeed, TaskStore};

/// All state for one tracker session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub tasks: TaskStore,
    pub bucket_list: BucketListStore,
    pub food_log: FoodLog,
    pub habits: HabitStore,
    pub notifications: NotificationFeed,
    pub settings: UserSettings,
}

impl Session {
    /// Creates an empty session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session seeded with the stock sample records.
    ///
    /// Sample dates are expressed relative to `today` so the time-bucket
    /// views stay populated no matter when the session starts.
    pub fn with_sample_data(today: NaiveDate) -> Self {
        seed::sample_session(today)
    }
}
