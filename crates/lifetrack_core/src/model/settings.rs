//! User settings and preferences.
//!
//! # Responsibility
//! - Hold profile, alert toggles and tracker preferences for the session.
//!
//! # Invariants
//! - `Default` carries the stock values the rest of the core assumes
//!   (calorie target 2200, weekly task goal 25).

use serde::{Deserialize, Serialize};

/// All user-tunable state for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserSettings {
    pub profile: Profile,
    pub alerts: AlertSettings,
    pub preferences: Preferences,
}

/// Display identity of the session owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            bio: "I'm a software engineer passionate about productivity and health."
                .to_string(),
        }
    }
}

/// Per-channel and per-feature alert toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSettings {
    pub email: bool,
    pub push: bool,
    pub task_reminders: bool,
    pub habit_reminders: bool,
    pub weekly_report: bool,
    pub marketing_emails: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            task_reminders: true,
            habit_reminders: true,
            weekly_report: true,
            marketing_emails: false,
        }
    }
}

/// Tracker-wide preferences consumed by the derivation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: String,
    pub calorie_target: u32,
    pub weekly_task_goal: u32,
    pub start_of_week: String,
    pub time_format: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            calorie_target: 2200,
            weekly_task_goal: 25,
            start_of_week: "monday".to_string(),
            time_format: "12h".to_string(),
        }
    }
}
