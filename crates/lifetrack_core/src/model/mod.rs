//! Domain records for the tracker session.
//!
//! # Responsibility
//! - Define the canonical data structures used by stores and derivations.
//! - Keep record shapes free of any rendering concern.
//!
//! # Invariants
//! - Every record is identified by a stable `EntryId`.
//! - Collections never reference each other; cross-entity display strings are
//!   denormalized copies.

pub mod bucket;
pub mod food;
pub mod habit;
pub mod notification;
pub mod settings;
pub mod task;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every domain record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Collection tag shared by notifications and search projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Task,
    BucketList,
    Calorie,
    Habit,
    System,
}

impl EntityKind {
    /// Stable wire/display name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::BucketList => "bucket-list",
            Self::Calorie => "calorie",
            Self::Habit => "habit",
            Self::System => "system",
        }
    }
}
