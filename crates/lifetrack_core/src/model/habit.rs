//! Habit record with streak/completion lifecycle.
//!
//! # Responsibility
//! - Define the habit record and its completion-toggle transaction.
//!
//! # Invariants
//! - `streak` is only mutated in lockstep with toggling today's completion;
//!   it is a counter, not a value recomputed from `completed_dates`.
//! - `streak` never goes below zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::model::EntryId;

/// Expected cadence of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    /// Capitalized display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

/// A recurring activity tracked by completion days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub frequency: Frequency,
    pub category: String,
    pub streak: u32,
    pub completed_dates: BTreeSet<NaiveDate>,
}

impl Habit {
    /// Materializes a draft into a record with a fresh id and empty history.
    pub fn new(draft: HabitDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            frequency: draft.frequency,
            category: draft.category,
            streak: 0,
            completed_dates: BTreeSet::new(),
        }
    }

    /// Returns whether the habit has a completion recorded on `day`.
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Toggles today's completion as a paired transaction.
    ///
    /// Already completed today: removes the date and decrements the streak,
    /// floored at zero. Not completed: inserts the date and increments the
    /// streak. Returns the resulting completed-today state.
    pub fn toggle_completion(&mut self, today: NaiveDate) -> bool {
        if self.completed_dates.remove(&today) {
            self.streak = self.streak.saturating_sub(1);
            false
        } else {
            self.completed_dates.insert(today);
            self.streak += 1;
            true
        }
    }
}

/// User input for creating a habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitDraft {
    pub name: String,
    pub description: String,
    pub frequency: Frequency,
    pub category: String,
}

impl HabitDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for HabitDraft {
    /// Mirrors the entry form defaults: daily cadence, "wellness" category.
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            frequency: Frequency::Daily,
            category: "wellness".to_string(),
        }
    }
}
