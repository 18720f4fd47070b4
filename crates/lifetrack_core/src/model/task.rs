//! Task record and draft input.
//!
//! # Invariants
//! - `title` must be non-blank after trim when created through a store.
//! - `completed` starts `false`; the due date is optional.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::EntryId;

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Capitalized display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    pub title: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub category: String,
}

impl Task {
    /// Materializes a draft into a record with a fresh id.
    ///
    /// Validation of the title happens at the store boundary, not here.
    pub fn new(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            completed: false,
            due_date: draft.due_date,
            priority: draft.priority,
            category: draft.category,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// User input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub category: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for TaskDraft {
    /// Mirrors the entry form defaults: medium priority, "personal" category.
    fn default() -> Self {
        Self {
            title: String::new(),
            due_date: None,
            priority: Priority::Medium,
            category: "personal".to_string(),
        }
    }
}
