//! Bucket-list goal record and draft input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::EntryId;

/// A long-term goal with an optional target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketListItem {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub target_date: Option<NaiveDate>,
    pub completed: bool,
    pub category: String,
}

impl BucketListItem {
    /// Materializes a draft into a record with a fresh id.
    pub fn new(draft: BucketDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            target_date: draft.target_date,
            completed: false,
            category: draft.category,
        }
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// User input for creating a bucket-list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDraft {
    pub title: String,
    pub description: String,
    pub target_date: Option<NaiveDate>,
    pub category: String,
}

impl BucketDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for BucketDraft {
    /// Mirrors the entry form defaults: "travel" category.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            target_date: None,
            category: "travel".to_string(),
        }
    }
}
