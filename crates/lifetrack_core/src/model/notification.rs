//! Notification record.
//!
//! The `time` field is a pre-rendered display string ("2 hours ago"); the
//! feed never derives it from a timestamp.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{EntityKind, EntryId};

/// One feed entry, read or unread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub time: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: EntityKind,
}

impl Notification {
    /// Materializes a draft into an unread record with a fresh id.
    pub fn new(draft: NotificationDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            time: draft.time,
            read: false,
            kind: draft.kind,
        }
    }

    /// Marks this notification as read.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

/// Input for pushing a notification onto the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub description: String,
    pub time: String,
    pub kind: EntityKind,
}

impl NotificationDraft {
    pub fn new(title: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            time: String::new(),
            kind,
        }
    }
}
