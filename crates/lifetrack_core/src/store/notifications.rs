//! Notification feed.

use log::debug;

use crate::model::notification::{Notification, NotificationDraft};
use crate::model::EntryId;

/// Ordered in-memory notification feed.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a feed from pre-existing records, preserving their order.
    pub fn from_records(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Appends an unread notification built from `draft`.
    ///
    /// Returns `None` and leaves the feed unchanged when the title is blank
    /// after trim.
    pub fn add(&mut self, draft: NotificationDraft) -> Option<&Notification> {
        if draft.title.trim().is_empty() {
            return None;
        }
        let notification = Notification::new(draft);
        debug!(
            "event=notification_added module=store id={} kind={}",
            notification.id,
            notification.kind.as_str()
        );
        self.items.push(notification);
        self.items.last()
    }

    /// Replaces the record with matching id wholesale.
    ///
    /// The stored id is kept regardless of the id carried by `record`.
    pub fn update(&mut self, id: EntryId, mut record: Notification) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(slot) => {
                record.id = id;
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Removes the record with matching id. No-op when unknown.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.items.len();
        self.items.retain(|notification| notification.id != id);
        self.items.len() != before
    }

    /// Marks the record with matching id as read. No-op when unknown.
    pub fn mark_read(&mut self, id: EntryId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.mark_read();
                true
            }
            None => false,
        }
    }

    /// Marks every notification as read.
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.mark_read();
        }
    }

    /// Number of unread notifications.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn get(&self, id: EntryId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Every notification, in insertion order.
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
