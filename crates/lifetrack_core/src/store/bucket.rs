//! Bucket-list collection.

use log::debug;

use crate::model::bucket::{BucketDraft, BucketListItem};
use crate::model::EntryId;

/// Ordered in-memory bucket-list collection.
#[derive(Debug, Clone, Default)]
pub struct BucketListStore {
    items: Vec<BucketListItem>,
}

impl BucketListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from pre-existing records, preserving their order.
    pub fn from_records(items: Vec<BucketListItem>) -> Self {
        Self { items }
    }

    /// Appends an item built from `draft`.
    ///
    /// Returns `None` and leaves the collection unchanged when the title is
    /// blank after trim.
    pub fn add(&mut self, draft: BucketDraft) -> Option<&BucketListItem> {
        if draft.title.trim().is_empty() {
            return None;
        }
        let item = BucketListItem::new(draft);
        debug!("event=bucket_item_added module=store id={}", item.id);
        self.items.push(item);
        self.items.last()
    }

    /// Replaces the record with matching id wholesale (dialog-edit flow).
    ///
    /// The stored id is kept regardless of the id carried by `record`.
    pub fn update(&mut self, id: EntryId, mut record: BucketListItem) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
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
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Flips the completion flag of the record with matching id.
    pub fn toggle_completed(&mut self, id: EntryId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.toggle_completed();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&BucketListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BucketListItem> {
        self.items.iter()
    }

    /// Every item, in insertion order.
    pub fn all(&self) -> &[BucketListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Completed items in insertion order.
    pub fn completed(&self) -> Vec<&BucketListItem> {
        self.items.iter().filter(|item| item.completed).collect()
    }
}
