//! Food log collection.

use chrono::NaiveDate;
use log::debug;

use crate::dates::is_today;
use crate::model::food::{FoodDraft, FoodEntry};
use crate::model::EntryId;

/// Ordered in-memory food log.
#[derive(Debug, Clone, Default)]
pub struct FoodLog {
    items: Vec<FoodEntry>,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a log from pre-existing records, preserving their order.
    pub fn from_records(items: Vec<FoodEntry>) -> Self {
        Self { items }
    }

    /// Appends an entry built from `draft`.
    ///
    /// Returns `None` and leaves the collection unchanged when the name is
    /// blank after trim.
    pub fn add(&mut self, draft: FoodDraft) -> Option<&FoodEntry> {
        if draft.name.trim().is_empty() {
            return None;
        }
        let entry = FoodEntry::new(draft);
        debug!(
            "event=food_entry_added module=store id={} calories={}",
            entry.id, entry.calories
        );
        self.items.push(entry);
        self.items.last()
    }

    /// Replaces the record with matching id wholesale.
    ///
    /// The stored id is kept regardless of the id carried by `record`.
    pub fn update(&mut self, id: EntryId, mut record: FoodEntry) -> bool {
        match self.items.iter_mut().find(|entry| entry.id == id) {
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
        self.items.retain(|entry| entry.id != id);
        self.items.len() != before
    }

    pub fn get(&self, id: EntryId) -> Option<&FoodEntry> {
        self.items.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodEntry> {
        self.items.iter()
    }

    /// Every entry, in insertion order.
    pub fn all(&self) -> &[FoodEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries logged on `day`, in insertion order.
    pub fn entries_on(&self, day: NaiveDate) -> Vec<&FoodEntry> {
        self.items
            .iter()
            .filter(|entry| is_today(entry.date, day))
            .collect()
    }
}
