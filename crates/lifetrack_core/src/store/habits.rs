//! Habit collection with the paired streak/date toggle.
//!
//! # Invariants
//! - `toggle_completion` is the only mutation touching `streak` and
//!   `completed_dates`, and always changes both together.

use chrono::NaiveDate;
use log::debug;

use crate::model::habit::{Habit, HabitDraft};
use crate::model::EntryId;

/// Ordered in-memory habit collection.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    items: Vec<Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from pre-existing records, preserving their order.
    pub fn from_records(items: Vec<Habit>) -> Self {
        Self { items }
    }

    /// Appends a habit built from `draft`.
    ///
    /// Returns `None` and leaves the collection unchanged when the name is
    /// blank after trim.
    pub fn add(&mut self, draft: HabitDraft) -> Option<&Habit> {
        if draft.name.trim().is_empty() {
            return None;
        }
        let habit = Habit::new(draft);
        debug!("event=habit_added module=store id={}", habit.id);
        self.items.push(habit);
        self.items.last()
    }

    /// Replaces the record with matching id wholesale.
    ///
    /// The stored id is kept regardless of the id carried by `record`.
    pub fn update(&mut self, id: EntryId, mut record: Habit) -> bool {
        match self.items.iter_mut().find(|habit| habit.id == id) {
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
        self.items.retain(|habit| habit.id != id);
        self.items.len() != before
    }

    /// Runs the paired completion/streak toggle for the reference day.
    ///
    /// Returns the resulting completed-today state, or `None` as a no-op when
    /// the id is unknown.
    pub fn toggle_completion(&mut self, id: EntryId, today: NaiveDate) -> Option<bool> {
        let habit = self.items.iter_mut().find(|habit| habit.id == id)?;
        let now_completed = habit.toggle_completion(today);
        debug!(
            "event=habit_toggled module=store id={id} completed_today={now_completed} streak={}",
            habit.streak
        );
        Some(now_completed)
    }

    pub fn get(&self, id: EntryId) -> Option<&Habit> {
        self.items.iter().find(|habit| habit.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.items.iter()
    }

    /// Every habit, in insertion order.
    pub fn all(&self) -> &[Habit] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
