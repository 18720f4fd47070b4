//! Task collection with time-bucket views.
//!
//! # Responsibility
//! - Provide CRUD plus the today/upcoming/completed/all projections.
//!
//! # Invariants
//! - Tasks without a due date appear only in `all`, never in the date
//!   buckets.
//! - `upcoming` is sorted ascending by due date; other views keep insertion
//!   order.

use chrono::NaiveDate;
use log::debug;

use crate::dates::{is_today, is_upcoming};
use crate::model::task::{Task, TaskDraft};
use crate::model::EntryId;

/// Ordered in-memory task collection.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    items: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from pre-existing records, preserving their order.
    pub fn from_records(items: Vec<Task>) -> Self {
        Self { items }
    }

    /// Appends a task built from `draft`.
    ///
    /// Returns `None` and leaves the collection unchanged when the title is
    /// blank after trim.
    pub fn add(&mut self, draft: TaskDraft) -> Option<&Task> {
        if draft.title.trim().is_empty() {
            return None;
        }
        let task = Task::new(draft);
        debug!("event=task_added module=store id={}", task.id);
        self.items.push(task);
        self.items.last()
    }

    /// Replaces the record with matching id wholesale.
    ///
    /// The stored id is kept regardless of the id carried by `record`.
    /// Returns `false` as a no-op when the id is unknown.
    pub fn update(&mut self, id: EntryId, mut record: Task) -> bool {
        match self.items.iter_mut().find(|task| task.id == id) {
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
        self.items.retain(|task| task.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!("event=task_removed module=store id={id}");
        }
        removed
    }

    /// Flips the completion flag of the record with matching id.
    pub fn toggle_completed(&mut self, id: EntryId) -> bool {
        match self.items.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.toggle_completed();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&Task> {
        self.items.iter().find(|task| task.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.items.iter()
    }

    /// Every task, in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Tasks whose due date is the reference day.
    pub fn due_today(&self, today: NaiveDate) -> Vec<&Task> {
        self.items
            .iter()
            .filter(|task| matches!(task.due_date, Some(due) if is_today(due, today)))
            .collect()
    }

    /// Tasks due strictly after the reference day, soonest first.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .items
            .iter()
            .filter(|task| matches!(task.due_date, Some(due) if is_upcoming(due, today)))
            .collect();
        tasks.sort_by_key(|task| task.due_date);
        tasks
    }

    /// Completed tasks in insertion order.
    pub fn completed(&self) -> Vec<&Task> {
        self.items.iter().filter(|task| task.completed).collect()
    }
}
