//! In-memory entity stores.
//!
//! # Responsibility
//! - Own one ordered collection per entity and its mutation semantics.
//! - Keep every operation total: missing ids are no-ops, never errors.
//!
//! # Invariants
//! - `add` validates the mandatory text field (trimmed non-blank) and rejects
//!   the draft by returning `None`, leaving the collection unchanged.
//! - `update` is whole-record replacement keyed by id; the stored id wins.
//! - Insertion order is preserved and significant for display.

pub mod bucket;
pub mod food;
pub mod habits;
pub mod notifications;
pub mod tasks;

pub use bucket::BucketListStore;
pub use food::FoodLog;
pub use habits::HabitStore;
pub use notifications::NotificationFeed;
pub use tasks::TaskStore;
