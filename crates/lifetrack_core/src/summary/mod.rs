//! Read-side derivations over the entity stores.
//!
//! # Responsibility
//! - Compute totals, rates, distributions and per-day series from plain
//!   record slices.
//!
//! # Invariants
//! - Every function is pure and recomputes on each call; nothing is cached.
//! - The reference day is always an explicit argument.

pub mod calories;
pub mod categories;
pub mod dashboard;
pub mod habits;
pub mod tasks;
