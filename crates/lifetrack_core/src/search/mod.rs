//! Cross-entity search.
//!
//! # Responsibility
//! - Flatten the session's collections into a uniform projection and match
//!   queries against it.
//!
//! # Invariants
//! - A blank query returns no results by design; search is inert until the
//!   user types.
//! - Matching is case-insensitive substring over title and description, with
//!   no tokenization and no ranking; hit order is corpus order.

pub mod scan;

pub use scan::{build_corpus, search, SearchQuery, SearchRecord};
