//! Calendar-day bucketing utilities.
//!
//! # Responsibility
//! - Classify record dates against a reference day (today/upcoming/last-N).
//!
//! # Invariants
//! - Every comparison is calendar-day granular; time of day never matters.
//! - The reference day is always an explicit argument so callers (and tests)
//!   control "now" instead of the wall clock.

use chrono::{Days, NaiveDate};

/// Returns whether `day` is the reference day itself.
pub fn is_today(day: NaiveDate, today: NaiveDate) -> bool {
    day == today
}

/// Returns whether `day` lies strictly after the reference day.
///
/// The reference day itself is never upcoming.
pub fn is_upcoming(day: NaiveDate, today: NaiveDate) -> bool {
    day > today
}

/// Returns whether `day` falls inside the trailing `n`-day window.
///
/// The window is inclusive: `day >= today - n days`. This single definition
/// backs every lookback (habit rates, recent-activity windows) so results
/// stay consistent across features.
pub fn in_last_n_days(day: NaiveDate, today: NaiveDate, n: u32) -> bool {
    match today.checked_sub_days(Days::new(u64::from(n))) {
        Some(window_start) => day >= window_start,
        // Window extends past the representable range, so everything is in.
        None => true,
    }
}

/// Returns the ascending run of `n` days ending at `today`.
///
/// Used for completion grids and per-day chart series.
pub fn last_n_days(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..u64::from(n))
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}
