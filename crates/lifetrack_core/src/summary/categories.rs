//! Count-by-category distribution.

use serde::Serialize;

/// One category's share of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    /// Share of the total count, 0 to 100.
    pub pct: f64,
}

/// Counts categories and expresses each as a percentage of the total.
///
/// Output order follows each category's first appearance, so display order is
/// stable against re-renders. Works over any entity that carries a free-form
/// category string.
pub fn category_distribution<'a, I>(categories: I) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut total = 0usize;

    for category in categories {
        total += 1;
        match counts.iter_mut().find(|(name, _)| *name == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category, 1)),
        }
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category: category.to_string(),
            count,
            pct: count as f64 * 100.0 / total as f64,
        })
        .collect()
}
