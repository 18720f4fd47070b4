//! Linear substring scan over the flattened corpus.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::is_today;
use crate::model::{EntityKind, EntryId};
use crate::session::Session;

/// Uniform projection of one searchable record.
///
/// Descriptions and dates are denormalized display copies, never references
/// into the source collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub date: Option<String>,
}

/// Search options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// User query text. Empty text matches nothing.
    pub text: String,
    /// Optional collection filter, applied after the text match.
    pub kind: Option<EntityKind>,
    /// Optional cap on the number of hits.
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Creates a query with no kind filter and no limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
            limit: None,
        }
    }
}

/// Flattens the session's collections into the search corpus.
///
/// Corpus order is collection order (tasks, bucket list, food, habits), each
/// in insertion order, and determines hit order.
pub fn build_corpus(session: &Session, today: NaiveDate) -> Vec<SearchRecord> {
    let mut corpus = Vec::new();

    for task in session.tasks.iter() {
        corpus.push(SearchRecord {
            id: task.id,
            title: task.title.clone(),
            description: format!("{} priority, {}", task.priority.label(), task.category),
            kind: EntityKind::Task,
            date: task.due_date.map(|due| display_day(due, today)),
        });
    }

    for item in session.bucket_list.iter() {
        corpus.push(SearchRecord {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            kind: EntityKind::BucketList,
            date: item.target_date.map(|target| display_day(target, today)),
        });
    }

    for entry in session.food_log.iter() {
        corpus.push(SearchRecord {
            id: entry.id,
            title: entry.name.clone(),
            description: format!("{} calories - {}", entry.calories, entry.meal.label()),
            kind: EntityKind::Calorie,
            date: Some(display_day(entry.date, today)),
        });
    }

    for habit in session.habits.iter() {
        corpus.push(SearchRecord {
            id: habit.id,
            title: habit.name.clone(),
            description: format!("{}-day streak", habit.streak),
            kind: EntityKind::Habit,
            date: Some(habit.frequency.label().to_string()),
        });
    }

    corpus
}

/// Matches `query` against the corpus.
///
/// Case-insensitive substring over title or description; hits keep corpus
/// order. An empty query text yields no hits regardless of corpus contents.
pub fn search(corpus: &[SearchRecord], query: &SearchQuery) -> Vec<SearchRecord> {
    if query.text.is_empty() {
        return Vec::new();
    }
    let needle = query.text.to_lowercase();

    let mut hits = Vec::new();
    for record in corpus {
        if record.title.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
        {
            if let Some(kind) = query.kind {
                if record.kind != kind {
                    continue;
                }
            }
            hits.push(record.clone());
            if let Some(limit) = query.limit {
                if hits.len() >= limit {
                    break;
                }
            }
        }
    }

    hits
}

/// Renders a calendar day the way the result list shows it.
fn display_day(day: NaiveDate, today: NaiveDate) -> String {
    if is_today(day, today) {
        "Today".to_string()
    } else {
        day.format("%b %-d, %Y").to_string()
    }
}
