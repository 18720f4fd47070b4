//! Stock sample data for a fresh session.
//!
//! Dates are offsets from the seed day so today/upcoming buckets, streak
//! windows and daily totals are populated on any start date.

use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::model::bucket::BucketListItem;
use crate::model::food::{FoodEntry, MealType};
use crate::model::habit::{Frequency, Habit};
use crate::model::notification::Notification;
use crate::model::settings::UserSettings;
use crate::model::task::{Priority, Task};
use crate::model::EntityKind;
use crate::session::Session;
use crate::store::{BucketListStore, FoodLog, HabitStore, NotificationFeed, TaskStore};

pub(crate) fn sample_session(today: NaiveDate) -> Session {
    Session {
        tasks: TaskStore::from_records(sample_tasks(today)),
        bucket_list: BucketListStore::from_records(sample_bucket_list(today)),
        food_log: FoodLog::from_records(sample_food_entries(today)),
        habits: HabitStore::from_records(sample_habits(today)),
        notifications: NotificationFeed::from_records(sample_notifications()),
        settings: UserSettings::default(),
    }
}

fn sample_tasks(today: NaiveDate) -> Vec<Task> {
    vec![
        task(
            "Complete project proposal",
            false,
            Some(today + Days::new(7)),
            Priority::High,
            "work",
        ),
        task("Morning workout", true, Some(today), Priority::Medium, "health"),
        task("Read 30 pages", false, Some(today), Priority::Low, "personal"),
        task(
            "Grocery shopping",
            false,
            Some(today + Days::new(1)),
            Priority::Medium,
            "errands",
        ),
        task(
            "Call mom",
            false,
            Some(today + Days::new(2)),
            Priority::Medium,
            "personal",
        ),
    ]
}

fn sample_bucket_list(today: NaiveDate) -> Vec<BucketListItem> {
    vec![
        goal(
            "Visit Japan during cherry blossom season",
            "Experience the beauty of sakura in Tokyo and Kyoto",
            Some(today + Days::new(38)),
            false,
            "travel",
        ),
        goal(
            "Learn to play the guitar",
            "Take lessons and practice regularly to play my favorite songs",
            Some(today + Days::new(298)),
            false,
            "skill",
        ),
        goal(
            "Run a half marathon",
            "Train for and complete a half marathon race",
            Some(today + Days::new(216)),
            true,
            "fitness",
        ),
        goal(
            "Write a novel",
            "Complete a 50,000 word fiction novel",
            Some(today + Days::new(299)),
            false,
            "creative",
        ),
    ]
}

fn sample_food_entries(today: NaiveDate) -> Vec<FoodEntry> {
    vec![
        food("Oatmeal with berries", 350, today, MealType::Breakfast),
        food("Grilled chicken salad", 450, today, MealType::Lunch),
        food("Protein bar", 200, today, MealType::Snack),
        food("Salmon with vegetables", 550, today, MealType::Dinner),
        food("Greek yogurt", 150, today, MealType::Snack),
    ]
}

fn sample_habits(today: NaiveDate) -> Vec<Habit> {
    vec![
        habit(
            "Morning Meditation",
            "10 minutes of mindfulness meditation",
            Frequency::Daily,
            "wellness",
            trailing_days(today, 7),
        ),
        habit(
            "Read 30 pages",
            "Read at least 30 pages of a book",
            Frequency::Daily,
            "personal",
            trailing_days(today, 3),
        ),
        habit(
            "Drink 8 glasses of water",
            "Stay hydrated throughout the day",
            Frequency::Daily,
            "health",
            trailing_days(today, 5),
        ),
        habit(
            "Weekly meal prep",
            "Prepare meals for the week ahead",
            Frequency::Weekly,
            "health",
            BTreeSet::from([today - Days::new(7), today]),
        ),
    ]
}

fn sample_notifications() -> Vec<Notification> {
    vec![
        notification(
            "Task Due Soon",
            "Complete project proposal is due in 2 hours",
            "2 hours ago",
            false,
            EntityKind::Task,
        ),
        notification(
            "Calorie Goal Reached",
            "You've reached 80% of your daily calorie target",
            "4 hours ago",
            false,
            EntityKind::Calorie,
        ),
        notification(
            "Habit Streak",
            "You've maintained your meditation habit for 7 days!",
            "1 day ago",
            true,
            EntityKind::Habit,
        ),
        notification(
            "Bucket List Reminder",
            "Your goal to \"Learn Spanish\" has a target date next month",
            "2 days ago",
            true,
            EntityKind::BucketList,
        ),
        notification(
            "System Update",
            "New features have been added to the tracker",
            "3 days ago",
            true,
            EntityKind::System,
        ),
    ]
}

/// The streak's recent window: `n` consecutive days ending at `today`.
fn trailing_days(today: NaiveDate, n: u64) -> BTreeSet<NaiveDate> {
    (0..n).map(|back| today - Days::new(back)).collect()
}

fn task(
    title: &str,
    completed: bool,
    due_date: Option<NaiveDate>,
    priority: Priority,
    category: &str,
) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: title.to_string(),
        completed,
        due_date,
        priority,
        category: category.to_string(),
    }
}

fn goal(
    title: &str,
    description: &str,
    target_date: Option<NaiveDate>,
    completed: bool,
    category: &str,
) -> BucketListItem {
    BucketListItem {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        target_date,
        completed,
        category: category.to_string(),
    }
}

fn food(name: &str, calories: u32, date: NaiveDate, meal: MealType) -> FoodEntry {
    FoodEntry {
        id: Uuid::new_v4(),
        name: name.to_string(),
        calories,
        date,
        meal,
    }
}

fn habit(
    name: &str,
    description: &str,
    frequency: Frequency,
    category: &str,
    completed_dates: BTreeSet<NaiveDate>,
) -> Habit {
    Habit {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        frequency,
        category: category.to_string(),
        streak: completed_dates.len() as u32,
        completed_dates,
    }
}

fn notification(
    title: &str,
    description: &str,
    time: &str,
    read: bool,
    kind: EntityKind,
) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        time: time.to_string(),
        read,
        kind,
    }
}
