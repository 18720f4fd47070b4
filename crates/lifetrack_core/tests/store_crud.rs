use chrono::NaiveDate;
use lifetrack_core::{
    BucketDraft, BucketListStore, FoodDraft, FoodLog, HabitDraft, HabitStore, NotificationDraft,
    NotificationFeed, Priority, TaskDraft, TaskStore, EntityKind,
};
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn add_and_get_roundtrip() {
    let mut store = TaskStore::new();
    let added = store
        .add(TaskDraft {
            title: "Complete project proposal".to_string(),
            due_date: Some(day(2025, 3, 15)),
            priority: Priority::High,
            category: "work".to_string(),
        })
        .unwrap();
    let id = added.id;

    let loaded = store.get(id).unwrap();
    assert_eq!(loaded.title, "Complete project proposal");
    assert!(!loaded.completed);
    assert_eq!(loaded.priority, Priority::High);
    assert_eq!(store.len(), 1);
}

#[test]
fn add_with_blank_title_is_a_no_op_for_every_store() {
    let mut tasks = TaskStore::new();
    assert!(tasks.add(TaskDraft::new("   ")).is_none());
    assert!(tasks.is_empty());

    let mut goals = BucketListStore::new();
    assert!(goals.add(BucketDraft::new("")).is_none());
    assert!(goals.is_empty());

    let mut food = FoodLog::new();
    assert!(food.add(FoodDraft::new(" \t", 350, day(2025, 3, 8))).is_none());
    assert!(food.is_empty());

    let mut habits = HabitStore::new();
    assert!(habits.add(HabitDraft::new("")).is_none());
    assert!(habits.is_empty());

    let mut feed = NotificationFeed::new();
    assert!(feed.add(NotificationDraft::new("  ", EntityKind::System)).is_none());
    assert!(feed.is_empty());
}

#[test]
fn add_then_remove_restores_prior_state() {
    let mut store = TaskStore::new();
    store.add(TaskDraft::new("Morning workout")).unwrap();
    let snapshot: Vec<_> = store.all().to_vec();

    let id = store.add(TaskDraft::new("Grocery shopping")).unwrap().id;
    assert_eq!(store.len(), 2);

    assert!(store.remove(id));
    assert_eq!(store.all(), snapshot.as_slice());
}

#[test]
fn update_replaces_whole_record_and_keeps_stored_id() {
    let mut store = BucketListStore::new();
    let id = store
        .add(BucketDraft::new("Learn to play the guitar"))
        .unwrap()
        .id;

    let mut edited = store.get(id).unwrap().clone();
    edited.title = "Learn to play the piano".to_string();
    edited.description = "Weekly lessons".to_string();
    // A stale id on the patch must not break identity.
    edited.id = Uuid::new_v4();

    assert!(store.update(id, edited));
    let loaded = store.get(id).unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.title, "Learn to play the piano");
    assert_eq!(loaded.description, "Weekly lessons");
}

#[test]
fn operations_on_unknown_ids_are_no_ops() {
    let mut tasks = TaskStore::new();
    tasks.add(TaskDraft::new("Call mom")).unwrap();
    let unknown = Uuid::new_v4();

    let snapshot: Vec<_> = tasks.all().to_vec();
    assert!(!tasks.remove(unknown));
    assert!(!tasks.toggle_completed(unknown));
    let patch = tasks.all()[0].clone();
    assert!(!tasks.update(unknown, patch));
    assert_eq!(tasks.all(), snapshot.as_slice());
}

#[test]
fn toggle_completed_twice_is_an_idempotent_pair() {
    let mut store = TaskStore::new();
    let id = store.add(TaskDraft::new("Read 30 pages")).unwrap().id;

    assert!(store.toggle_completed(id));
    assert!(store.get(id).unwrap().completed);
    assert!(store.toggle_completed(id));
    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn insertion_order_is_preserved() {
    let mut store = FoodLog::new();
    store.add(FoodDraft::new("Oatmeal with berries", 350, day(2025, 3, 8)));
    store.add(FoodDraft::new("Grilled chicken salad", 450, day(2025, 3, 8)));
    store.add(FoodDraft::new("Protein bar", 200, day(2025, 3, 8)));

    let names: Vec<&str> = store.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        names,
        ["Oatmeal with berries", "Grilled chicken salad", "Protein bar"]
    );
}

#[test]
fn notification_feed_tracks_unread_and_marks_all_read() {
    let mut feed = NotificationFeed::new();
    let first = feed
        .add(NotificationDraft::new("Task Due Soon", EntityKind::Task))
        .unwrap()
        .id;
    feed.add(NotificationDraft::new("Habit Streak", EntityKind::Habit))
        .unwrap();
    assert_eq!(feed.unread_count(), 2);

    assert!(feed.mark_read(first));
    assert_eq!(feed.unread_count(), 1);
    // Marking an already-read entry again stays read.
    assert!(feed.mark_read(first));
    assert_eq!(feed.unread_count(), 1);

    feed.mark_all_read();
    assert_eq!(feed.unread_count(), 0);
    assert!(feed.iter().all(|n| n.read));
}
