use chrono::{Days, NaiveDate};
use lifetrack_core::summary::calories::daily_series;
use lifetrack_core::{
    daily_summary, daily_total, parse_calories, total_by_meal, FoodDraft, FoodEntry, FoodLog,
    MealType,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(name: &str, calories: u32, date: NaiveDate, meal: MealType) -> FoodEntry {
    FoodEntry::new(FoodDraft {
        name: name.to_string(),
        calories,
        date,
        meal,
    })
}

#[test]
fn daily_total_sums_only_the_requested_day() {
    let today = day(2025, 3, 8);
    let entries = vec![
        entry("Oatmeal with berries", 350, today, MealType::Breakfast),
        entry("Grilled chicken salad", 450, today, MealType::Lunch),
        entry("Leftover pasta", 600, today - Days::new(1), MealType::Dinner),
    ];

    assert_eq!(daily_total(&entries, today), 800);
    assert_eq!(daily_total(&entries, today - Days::new(1)), 600);
    assert_eq!(daily_total(&entries, today + Days::new(1)), 0);
}

#[test]
fn totals_split_by_meal_type() {
    let today = day(2025, 3, 8);
    let entries = vec![
        entry("Protein bar", 200, today, MealType::Snack),
        entry("Greek yogurt", 150, today, MealType::Snack),
        entry("Salmon with vegetables", 550, today, MealType::Dinner),
    ];

    assert_eq!(total_by_meal(&entries, today, MealType::Snack), 350);
    assert_eq!(total_by_meal(&entries, today, MealType::Dinner), 550);
    assert_eq!(total_by_meal(&entries, today, MealType::Breakfast), 0);
}

#[test]
fn summary_matches_the_reference_scenario() {
    let today = day(2025, 3, 8);
    let entries = vec![
        entry("Oatmeal with berries", 350, today, MealType::Breakfast),
        entry("Grilled chicken salad", 450, today, MealType::Lunch),
        entry("Protein bar", 200, today, MealType::Snack),
    ];

    let summary = daily_summary(&entries, today, 2200);
    assert_eq!(summary.total, 1000);
    assert_eq!(summary.remaining, 1200);
    assert_eq!(summary.progress_pct.round() as i64, 45);
}

#[test]
fn progress_pct_is_clamped_to_100() {
    let today = day(2025, 3, 8);
    let entries = vec![entry("Buffet", 9000, today, MealType::Dinner)];

    let summary = daily_summary(&entries, today, 2200);
    assert_eq!(summary.progress_pct, 100.0);
    assert_eq!(summary.remaining, 2200 - 9000);
}

#[test]
fn empty_day_reads_zero_progress_and_full_remaining() {
    let today = day(2025, 3, 8);
    let summary = daily_summary(&[], today, 2200);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.remaining, 2200);
    assert_eq!(summary.progress_pct, 0.0);
}

#[test]
fn zero_target_stays_total() {
    let today = day(2025, 3, 8);
    assert_eq!(daily_summary(&[], today, 0).progress_pct, 0.0);
    let entries = vec![entry("Protein bar", 200, today, MealType::Snack)];
    assert_eq!(daily_summary(&entries, today, 0).progress_pct, 100.0);
}

#[test]
fn daily_series_covers_the_trailing_window_in_order() {
    let today = day(2025, 3, 8);
    let entries = vec![
        entry("Oatmeal with berries", 350, today, MealType::Breakfast),
        entry("Leftover pasta", 600, today - Days::new(2), MealType::Dinner),
    ];

    let series = daily_series(&entries, today, 7);
    assert_eq!(series.len(), 7);
    assert_eq!(series[6].day, today);
    assert_eq!(series[6].total, 350);
    assert_eq!(series[4].total, 600);
    assert_eq!(series[5].total, 0);
}

#[test]
fn food_log_entries_on_filters_by_day() {
    let today = day(2025, 3, 8);
    let mut log = FoodLog::new();
    log.add(FoodDraft::new("Oatmeal with berries", 350, today));
    log.add(FoodDraft::new("Leftover pasta", 600, today - Days::new(1)));

    assert_eq!(log.entries_on(today).len(), 1);
    assert_eq!(log.entries_on(today).first().unwrap().name, "Oatmeal with berries");
}

#[test]
fn calorie_input_must_be_a_whole_number() {
    assert_eq!(parse_calories("350"), Some(350));
    assert_eq!(parse_calories("three hundred"), None);
}
