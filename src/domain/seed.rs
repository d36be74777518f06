//! Sample habits a fresh store starts with.

use crate::domain::habit::{Entry, Habit, HabitId, WINDOW_DAYS};
use chrono::{Duration, NaiveDate};

/// First day of the fixed tracking window. The window never advances.
pub fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 28).unwrap_or_default()
}

fn dated(values: [f64; WINDOW_DAYS]) -> [Entry; WINDOW_DAYS] {
    let start = window_start();
    let mut offset = 0;
    values.map(|value| {
        let entry = Entry::new(start + Duration::days(offset), value);
        offset += 1;
        entry
    })
}

/// Seven zero-valued entries covering the fixed window
pub fn placeholder_entries() -> [Entry; WINDOW_DAYS] {
    dated([0.0; WINDOW_DAYS])
}

/// Sleep, Water and Screen Time with a week of history each
pub fn sample_habits() -> Vec<Habit> {
    vec![
        Habit::new(
            HabitId::new(1),
            "Sleep",
            "hours",
            8.0,
            "moon",
            dated([7.5, 8.0, 7.0, 8.5, 7.5, 9.0, 0.0]),
            6,
        ),
        Habit::new(
            HabitId::new(2),
            "Water",
            "glasses",
            8.0,
            "droplet",
            dated([6.0, 8.0, 7.0, 5.0, 8.0, 6.0, 3.0]),
            7,
        ),
        Habit::new(
            HabitId::new(3),
            "Screen Time",
            "hours",
            3.0,
            "clock",
            dated([4.5, 3.5, 2.5, 3.0, 4.0, 5.0, 2.0]),
            4,
        ),
    ]
}
