use crate::domain::habit::{Habit, TODAY_INDEX, WINDOW_DAYS};
use serde::Serialize;

/// Chart labels by window position
pub const DAY_LABELS: [&str; WINDOW_DAYS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One point of the weekly chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
    pub target: f64,
}

/// Chart-ready series for a habit, labelled Mon..Sun by position
pub fn weekly_series(habit: &Habit) -> Vec<ChartPoint> {
    habit
        .entries
        .iter()
        .zip(DAY_LABELS)
        .map(|(entry, label)| ChartPoint {
            label,
            value: entry.value,
            target: habit.target,
        })
        .collect()
}

/// Mean of the window values, rounded to one decimal place
pub fn average(habit: &Habit) -> f64 {
    let sum: f64 = habit.entries.iter().map(|e| e.value).sum();
    round_to_tenths(sum / WINDOW_DAYS as f64)
}

/// Today's progress toward the target as a whole percentage, capped at 100
pub fn today_completion_pct(habit: &Habit) -> u8 {
    debug_assert!(habit.target > 0.0, "habit target must be positive");

    let ratio = (habit.entries[TODAY_INDEX].value / habit.target).clamp(0.0, 1.0);
    (ratio * 100.0).round() as u8
}

/// Trailing run of days in the window that reach the target.
///
/// Independent of the stored streak, which is only ever updated
/// incrementally on check-in.
pub fn window_streak(habit: &Habit) -> u32 {
    habit
        .entries
        .iter()
        .rev()
        .take_while(|e| habit.meets_target(e.value))
        .count() as u32
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::sample_habits;

    fn habit(name: &str) -> Habit {
        sample_habits()
            .into_iter()
            .find(|h| h.name == name)
            .expect("sample habit")
    }

    #[test]
    fn test_weekly_series_labels() {
        for h in sample_habits() {
            let series = weekly_series(&h);
            assert_eq!(series.len(), WINDOW_DAYS);

            let labels: Vec<&str> = series.iter().map(|p| p.label).collect();
            assert_eq!(labels, DAY_LABELS.to_vec());
            assert!(series.iter().all(|p| p.target == h.target));
        }
    }

    #[test]
    fn test_weekly_series_values() {
        let water = habit("Water");
        let values: Vec<f64> = weekly_series(&water).iter().map(|p| p.value).collect();
        assert_eq!(values, vec![6.0, 8.0, 7.0, 5.0, 8.0, 6.0, 3.0]);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        // 47.5 / 7 = 6.79
        assert_eq!(average(&habit("Sleep")), 6.8);
        // 43 / 7 = 6.14
        assert_eq!(average(&habit("Water")), 6.1);
        // 24.5 / 7 = 3.5
        assert_eq!(average(&habit("Screen Time")), 3.5);
    }

    #[test]
    fn test_today_completion_pct() {
        assert_eq!(today_completion_pct(&habit("Sleep")), 0);
        // 3 / 8 = 37.5%, rounds half away from zero
        assert_eq!(today_completion_pct(&habit("Water")), 38);
        // 2 / 3 = 66.7%
        assert_eq!(today_completion_pct(&habit("Screen Time")), 67);
    }

    #[test]
    fn test_today_completion_pct_caps_at_100() {
        let mut sleep = habit("Sleep");
        sleep.record_today(12.0);
        assert_eq!(today_completion_pct(&sleep), 100);
    }

    #[test]
    fn test_window_streak() {
        // Sleep ends with 0 today
        assert_eq!(window_streak(&habit("Sleep")), 0);

        let mut sleep = habit("Sleep");
        sleep.record_today(9.0);
        // 9.0, 7.5 breaks the run
        assert_eq!(window_streak(&sleep), 2);

        // Stored streak is left as the incremental value
        assert_eq!(sleep.streak, 7);
    }
}
