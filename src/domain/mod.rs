pub mod habit;
pub mod metrics;
pub mod seed;
pub mod store;

pub use habit::{Entry, Habit, HabitId, TODAY_INDEX, WINDOW_DAYS};
pub use metrics::{average, today_completion_pct, weekly_series, window_streak, ChartPoint};
pub use store::HabitStore;
