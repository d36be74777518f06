//! # Habit Core
//!
//! Core domain models and metrics for a single-session habit tracker.
//!
//! This crate owns the habit collection, the current selection and the
//! check-in rules, and derives chart and summary figures from a habit's
//! week of entries. Rendering, theming and notification display are left to
//! the presentation layer, which only calls into these types.

pub mod config;
pub mod domain;
pub mod error;
pub mod notification;

// Re-export commonly used types
pub use config::{Theme, TrackerConfig};
pub use domain::{
    habit::{Entry, Habit, HabitId},
    metrics::{average, today_completion_pct, weekly_series, ChartPoint},
    store::HabitStore,
};
pub use error::{HabitError, Result};
pub use notification::{Notification, NotificationCenter, NotificationKind, NotificationLevel};
