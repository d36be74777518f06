use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Number of days tracked per habit
pub const WINDOW_DAYS: usize = 7;

/// Position of today's entry in the window
pub const TODAY_INDEX: usize = WINDOW_DAYS - 1;

/// Unique identifier for a habit (e.g., 1, 2, 42)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(u64);

impl HabitId {
    /// Creates a new HabitId from a counter
    pub const fn new(counter: u64) -> Self {
        Self(counter)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for HabitId {
    type Err = crate::error::HabitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| crate::error::HabitError::InvalidHabitId(s.to_string()))
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One day's recorded value for a habit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub value: f64,
}

impl Entry {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A tracked recurring activity with a numeric daily target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub unit: String,
    pub target: f64,
    /// Presentation key (icon name); never interpreted here
    pub display_key: String,
    /// Oldest to newest, the last one is today
    pub entries: [Entry; WINDOW_DAYS],
    pub streak: u32,
}

impl Habit {
    /// Creates a habit with an explicit history and streak
    pub fn new(
        id: HabitId,
        name: impl Into<String>,
        unit: impl Into<String>,
        target: f64,
        display_key: impl Into<String>,
        entries: [Entry; WINDOW_DAYS],
        streak: u32,
    ) -> Self {
        debug_assert!(target > 0.0, "habit target must be positive");
        Self {
            id,
            name: name.into(),
            unit: unit.into(),
            target,
            display_key: display_key.into(),
            entries,
            streak,
        }
    }

    /// Today's entry
    pub fn today(&self) -> &Entry {
        &self.entries[TODAY_INDEX]
    }

    /// Checks if a value reaches the daily target
    pub fn meets_target(&self, value: f64) -> bool {
        value >= self.target
    }

    /// Overwrites today's value and advances or resets the streak.
    ///
    /// The streak is updated incrementally from its previous value; the rest
    /// of the window is not consulted.
    pub fn record_today(&mut self, value: f64) {
        self.entries[TODAY_INDEX].value = value;
        self.streak = if self.meets_target(value) {
            self.streak.saturating_add(1)
        } else {
            0
        };
    }
}

/// Length of the longest numeric prefix: optional sign, digits with an
/// optional fraction, then an optional exponent. Zero if no digits.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        mantissa_end = digits_from(int_end + 1);
    }

    let sign_len = end;
    let digit_count = mantissa_end - sign_len - usize::from(mantissa_end > int_end);
    if digit_count == 0 {
        return 0;
    }
    end = mantissa_end;

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    end
}

/// Parses a user-typed measurement into a finite number.
///
/// Reads the leading number and ignores trailing text, so `"20 pages"` is 20.
pub fn parse_measurement(field: &str, text: &str) -> crate::error::Result<f64> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Err(crate::error::HabitError::Validation(format!(
            "{} is required",
            field
        )));
    }

    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(crate::error::HabitError::Validation(format!(
            "{} must be a number, got '{}'",
            field, text
        ))),
    }
}
