use crate::{
    config::TrackerConfig,
    domain::{
        habit::{parse_measurement, Habit, HabitId},
        seed::{placeholder_entries, sample_habits},
    },
    error::{HabitError, Result},
    notification::Notification,
};
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Undrained notifications kept; older ones are dropped first
pub const MAX_PENDING_NOTIFICATIONS: usize = 16;

/// In-memory habit collection with the current selection.
///
/// All mutation goes through [`HabitStore::add_habit`],
/// [`HabitStore::check_in`], [`HabitStore::select_habit`] and
/// [`HabitStore::remove_habit`]. Notifications raised along the way queue up
/// until [`HabitStore::drain_notifications`] is called; only the newest
/// [`MAX_PENDING_NOTIFICATIONS`] are kept.
#[derive(Debug)]
pub struct HabitStore {
    habits: Vec<Habit>,
    selected: Option<HabitId>,
    next_habit_number: u64,
    new_habit_display_key: String,
    notifications: VecDeque<Notification>,
}

impl HabitStore {
    /// Creates a store seeded with the sample habits
    pub fn new() -> Self {
        Self::with_config(&TrackerConfig::default())
    }

    pub fn with_config(config: &TrackerConfig) -> Self {
        let habits = if config.seed_sample_data {
            sample_habits()
        } else {
            Vec::new()
        };
        let next_habit_number = habits.iter().map(|h| h.id.value()).max().unwrap_or(0) + 1;
        let selected = habits.first().map(|h| h.id);

        Self {
            habits,
            selected,
            next_habit_number,
            new_habit_display_key: config.new_habit_display_key.clone(),
            notifications: VecDeque::new(),
        }
    }

    /// Generates the next habit ID
    fn next_habit_id(&mut self) -> HabitId {
        let id = HabitId::new(self.next_habit_number);
        self.next_habit_number += 1;
        id
    }

    fn push_notification(&mut self, notification: Notification) {
        if self.notifications.len() == MAX_PENDING_NOTIFICATIONS {
            if let Some(dropped) = self.notifications.pop_front() {
                debug!(id = %dropped.id, "dropping undrained notification");
            }
        }
        self.notifications.push_back(notification);
    }

    fn position(&self, id: HabitId) -> Result<usize> {
        self.habits
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| HabitError::HabitNotFound(id.to_string()))
    }

    /// Habits in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn get(&self, id: HabitId) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn selected_id(&self) -> Option<HabitId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Habit> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Adds a habit with an empty week of entries.
    ///
    /// `target` is the raw form text and must be a positive number. The
    /// selection only changes when the store was empty.
    pub fn add_habit(&mut self, name: &str, unit: &str, target: &str) -> Result<&Habit> {
        if name.is_empty() || unit.is_empty() {
            warn!("rejected habit with empty name or unit");
            return Err(HabitError::Validation(
                "name and unit are required".to_string(),
            ));
        }

        let target = parse_measurement("Target", target)?;
        if target <= 0.0 {
            warn!(requested_target = target, "rejected non-positive habit target");
            return Err(HabitError::Validation(format!(
                "Target must be greater than zero, got {}",
                target
            )));
        }

        let id = self.next_habit_id();
        let habit = Habit::new(
            id,
            name,
            unit,
            target,
            self.new_habit_display_key.clone(),
            placeholder_entries(),
            0,
        );

        info!(habit_id = %id, habit_name = name, daily_target = target, "habit added");
        self.habits.push(habit);
        self.push_notification(Notification::habit_added(name));
        if self.selected.is_none() {
            self.selected = Some(id);
        }

        let index = self.habits.len() - 1;
        Ok(&self.habits[index])
    }

    /// Records today's value for a habit and updates its streak.
    ///
    /// `value_text` is the raw form text. It must be a non-negative number.
    pub fn check_in(&mut self, id: HabitId, value_text: &str) -> Result<&Habit> {
        let value = parse_measurement("Value", value_text)?;
        if value < 0.0 {
            warn!(habit_id = %id, value, "rejected negative check-in");
            return Err(HabitError::Validation(format!(
                "Value must not be negative, got {}",
                value
            )));
        }

        let index = self.position(id)?;
        let habit = &mut self.habits[index];
        habit.record_today(value);

        info!(habit_id = %id, value, streak = habit.streak, "checked in");
        let notification = Notification::checkin_success(&habit.name);
        self.push_notification(notification);

        Ok(&self.habits[index])
    }

    /// Checks in the currently selected habit
    pub fn check_in_selected(&mut self, value_text: &str) -> Result<&Habit> {
        let id = self
            .selected
            .ok_or_else(|| HabitError::HabitNotFound("no habit selected".to_string()))?;
        self.check_in(id, value_text)
    }

    pub fn select_habit(&mut self, id: HabitId) -> Result<()> {
        self.position(id)?;
        self.selected = Some(id);
        info!(habit_id = %id, "habit selected");
        Ok(())
    }

    /// Removes a habit. If it was selected, the first remaining habit
    /// becomes selected. The last habit cannot be removed.
    pub fn remove_habit(&mut self, id: HabitId) -> Result<Habit> {
        let index = self.position(id)?;
        if self.habits.len() == 1 {
            return Err(HabitError::LastHabit);
        }

        let removed = self.habits.remove(index);
        if self.selected == Some(id) {
            self.selected = self.habits.first().map(|h| h.id);
        }

        info!(habit_id = %id, habit_name = %removed.name, "habit removed");
        Ok(removed)
    }

    /// Queues a free-form informational notification
    pub fn notify_info(&mut self, message: impl Into<String>) {
        self.push_notification(Notification::info(message));
    }

    /// Takes every notification raised since the last call, oldest first
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }
}

impl Default for HabitStore {
    fn default() -> Self {
        Self::new()
    }
}
