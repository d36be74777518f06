//! Transient notifications raised by the store.
//!
//! The store only produces [`Notification`] values. A [`NotificationCenter`]
//! keeps the single one on screen and hides it once its time is up.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    HabitAdded,
    CheckinSuccess,
    Info,
}

/// How the presentation layer should style it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub level: NotificationLevel,
    pub message: String,
    pub habit_name: Option<String>,
}

impl Notification {
    fn new(kind: NotificationKind, level: NotificationLevel, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            level,
            message,
            habit_name: None,
        }
    }

    pub fn habit_added(habit_name: &str) -> Self {
        Self {
            habit_name: Some(habit_name.to_string()),
            ..Self::new(
                NotificationKind::HabitAdded,
                NotificationLevel::Success,
                format!("{} habit added successfully!", habit_name),
            )
        }
    }

    pub fn checkin_success(habit_name: &str) -> Self {
        Self {
            habit_name: Some(habit_name.to_string()),
            ..Self::new(
                NotificationKind::CheckinSuccess,
                NotificationLevel::Success,
                format!("{} updated successfully!", habit_name),
            )
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(
            NotificationKind::Info,
            NotificationLevel::Info,
            message.into(),
        )
    }
}

#[derive(Debug)]
struct Shown {
    notification: Notification,
    shown_at: Instant,
}

/// Holds at most one visible notification.
///
/// A newer notification replaces the current one immediately. Expiry is a
/// timestamp check, so there are no timers to cancel.
#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    current: Option<Shown>,
}

impl NotificationCenter {
    pub const DEFAULT_TTL: Duration = Duration::from_millis(3000);

    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    /// Shows a notification, replacing any current one, and returns its id
    pub fn show(&mut self, notification: Notification) -> Uuid {
        self.show_at(notification, Instant::now())
    }

    pub fn show_at(&mut self, notification: Notification, now: Instant) -> Uuid {
        let id = notification.id;
        debug!(%id, kind = ?notification.kind, "showing notification");
        self.current = Some(Shown {
            notification,
            shown_at: now,
        });
        id
    }

    /// Shows every notification in order; only the last one stays visible
    pub fn show_all(&mut self, notifications: impl IntoIterator<Item = Notification>) {
        for notification in notifications {
            self.show(notification);
        }
    }

    /// The visible notification, if it has not expired
    pub fn current(&mut self) -> Option<&Notification> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&mut self, now: Instant) -> Option<&Notification> {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|shown| now.saturating_duration_since(shown.shown_at) >= self.ttl);

        if expired {
            if let Some(shown) = self.current.take() {
                debug!(id = %shown.notification.id, "notification expired");
            }
        }

        self.current.as_ref().map(|shown| &shown.notification)
    }

    /// Removes the notification with this id. Returns false if it was
    /// already replaced or gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        match &self.current {
            Some(shown) if shown.notification.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}
