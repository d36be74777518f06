use crate::error::{HabitError, Result};
use serde::{Deserialize, Serialize};
use std::{io, path::Path, time::Duration};
use tokio::fs;
use tracing::info;

/// UI colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_system_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        };
    }
}

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// How long a notification stays visible
    pub notification_ttl_ms: u64,
    /// Start with the sample habits instead of an empty store
    pub seed_sample_data: bool,
    /// Display key given to habits added at runtime
    pub new_habit_display_key: String,
    /// Fixed theme; `None` follows the system preference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 3000,
            seed_sample_data: true,
            new_habit_display_key: "trophy".to_string(),
            theme: None,
        }
    }
}

impl TrackerConfig {
    /// Loads configuration from a JSON file, falling back to defaults when
    /// the file does not exist
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;

        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.notification_ttl_ms == 0 {
            return Err(HabitError::ConfigError(
                "notification_ttl_ms must be greater than zero".to_string(),
            ));
        }
        if self.new_habit_display_key.trim().is_empty() {
            return Err(HabitError::ConfigError(
                "new_habit_display_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Configured theme, or the system preference if none is set
    pub fn initial_theme(&self, prefers_dark: bool) -> Theme {
        self.theme
            .unwrap_or_else(|| Theme::from_system_preference(prefers_dark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_theme_toggle() {
        let mut theme = Theme::from_system_preference(false);
        assert!(!theme.is_dark());

        theme.toggle();
        assert_eq!(theme, Theme::Dark);
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_initial_theme() {
        let config = TrackerConfig::default();
        assert_eq!(config.initial_theme(true), Theme::Dark);
        assert_eq!(config.initial_theme(false), Theme::Light);

        let fixed = TrackerConfig {
            theme: Some(Theme::Light),
            ..TrackerConfig::default()
        };
        assert_eq!(fixed.initial_theme(true), Theme::Light);
    }

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.notification_ttl(), Duration::from_millis(3000));
        assert!(config.seed_sample_data);
        assert_eq!(config.new_habit_display_key, "trophy");
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = TrackerConfig::load(temp_dir.path().join("tracker.json"))
            .await
            .unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[tokio::test]
    async fn test_load_unreadable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        // A directory exists but cannot be read as a file
        let err = TrackerConfig::load(temp_dir.path()).await.unwrap_err();
        assert!(matches!(err, HabitError::IoError(_)));
    }

    #[tokio::test]
    async fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tracker.json");
        tokio::fs::write(&path, r#"{ "notification_ttl_ms": 5000, "theme": "dark" }"#)
            .await
            .unwrap();

        let config = TrackerConfig::load(&path).await.unwrap();
        assert_eq!(config.notification_ttl_ms, 5000);
        assert_eq!(config.theme, Some(Theme::Dark));
        assert!(config.seed_sample_data);
        assert_eq!(config.new_habit_display_key, "trophy");
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tracker.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = TrackerConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, HabitError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_load_rejects_zero_ttl() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tracker.json");
        tokio::fs::write(&path, r#"{ "notification_ttl_ms": 0 }"#)
            .await
            .unwrap();

        let err = TrackerConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, HabitError::ConfigError(_)));
    }
}
