use thiserror::Error;

pub type Result<T> = std::result::Result<T, HabitError>;

#[derive(Debug, Error)]
pub enum HabitError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Invalid habit ID format: {0}")]
    InvalidHabitId(String),

    #[error("Cannot remove the last remaining habit")]
    LastHabit,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
