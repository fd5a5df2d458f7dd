use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    /// A single rejected calorie field. Display is the exact alert text
    /// shown to the user.
    #[error("Invalid Input: {0}")]
    InvalidCalorieValue(String),

    /// A failed calculation pass, carrying every rejected fragment in
    /// encounter order (one per category that hit an invalid field).
    #[error("invalid calorie values: {}", .0.join(", "))]
    InvalidCalorieValues(Vec<String>),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CounterError>;
