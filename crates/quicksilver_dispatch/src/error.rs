use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("Courier '{courier}' has no start_point")]
    MissingStartPoint { courier: String },

    #[error("Task '{task}' has no {field}")]
    MissingTaskPoint { task: String, field: &'static str },

    #[error("'{id}' has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates { id: String, lat: f64, lon: f64 },

    #[error("'{id}' has a negative capacity")]
    NegativeCapacity { id: String },

    #[error("'{id}' has a negative {field}: {seconds}s")]
    NegativeDuration {
        id: String,
        field: &'static str,
        seconds: i64,
    },

    #[error("Missing {0}")]
    MissingField(&'static str),
}
