use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type alias for AppResult
pub type AppResult<T> = Result<T, AppError>;
