//! Error handling module for the customer console.
//!
//! Provides a centralized error type for everything that can go wrong while
//! talking to the customer service.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const HTTP_ERROR: &str = "HTTP_ERROR";
    pub const STATUS_ERROR: &str = "STATUS_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (connect, timeout, TLS)
    Http(String),
    /// The service answered with a non-success status
    Status { status: u16, body: String },
    /// Response body did not match the expected shape
    Decode(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Http(_) => codes::HTTP_ERROR,
            AppError::Status { .. } => codes::STATUS_ERROR,
            AppError::Decode(_) => codes::DECODE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Http(msg) => msg.clone(),
            AppError::Status { status, body } => {
                format!("unexpected status {}: {}", status, body)
            }
            AppError::Decode(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Request error: {:?}", err);
        if err.is_decode() {
            AppError::Decode(format!("Decode error: {}", err))
        } else {
            AppError::Http(format!("HTTP error: {}", err))
        }
    }
}
