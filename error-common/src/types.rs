use thiserror::Error;

use crate::codes;
use crate::context::ErrorContext;

/// Error enum shared across the compliance engine crates
#[derive(Error, Debug)]
pub enum ComplianceError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// A location name outside `headers`, `output`, `data`, `body`
    #[error("Unknown masking location: {0}")]
    UnknownLocation(String),

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backing store errors (report store, log store)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ComplianceError {
    /// Stable code used when reporting this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => codes::configuration::INVALID_CONFIG,
            Self::UnknownLocation(_) => codes::configuration::UNKNOWN_LOCATION,
            Self::Serialization(_) => codes::serialization::INVALID_JSON,
            Self::Io(_) => codes::storage::IO_FAILED,
            Self::Storage(_) => codes::storage::STORE_FAILED,
            Self::Validation(_) => codes::validation::INVALID_INPUT,
            Self::Other(_) => codes::internal::UNEXPECTED,
        }
    }
}

/// Result type alias for compliance engine operations
pub type Result<T> = std::result::Result<T, ComplianceError>;

/// Log an error with its context
pub fn log_error(context: &ErrorContext, error: &ComplianceError) {
    tracing::error!(
        operation = context.operation_name(),
        request_id = context.request_id.as_deref(),
        details = ?context.additional,
        error_code = error.code(),
        error = %error,
        "compliance operation failed"
    );
}
