//! Error types shared by loaders, configuration and report writers
//!
//! The projection engine itself never fails; everything around it does.

use thiserror::Error;

/// Main error type for ROI projection operations
#[derive(Debug, Error)]
pub enum RoiError {
    /// A business parameter is outside its accepted range
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Bad configuration value (environment variable or profile file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unrecognised business model name
    #[error("Unknown business model: {0}")]
    UnknownBusinessModel(String),

    /// Unrecognised currency code
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RoiError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, RoiError>;
