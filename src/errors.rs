//! Shared error types for the highlight pipeline adapters.
//!
//! The pipeline itself (`generate_highlights`, `resolve_overlaps`,
//! `Attenuation::weight`) never fails. Errors only come from reading
//! analyser output and from configuration that violates its contract.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for boltzmann-highlights operations
#[derive(Debug, Error)]
pub enum Error {
    /// Analysis file could not be used
    #[error("Analysis error in {}: {message}", .path.display())]
    Analysis { path: PathBuf, message: String },

    /// Configuration values outside their documented range
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an analysis error tied to a file
    pub fn analysis(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Analysis {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }
}
