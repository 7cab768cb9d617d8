// src/error.rs

//! Unified error handling for the export pipeline.

use std::fmt;

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fetch of a single resource failed; recoverable at the item boundary
    #[error("Fetch error for {url}: {message}")]
    Fetch { url: String, message: String },

    /// Catalog page could not be fetched or decoded; fatal to the run
    #[error("Catalog error for {url}: {message}")]
    Catalog { url: String, message: String },

    /// Derived-metric computation failed for one record
    #[error("Computation error: {0}")]
    Compute(String),
}

impl AppError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a fetch error carrying the failing resource URL.
    pub fn fetch(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a catalog error carrying the failing page URL.
    pub fn catalog(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Catalog {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a computation error.
    pub fn compute(message: impl Into<String>) -> Self {
        Self::Compute(message.into())
    }
}
