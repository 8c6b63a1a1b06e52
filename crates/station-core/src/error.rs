//! Error types for element construction and configuration.
//!
//! Commands issued against a [`Scene`](crate::Scene) never fail: bad targets and
//! degenerate geometry degrade to no-ops. These errors only surface where input
//! is parsed or validated before it reaches the scene.

use thiserror::Error;

/// Errors raised while building or patching elements.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ElementError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Point list must hold an even number of coordinates, at least 4 (got {0})")]
    InvalidPoints(usize),
    #[error("Unsupported image source: {0}")]
    UnsupportedImage(String),
}

/// Result type for element construction.
pub type ElementResult<T> = Result<T, ElementError>;

/// Errors raised while loading editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
