//! Core error types for habitflow-core.
//!
//! The computation layer has a small failure surface: configuration
//! spellings that cannot be interpreted, calendar strings that cannot be
//! parsed, and habit targets outside their allowed bounds. An empty
//! check-in history, a habit with no badges eligible, or a tick with no
//! due reminders are all normal zero-valued results, never errors.

use thiserror::Error;

use crate::model::Frequency;

/// Core error type for habitflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Calendar parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
///
/// A wrong cadence silently corrupts streak and expected-count math, so an
/// unrecognized value fails fast instead of defaulting.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Frequency spelling not in the known set
    #[error("unknown frequency '{0}' (expected daily, weekly, monthly, quarterly or yearly)")]
    UnknownFrequency(String),

    /// Target type spelling not in the known set
    #[error("unknown target type '{0}' (expected boolean, times, minutes, pages or count)")]
    UnknownTargetType(String),

    /// Period spelling not in the known set
    #[error("unknown period '{0}' (expected week, month or year)")]
    UnknownPeriod(String),
}

/// Errors for calendar strings that refuse to become calendar values.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Calendar day could not be parsed
    #[error("invalid calendar day '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Timestamp could not be parsed
    #[error("invalid timestamp '{value}': expected YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp { value: String },

    /// Wall-clock time could not be parsed
    #[error("invalid wall-clock time '{value}': expected HH:MM")]
    InvalidTime { value: String },
}

/// Validation errors for habit configuration and check-in values.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Target value must be positive for non-boolean targets
    #[error("target value must be greater than 0")]
    ZeroTarget,

    /// Target value outside the per-frequency bounds
    #[error("target value {value} for {frequency} frequency should be between {min} and {max}")]
    TargetOutOfRange {
        frequency: Frequency,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Minutes targets are capped at a full day
    #[error("target minutes cannot exceed 1440 (24 hours)")]
    MinutesExceedDay,

    /// Check-in values are magnitudes and cannot be negative
    #[error("check-in value must be non-negative, got {0}")]
    NegativeCheckInValue(f64),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
