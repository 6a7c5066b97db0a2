//! Error types for a3s-cron-text
//!
//! Structural problems with an expression are not errors here: they are
//! reported through [`ValidationResult`](crate::ValidationResult) and the
//! describer degrades instead of failing. `CronError` covers misuse of the
//! stateful editor API and configuration problems.

use crate::editor::EditorMode;
use crate::job::FormErrors;
use thiserror::Error;

/// Errors that can occur in the cron text engine
#[derive(Debug, Error)]
pub enum CronError {
    /// Expression could not be split into a macro or five fields
    #[error("Invalid cron expression: {0}")]
    InvalidExpression(String),

    /// Editor operation issued in a mode that does not accept it
    #[error("'{operation}' is not allowed in {mode} mode")]
    WrongMode {
        operation: &'static str,
        mode: EditorMode,
    },

    /// Structured edit addressed a slot outside the five fields
    #[error("Field index {0} is out of range (expected 0-4)")]
    FieldIndex(usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parse failure
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for cron text operations
pub type Result<T> = std::result::Result<T, CronError>;

/// Failures surfaced when handing a job draft to the external scheduler
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Draft failed local validation; the backend was not called
    #[error("Job draft is invalid: {0}")]
    Invalid(FormErrors),

    /// Backend failure, kept as opaque text for display
    #[error("Scheduler error: {0}")]
    Backend(String),
}
