//! Job form gate and the external scheduler seam
//!
//! A [`JobDraft`] is what an add/edit form collects. It is validated
//! locally (schedule structure and the command denylist, both always
//! evaluated so every field can show its own message) before anything is
//! handed to a [`ScheduleBackend`]. Backends own persistence, execution
//! and occurrence computation; their responses are opaque here and their
//! failures are surfaced as plain text.

use crate::error::SubmitError;
use crate::validation::Validator;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A job as entered in a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    /// Optional display name; blank names are dropped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Canonical cron expression
    pub schedule: String,
    /// Command line to run
    pub command: String,
}

impl JobDraft {
    pub fn new(schedule: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: None,
            schedule: schedule.into(),
            command: command.into(),
        }
    }

    /// Set the name; an empty or blank name leaves the job unnamed
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() { None } else { Some(name) };
        self
    }

    /// Validate with English messages
    pub fn validate(&self) -> FormErrors {
        self.validate_with(&Validator::default())
    }

    /// Validate both fields with the given validator
    pub fn validate_with(&self, validator: &Validator) -> FormErrors {
        FormErrors {
            schedule: validator.validate(&self.schedule).message,
            command: validator.validate_command(&self.command).message,
        }
    }
}

/// Per-field messages; an empty message means that field passed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    pub schedule: String,
    pub command: String,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty() && self.command.is_empty()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = [("schedule", &self.schedule), ("command", &self.command)]
            .into_iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// External scheduler that persists jobs and computes upcoming runs
#[async_trait]
pub trait ScheduleBackend: Send + Sync {
    /// Persist a validated job and return the backend's record
    async fn save_job(&self, draft: &JobDraft) -> std::result::Result<serde_json::Value, String>;

    /// Upcoming execution times for a validated expression, display-ready
    async fn upcoming_runs(
        &self,
        schedule: &str,
        count: usize,
    ) -> std::result::Result<Vec<String>, String>;
}

/// Validate a draft and hand it to the backend
///
/// The backend is not called when validation fails.
pub async fn submit(
    draft: &JobDraft,
    validator: &Validator,
    backend: &dyn ScheduleBackend,
) -> std::result::Result<serde_json::Value, SubmitError> {
    let errors = draft.validate_with(validator);
    if !errors.is_empty() {
        tracing::debug!(%errors, "Job draft failed validation");
        return Err(SubmitError::Invalid(errors));
    }

    backend.save_job(draft).await.map_err(|e| {
        tracing::warn!(schedule = %draft.schedule, error = %e, "Scheduler rejected job");
        SubmitError::Backend(e)
    })
}

/// Validate an expression and ask the backend for its next runs
pub async fn preview_runs(
    schedule: &str,
    count: usize,
    validator: &Validator,
    backend: &dyn ScheduleBackend,
) -> std::result::Result<Vec<String>, SubmitError> {
    let result = validator.validate(schedule);
    if !result.is_valid {
        return Err(SubmitError::Invalid(FormErrors {
            schedule: result.message,
            command: String::new(),
        }));
    }

    backend
        .upcoming_runs(schedule, count)
        .await
        .map_err(SubmitError::Backend)
}
