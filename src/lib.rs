//! # a3s-cron-text
//!
//! Cron expression interpretation for schedule editing UIs in the A3S
//! ecosystem.
//!
//! ## Overview
//!
//! `a3s-cron-text` validates the structure of a 5-field cron expression
//! (or an `@` macro), classifies each field, renders a localized
//! human-readable description, and keeps a per-field editor in sync with
//! the single canonical expression string.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_text::{describe, validate_expression, Describer, EditorSession, Locale};
//!
//! assert_eq!(describe("*/15 * * * *"), "runs every 15 minutes");
//! assert_eq!(
//!     Describer::new(Locale::Chinese).describe("0 9 * * 1-5"),
//!     "每周一至周五9点0分"
//! );
//!
//! let result = validate_expression("0 9 * *");
//! assert!(!result.is_valid);
//!
//! let mut editor = EditorSession::new();
//! editor.edit_field(1, "9").unwrap();
//! assert_eq!(editor.canonical(), "* 9 * * *");
//! ```
//!
//! ## Architecture
//!
//! - **classify**: one token to a [`CronField`] shape, never fails
//! - **macros**: `@daily` and friends short-circuit field analysis
//! - **pattern**: fast-path shapes with bespoke phrasing
//! - **describe**: general composition with weekday-over-day precedence
//! - **validation**: structural checks and the command denylist
//! - **editor**: structured/raw two-state sync machine
//! - **job**: form gate in front of an external [`ScheduleBackend`]
//!
//! Field values are never range checked and no calendar occurrences are
//! computed; both belong to the scheduler behind [`ScheduleBackend`].

pub mod classify;
pub mod config;
pub mod describe;
pub mod editor;
pub mod error;
pub mod job;
pub mod locale;
pub mod macros;
pub mod pattern;
pub mod types;
pub mod validation;

// Re-export core types
pub use classify::classify;
pub use config::CronTextConfig;
pub use describe::{describe, Describer};
pub use editor::{EditorEvent, EditorMode, EditorSession, EditorState};
pub use error::{CronError, Result, SubmitError};
pub use job::{preview_runs, submit, FormErrors, JobDraft, ScheduleBackend};
pub use locale::Locale;
pub use macros::{resolve_macro, resolve_macro_in, MacroName};
pub use pattern::{match_fast_path, FastPath};
pub use types::{CronExpression, CronField, CronFields, FieldPosition, StepBase, FIELD_COUNT};
pub use validation::{validate_command, validate_expression, ValidationResult, Validator};
