//! Structured/raw editor synchronization
//!
//! An [`EditorSession`] backs one schedule input. It owns five per-field
//! strings and the canonical expression string the rest of the
//! application consumes, and is a two-state machine:
//!
//! ```text
//!              toggle_mode
//!  Structured <-----------> Raw
//!   edit_field               edit_raw
//!   external change          external change
//!   resyncs fields           leaves fields alone
//! ```
//!
//! Fields are only ever overwritten from the canonical string while in
//! `Structured` mode and only from a string that splits on single spaces
//! into exactly five tokens, so
//! an in-progress free-form edit or a half-typed external value can never
//! clobber what the user entered field by field.

use crate::describe::Describer;
use crate::error::{CronError, Result};
use crate::locale::Locale;
use crate::types::{tokenize, FieldPosition, FIELD_COUNT};
use crate::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

/// Default written for an empty structured slot
pub const EMPTY_FIELD_DEFAULT: &str = "*";

const EVENT_CAPACITY: usize = 64;

/// Editing mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Five per-field inputs
    #[default]
    Structured,
    /// The canonical string as free text
    Raw,
}

impl EditorMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            EditorMode::Structured => EditorMode::Raw,
            EditorMode::Raw => EditorMode::Structured,
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Structured => write!(f, "structured"),
            EditorMode::Raw => write!(f, "raw"),
        }
    }
}

/// Notifications pushed to the surrounding form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A new canonical value was pushed outward by an edit
    CanonicalChanged { canonical: String },
    /// The mode was toggled
    ModeChanged { mode: EditorMode },
}

/// Snapshot of an editor's state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub mode: EditorMode,
    pub fields: [String; FIELD_COUNT],
    pub canonical: String,
}

/// Join structured fields into a canonical expression
///
/// ```
/// use a3s_cron_text::editor::join_fields;
///
/// let fields = ["0".to_string(), "9".to_string(), String::new(), String::new(), "1-5".to_string()];
/// assert_eq!(join_fields(&fields), "0 9 * * 1-5");
/// ```
pub fn join_fields(fields: &[String; FIELD_COUNT]) -> String {
    fields
        .iter()
        .map(|field| {
            let field = field.trim();
            if field.is_empty() {
                EMPTY_FIELD_DEFAULT
            } else {
                field
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a canonical expression into structured fields
///
/// Returns `None` unless the expression splits on single spaces into
/// exactly five tokens.
pub fn split_fields(canonical: &str) -> Option<[String; FIELD_COUNT]> {
    let tokens = tokenize(canonical);
    let tokens: [&str; FIELD_COUNT] = tokens.as_slice().try_into().ok()?;
    Some(tokens.map(str::to_string))
}

/// One editing session; independent of every other session
pub struct EditorSession {
    id: String,
    state: EditorState,
    describer: Describer,
    validator: Validator,
    event_tx: broadcast::Sender<EditorEvent>,
}

impl EditorSession {
    /// Create a session in `Structured` mode with empty fields
    pub fn new() -> Self {
        Self::with_locale(Locale::default())
    }

    /// Create a session rendering descriptions and messages in `locale`
    pub fn with_locale(locale: Locale) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);
        let session = Self {
            id: format!("cron-edit-{}", uuid::Uuid::new_v4()),
            state: EditorState::default(),
            describer: Describer::new(locale),
            validator: Validator::new(locale),
            event_tx,
        };
        tracing::debug!(session = %session.id, %locale, "Created cron editor session");
        session
    }

    /// Seed the session with an initial canonical value (e.g. an edit form)
    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.on_external_canonical_change(canonical);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mode(&self) -> EditorMode {
        self.state.mode
    }

    pub fn fields(&self) -> &[String; FIELD_COUNT] {
        &self.state.fields
    }

    pub fn field(&self, position: FieldPosition) -> &str {
        &self.state.fields[position.index()]
    }

    /// The single source of truth for the rest of the application
    pub fn canonical(&self) -> &str {
        &self.state.canonical
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn locale(&self) -> Locale {
        self.describer.locale()
    }

    /// Placeholders for the five structured inputs
    pub fn placeholders(&self) -> [String; FIELD_COUNT] {
        FieldPosition::ALL.map(|position| position.placeholder(self.locale()))
    }

    /// Subscribe to canonical pushes and mode changes
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.event_tx.subscribe()
    }

    /// Flip between `Structured` and `Raw`; no data is touched
    pub fn toggle_mode(&mut self) -> EditorMode {
        let mode = self.state.mode.toggled();
        self.state.mode = mode;
        tracing::debug!(session = %self.id, %mode, "Toggled cron editor mode");
        let _ = self.event_tx.send(EditorEvent::ModeChanged { mode });
        mode
    }

    /// Update one structured slot and push the rejoined canonical value
    ///
    /// Only valid in `Structured` mode.
    pub fn edit_field(&mut self, index: usize, value: impl Into<String>) -> Result<String> {
        self.require_mode(EditorMode::Structured, "edit_field")?;
        let slot = self
            .state
            .fields
            .get_mut(index)
            .ok_or(CronError::FieldIndex(index))?;
        *slot = value.into();

        let canonical = join_fields(&self.state.fields);
        Ok(self.push_canonical(canonical))
    }

    /// Edit one slot by position
    pub fn edit_position(&mut self, position: FieldPosition, value: impl Into<String>) -> Result<String> {
        self.edit_field(position.index(), value)
    }

    /// Replace the canonical value with free text; fields are untouched
    ///
    /// Only valid in `Raw` mode.
    pub fn edit_raw(&mut self, text: impl Into<String>) -> Result<String> {
        self.require_mode(EditorMode::Raw, "edit_raw")?;
        Ok(self.push_canonical(text.into()))
    }

    /// Record a canonical value coming from outside the editor
    ///
    /// Fields are overwritten only in `Structured` mode and only when the
    /// value splits into exactly five tokens. Returns whether fields were
    /// resynchronized.
    pub fn on_external_canonical_change(&mut self, canonical: impl Into<String>) -> bool {
        self.state.canonical = canonical.into();
        self.resync()
    }

    /// Re-apply the inbound sync rule to the current canonical value
    pub fn resync(&mut self) -> bool {
        if self.state.mode != EditorMode::Structured {
            tracing::trace!(session = %self.id, "Raw mode, skipping field resync");
            return false;
        }

        match split_fields(&self.state.canonical) {
            Some(fields) => {
                self.state.fields = fields;
                true
            }
            None => {
                tracing::trace!(
                    session = %self.id,
                    canonical = %self.state.canonical,
                    "Canonical value is not five fields, keeping structured input"
                );
                false
            }
        }
    }

    /// Description of the current canonical value
    pub fn description(&self) -> String {
        self.describer.describe(&self.state.canonical)
    }

    /// Validation of the current canonical value
    pub fn validation(&self) -> ValidationResult {
        self.validator.validate(&self.state.canonical)
    }

    fn require_mode(&self, expected: EditorMode, operation: &'static str) -> Result<()> {
        if self.state.mode == expected {
            return Ok(());
        }
        tracing::warn!(session = %self.id, operation, mode = %self.state.mode, "Rejected cron editor operation");
        Err(CronError::WrongMode {
            operation,
            mode: self.state.mode,
        })
    }

    fn push_canonical(&mut self, canonical: String) -> String {
        self.state.canonical = canonical.clone();
        tracing::debug!(session = %self.id, %canonical, "Pushed canonical cron expression");
        let _ = self.event_tx.send(EditorEvent::CanonicalChanged {
            canonical: canonical.clone(),
        });
        canonical
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("locale", &self.locale())
            .finish()
    }
}
