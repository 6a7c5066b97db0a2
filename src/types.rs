//! Core types for cron expressions
//!
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-6, 0=Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! The domains above are advisory. Nothing in this crate rejects an
//! out-of-range value; that is the scheduler's job.

use crate::classify::classify;
use crate::error::{CronError, Result};
use crate::locale::Locale;
use crate::macros::{MacroName, MACRO_SIGIL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Number of fields in a non-macro expression
pub const FIELD_COUNT: usize = 5;

/// Split an expression on single spaces
///
/// Nothing is trimmed or collapsed: a doubled, leading or trailing space
/// yields an empty token and a tab does not separate fields.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split(' ').collect()
}

/// Position of a field within the expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldPosition {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldPosition {
    /// All positions in expression order
    pub const ALL: [FieldPosition; FIELD_COUNT] = [
        FieldPosition::Minute,
        FieldPosition::Hour,
        FieldPosition::DayOfMonth,
        FieldPosition::Month,
        FieldPosition::DayOfWeek,
    ];

    /// Slot index of this position (0-4)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Advisory value domain
    pub fn domain(self) -> RangeInclusive<u32> {
        match self {
            FieldPosition::Minute => 0..=59,
            FieldPosition::Hour => 0..=23,
            FieldPosition::DayOfMonth => 1..=31,
            FieldPosition::Month => 1..=12,
            FieldPosition::DayOfWeek => 0..=6,
        }
    }

    /// Short field label
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, FieldPosition::Minute) => "minute",
            (Locale::English, FieldPosition::Hour) => "hour",
            (Locale::English, FieldPosition::DayOfMonth) => "day of month",
            (Locale::English, FieldPosition::Month) => "month",
            (Locale::English, FieldPosition::DayOfWeek) => "day of week",
            (Locale::Chinese, FieldPosition::Minute) => "分钟",
            (Locale::Chinese, FieldPosition::Hour) => "小时",
            (Locale::Chinese, FieldPosition::DayOfMonth) => "日期",
            (Locale::Chinese, FieldPosition::Month) => "月份",
            (Locale::Chinese, FieldPosition::DayOfWeek) => "星期",
        }
    }

    /// Input placeholder, e.g. `minute (0-59)`
    pub fn placeholder(self, locale: Locale) -> String {
        let domain = self.domain();
        format!(
            "{} ({}-{})",
            self.label(locale),
            domain.start(),
            domain.end()
        )
    }
}

/// Base of a step field (`base/interval`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepBase {
    /// `*/n`
    Any,
    /// `m/n`
    Value(u32),
    /// `a-b/n`
    Range { start: u32, end: u32 },
}

impl fmt::Display for StepBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepBase::Any => write!(f, "*"),
            StepBase::Value(value) => write!(f, "{}", value),
            StepBase::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

/// Semantic shape of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CronField {
    /// `*`
    Wildcard,
    /// `5`
    Single(u32),
    /// `1,3,5`, insertion order and duplicates kept
    List(Vec<u32>),
    /// `1-5`, inclusive; order is not checked
    Range { start: u32, end: u32 },
    /// `*/15`, `5/10`, `0-30/5`
    Step { base: StepBase, interval: u32 },
    /// Anything else, echoed as written
    Literal(String),
}

impl CronField {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, CronField::Wildcard)
    }

    /// Whether the token was written starting from `*`
    ///
    /// Selects the periodic unit noun ("minutes") over the point-in-time
    /// one ("minute") in locales that distinguish them.
    pub fn is_wildcard_derived(&self) -> bool {
        match self {
            CronField::Wildcard => true,
            CronField::Step { base, .. } => *base == StepBase::Any,
            CronField::Literal(text) => text.starts_with('*'),
            _ => false,
        }
    }

    /// Interval of a `*/n` step, if this is one
    pub fn any_step_interval(&self) -> Option<u32> {
        match self {
            CronField::Step {
                base: StepBase::Any,
                interval,
            } => Some(*interval),
            _ => None,
        }
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CronField::Wildcard => write!(f, "*"),
            CronField::Single(value) => write!(f, "{}", value),
            CronField::List(values) => {
                let joined: Vec<String> = values.iter().map(u32::to_string).collect();
                write!(f, "{}", joined.join(","))
            }
            CronField::Range { start, end } => write!(f, "{}-{}", start, end),
            CronField::Step { base, interval } => write!(f, "{}/{}", base, interval),
            CronField::Literal(text) => write!(f, "{}", text),
        }
    }
}

/// The five classified fields of an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronFields {
    pub minute: CronField,
    pub hour: CronField,
    pub day_of_month: CronField,
    pub month: CronField,
    pub day_of_week: CronField,
    /// Tokens as written, in field order
    pub tokens: [String; FIELD_COUNT],
}

impl CronFields {
    /// Classify exactly five tokens
    pub fn from_tokens(tokens: [&str; FIELD_COUNT]) -> Self {
        let [minute, hour, day_of_month, month, day_of_week] = tokens.map(classify);
        Self {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
            tokens: tokens.map(str::to_string),
        }
    }

    /// Token at the given position exactly as written (`09` stays `09`)
    pub fn token(&self, position: FieldPosition) -> &str {
        &self.tokens[position.index()]
    }

    /// Field at the given position
    pub fn get(&self, position: FieldPosition) -> &CronField {
        match position {
            FieldPosition::Minute => &self.minute,
            FieldPosition::Hour => &self.hour,
            FieldPosition::DayOfMonth => &self.day_of_month,
            FieldPosition::Month => &self.month,
            FieldPosition::DayOfWeek => &self.day_of_week,
        }
    }
}

impl fmt::Display for CronFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

/// A parsed expression
///
/// Re-derived from the canonical string whenever it is needed; nothing
/// in the crate keeps one around as mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronExpression {
    /// One of the known `@` shorthands
    Macro(MacroName),
    /// `@` token outside the known set, kept verbatim
    UnknownMacro(String),
    /// Five classified fields
    Fields(CronFields),
}

impl CronExpression {
    /// Parse a macro or a 5-field expression
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cron_text::{CronExpression, CronField};
    ///
    /// let expr = CronExpression::parse("*/15 9-17 * * 1-5").unwrap();
    /// if let CronExpression::Fields(fields) = expr {
    ///     assert_eq!(fields.hour, CronField::Range { start: 9, end: 17 });
    /// }
    ///
    /// assert!(CronExpression::parse("* * *").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        let trimmed = expression.trim();
        if trimmed.starts_with(MACRO_SIGIL) {
            return Ok(match MacroName::from_token(trimmed) {
                Some(name) => CronExpression::Macro(name),
                None => CronExpression::UnknownMacro(trimmed.to_string()),
            });
        }

        let parts = tokenize(expression);
        let tokens: [&str; FIELD_COUNT] = parts.as_slice().try_into().map_err(|_| {
            CronError::InvalidExpression(format!(
                "Expected {} fields, got {}",
                FIELD_COUNT,
                parts.len()
            ))
        })?;

        Ok(CronExpression::Fields(CronFields::from_tokens(tokens)))
    }

    /// Fields, if this is not a macro
    pub fn fields(&self) -> Option<&CronFields> {
        match self {
            CronExpression::Fields(fields) => Some(fields),
            _ => None,
        }
    }
}
