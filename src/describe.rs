//! Human-readable schedule descriptions
//!
//! Pipeline: macro lookup, then the fast-path shapes in
//! [`pattern`](crate::pattern), then general composition. General
//! composition renders month, weekday-or-day, hour and minute fragments
//! in that order. A weekday fragment always replaces the day-of-month
//! fragment.

use crate::config::CronTextConfig;
use crate::locale::{Locale, Unit};
use crate::macros::resolve_macro_in;
use crate::pattern::match_fast_path;
use crate::types::{CronExpression, CronField, CronFields, FieldPosition};
use std::borrow::Cow;

/// Describe an expression in English
///
/// Returns an empty string for empty input and the raw text verbatim when
/// it is neither a macro nor five fields.
///
/// ```
/// use a3s_cron_text::describe;
///
/// assert_eq!(describe("*/15 * * * *"), "runs every 15 minutes");
/// assert_eq!(describe("@daily"), "runs once a day");
/// assert_eq!(describe(""), "");
/// ```
pub fn describe(raw: &str) -> String {
    Describer::default().describe(raw)
}

/// Locale-bound describer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Describer {
    locale: Locale,
}

impl Describer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn from_config(config: &CronTextConfig) -> Self {
        Self::new(config.locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Describe a raw expression; never fails
    pub fn describe(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }

        if let Some(phrase) = resolve_macro_in(raw, self.locale) {
            return phrase;
        }

        match CronExpression::parse(raw) {
            Ok(CronExpression::Fields(fields)) => self.describe_fields(&fields),
            Ok(_) => raw.to_string(),
            Err(e) => {
                tracing::debug!(raw, error = %e, "Cannot describe cron expression, echoing input");
                raw.to_string()
            }
        }
    }

    /// Describe already classified fields
    pub fn describe_fields(&self, fields: &CronFields) -> String {
        match match_fast_path(fields) {
            Some(shape) => shape.render(self.locale),
            None => self.compose(fields),
        }
    }

    fn compose(&self, fields: &CronFields) -> String {
        let month = self.month_fragment(&fields.month);
        let weekday = self.weekday_fragment(&fields.day_of_week);
        let day_or_weekday = if weekday.is_empty() {
            self.field_fragment(
                Unit::Day,
                &fields.day_of_month,
                fields.token(FieldPosition::DayOfMonth),
            )
        } else {
            weekday
        };
        let hour = self.field_fragment(Unit::Hour, &fields.hour, fields.token(FieldPosition::Hour));
        let minute = self.field_fragment(
            Unit::Minute,
            &fields.minute,
            fields.token(FieldPosition::Minute),
        );

        let fragments: Vec<String> = [month, day_or_weekday, hour, minute]
            .into_iter()
            .filter(|fragment| !fragment.is_empty())
            .collect();

        if fragments.is_empty() {
            return self.locale.composed_fallback().to_string();
        }

        let joined = self.locale.join_fragments(&fragments);
        tracing::debug!(%fields, description = %joined, "Composed cron description");
        self.locale.dedup_every(&joined)
    }

    /// Shared rendering for day-of-month, hour and minute
    ///
    /// Single values are echoed as written in `token`.
    fn field_fragment(&self, unit: Unit, field: &CronField, token: &str) -> String {
        let wildcard_derived = field.is_wildcard_derived();
        let locale = self.locale;
        match field {
            CronField::Wildcard => String::new(),
            CronField::Step { interval, .. } => locale.step_phrase(unit, wildcard_derived, *interval),
            CronField::Range { start, end } => locale.range_phrase(
                unit,
                wildcard_derived,
                &start.to_string(),
                &end.to_string(),
            ),
            CronField::List(values) => {
                let values: Vec<String> = values.iter().map(u32::to_string).collect();
                locale.list_phrase(unit, wildcard_derived, &values)
            }
            CronField::Single(_) => locale.single_phrase(unit, wildcard_derived, token),
            CronField::Literal(text) => locale.single_phrase(unit, wildcard_derived, text),
        }
    }

    fn weekday_fragment(&self, field: &CronField) -> String {
        let locale = self.locale;
        let name = |day: u32| -> Cow<'static, str> {
            locale
                .weekday_name(day)
                .map(Cow::Borrowed)
                .unwrap_or_else(|| Cow::Owned(day.to_string()))
        };
        match field {
            CronField::Wildcard => String::new(),
            CronField::Single(day) => locale.weekday_single(&name(*day)),
            CronField::List(days) => {
                let names: Vec<String> = days.iter().map(|d| name(*d).into_owned()).collect();
                locale.weekday_list(&names)
            }
            CronField::Range { start, end } => locale.weekday_range(&name(*start), &name(*end)),
            CronField::Step { interval, .. } => locale.weekday_step(*interval),
            CronField::Literal(text) => locale.weekday_single(text),
        }
    }

    fn month_fragment(&self, field: &CronField) -> String {
        let locale = self.locale;
        let name = |month: u32| -> Cow<'static, str> {
            locale
                .month_name(month)
                .map(Cow::Borrowed)
                .unwrap_or_else(|| Cow::Owned(month.to_string()))
        };
        match field {
            CronField::Wildcard => String::new(),
            CronField::Single(month) => locale.month_single(&name(*month)),
            CronField::List(months) => {
                let names: Vec<String> = months.iter().map(|m| name(*m).into_owned()).collect();
                locale.month_list(&names)
            }
            CronField::Range { start, end } => locale.month_range(&name(*start), &name(*end)),
            CronField::Step { interval, .. } => {
                locale.month_step(field.is_wildcard_derived(), *interval)
            }
            CronField::Literal(text) => locale.month_single(text),
        }
    }
}
