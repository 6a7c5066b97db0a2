//! Field classification
//!
//! Turns one field token into a [`CronField`]. Classification is total:
//! separators are checked in a fixed order (`/`, `-`, `,`) and any piece
//! that is not a plain integer degrades the whole token to
//! [`CronField::Literal`] instead of failing.

use crate::types::{CronField, StepBase};

/// Classify a single field token
///
/// # Examples
///
/// ```
/// use a3s_cron_text::{classify, CronField, StepBase};
///
/// assert_eq!(classify("*"), CronField::Wildcard);
/// assert_eq!(classify("*/15"), CronField::Step { base: StepBase::Any, interval: 15 });
/// assert_eq!(classify("1-5"), CronField::Range { start: 1, end: 5 });
/// assert_eq!(classify("1,3,5"), CronField::List(vec![1, 3, 5]));
/// assert_eq!(classify("30"), CronField::Single(30));
/// assert_eq!(classify("MON"), CronField::Literal("MON".to_string()));
/// ```
pub fn classify(token: &str) -> CronField {
    let token = token.trim();
    let field = classify_shape(token).unwrap_or_else(|| CronField::Literal(token.to_string()));
    tracing::trace!(token, ?field, "Classified cron field");
    field
}

fn classify_shape(token: &str) -> Option<CronField> {
    if token == "*" {
        return Some(CronField::Wildcard);
    }

    if let Some((base, interval)) = token.split_once('/') {
        return Some(CronField::Step {
            base: parse_step_base(base)?,
            interval: parse_value(interval)?,
        });
    }

    if let Some((start, end)) = token.split_once('-') {
        return Some(CronField::Range {
            start: parse_value(start)?,
            end: parse_value(end)?,
        });
    }

    if token.contains(',') {
        let values = token
            .split(',')
            .map(parse_value)
            .collect::<Option<Vec<u32>>>()?;
        return Some(CronField::List(values));
    }

    parse_value(token).map(CronField::Single)
}

fn parse_step_base(base: &str) -> Option<StepBase> {
    if base == "*" {
        return Some(StepBase::Any);
    }
    if let Some((start, end)) = base.split_once('-') {
        return Some(StepBase::Range {
            start: parse_value(start)?,
            end: parse_value(end)?,
        });
    }
    parse_value(base).map(StepBase::Value)
}

/// Plain unsigned decimal; signs and empty pieces are rejected
fn parse_value(piece: &str) -> Option<u32> {
    if piece.is_empty() || !piece.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    piece.parse().ok()
}
