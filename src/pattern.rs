//! Fast-path whole-expression shapes
//!
//! A handful of common schedules read better with bespoke phrasing than
//! with general composition. They are tried in order and the first match
//! wins:
//!
//! 1. `* * * * *`
//! 2. `* H * * *`
//! 3. `0 H * * *` (phrased like rule 2: both mean "on the hour")
//! 4. `M * * * *`
//!
//! Hour and minute values in the phrases are the tokens as written.

use crate::locale::Locale;
use crate::types::{CronField, CronFields, FieldPosition};

/// A matched fast-path shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastPath<'a> {
    EveryMinute,
    EveryNHours(u32),
    DailyAtHour(&'a str),
    EveryNMinutes(u32),
    MinuteOfEveryHour(&'a str),
}

impl FastPath<'_> {
    /// Render the shape in the given locale
    pub fn render(&self, locale: Locale) -> String {
        match self {
            FastPath::EveryMinute => locale.every_minute().to_string(),
            FastPath::EveryNHours(interval) => locale.every_n_hours(*interval),
            FastPath::DailyAtHour(hour) => locale.daily_at_hour(hour),
            FastPath::EveryNMinutes(interval) => locale.every_n_minutes(*interval),
            FastPath::MinuteOfEveryHour(minute) => locale.minute_of_every_hour(minute),
        }
    }
}

/// Match the fast-path rules against classified fields
pub fn match_fast_path(fields: &CronFields) -> Option<FastPath<'_>> {
    let date_wildcard = fields.day_of_month.is_wildcard()
        && fields.month.is_wildcard()
        && fields.day_of_week.is_wildcard();
    if !date_wildcard {
        return None;
    }

    let matched = match (&fields.minute, &fields.hour) {
        (CronField::Wildcard, CronField::Wildcard) => FastPath::EveryMinute,
        (CronField::Wildcard | CronField::Single(0), hour) if !hour.is_wildcard() => {
            match hour.any_step_interval() {
                Some(interval) => FastPath::EveryNHours(interval),
                None => FastPath::DailyAtHour(fields.token(FieldPosition::Hour)),
            }
        }
        (minute, CronField::Wildcard) => match minute.any_step_interval() {
            Some(interval) => FastPath::EveryNMinutes(interval),
            None => FastPath::MinuteOfEveryHour(fields.token(FieldPosition::Minute)),
        },
        _ => return None,
    };

    tracing::debug!(?matched, "Matched fast-path cron shape");
    Some(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CronExpression;

    fn fields(raw: &str) -> CronFields {
        match CronExpression::parse(raw).unwrap() {
            CronExpression::Fields(fields) => fields,
            other => panic!("expected fields, got {other:?}"),
        }
    }

    #[test]
    fn test_every_minute() {
        assert_eq!(match_fast_path(&fields("* * * * *")), Some(FastPath::EveryMinute));
    }

    #[test]
    fn test_hour_step_with_wildcard_minute() {
        assert_eq!(
            match_fast_path(&fields("* */2 * * *")),
            Some(FastPath::EveryNHours(2))
        );
    }

    #[test]
    fn test_zero_minute_shares_hour_rule() {
        let f = fields("0 */6 * * *");
        assert_eq!(match_fast_path(&f), Some(FastPath::EveryNHours(6)));

        let f = fields("0 9 * * *");
        assert_eq!(match_fast_path(&f), Some(FastPath::DailyAtHour("9")));

        let f = fields("* 9 * * *");
        assert_eq!(match_fast_path(&f), Some(FastPath::DailyAtHour("9")));
    }

    #[test]
    fn test_hour_step_with_concrete_base_is_daily() {
        let f = fields("0 1/2 * * *");
        assert_eq!(match_fast_path(&f), Some(FastPath::DailyAtHour("1/2")));
    }

    #[test]
    fn test_zero_minute_with_wildcard_hour_is_minute_rule() {
        let f = fields("0 * * * *");
        assert_eq!(match_fast_path(&f), Some(FastPath::MinuteOfEveryHour("0")));
    }

    #[test]
    fn test_minute_step() {
        assert_eq!(
            match_fast_path(&fields("*/15 * * * *")),
            Some(FastPath::EveryNMinutes(15))
        );
    }

    #[test]
    fn test_tokens_are_kept_as_written() {
        let f = fields("0 09 * * *");
        assert_eq!(match_fast_path(&f), Some(FastPath::DailyAtHour("09")));
        assert_eq!(
            match_fast_path(&f).unwrap().render(Locale::Chinese),
            "每天09点执行"
        );

        let f = fields("05 * * * *");
        assert_eq!(match_fast_path(&f), Some(FastPath::MinuteOfEveryHour("05")));
        assert_eq!(
            match_fast_path(&f).unwrap().render(Locale::English),
            "runs at minute 05 of every hour"
        );
    }

    #[test]
    fn test_no_fast_path() {
        assert_eq!(match_fast_path(&fields("30 9 * * *")), None);
        assert_eq!(match_fast_path(&fields("* * 1 * *")), None);
        assert_eq!(match_fast_path(&fields("0 9 * * 1-5")), None);
    }

    #[test]
    fn test_render() {
        assert_eq!(
            FastPath::MinuteOfEveryHour("5").render(Locale::English),
            "runs at minute 5 of every hour"
        );
        assert_eq!(
            FastPath::DailyAtHour("9-17").render(Locale::Chinese),
            "每天9-17点执行"
        );
    }
}
