//! Phrase tables for schedule descriptions
//!
//! Each [`Locale`] supplies the fixed phrases, weekday/month names and
//! unit nouns the describer stitches together. English prefixes units
//! and pluralizes by count; Chinese suffixes units and picks a different
//! noun for wildcard-derived fields (`每5分钟`) than for concrete ones
//! (`30分`).

use crate::error::CronError;
use crate::macros::MacroName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language for descriptions and validation messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "en"),
            Locale::Chinese => write!(f, "zh"),
        }
    }
}

impl FromStr for Locale {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase().replace('_', "-");
        match tag.split('-').next().unwrap_or_default() {
            "en" => Ok(Locale::English),
            "zh" => Ok(Locale::Chinese),
            _ => Err(CronError::Config(format!("Unsupported locale '{}'", s))),
        }
    }
}

/// Unit of a day-of-month, hour or minute phrase
///
/// Weekday and month fields render through their own name-table phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Minute,
    Hour,
    Day,
}

const EN_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ZH_WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ZH_MONTHS: [&str; 12] = [
    "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二",
];

impl Locale {
    // ========================================================================
    // Name tables
    // ========================================================================

    /// Weekday name for `0..=6`, Sunday first
    pub fn weekday_name(self, day: u32) -> Option<&'static str> {
        let table = match self {
            Locale::English => &EN_WEEKDAYS,
            Locale::Chinese => &ZH_WEEKDAYS,
        };
        table.get(day as usize).copied()
    }

    /// Month name for `1..=12`
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let table = match self {
            Locale::English => &EN_MONTHS,
            Locale::Chinese => &ZH_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|index| table.get(index as usize))
            .copied()
    }

    pub(crate) fn macro_phrase(self, name: MacroName) -> &'static str {
        match (self, name) {
            (Locale::English, MacroName::Yearly) => "runs once a year",
            (Locale::English, MacroName::Monthly) => "runs once a month",
            (Locale::English, MacroName::Weekly) => "runs once a week",
            (Locale::English, MacroName::Daily) => "runs once a day",
            (Locale::English, MacroName::Hourly) => "runs once an hour",
            (Locale::English, MacroName::Reboot) => "runs at system restart",
            (Locale::Chinese, MacroName::Yearly) => "每年执行一次",
            (Locale::Chinese, MacroName::Monthly) => "每月执行一次",
            (Locale::Chinese, MacroName::Weekly) => "每周执行一次",
            (Locale::Chinese, MacroName::Daily) => "每天执行一次",
            (Locale::Chinese, MacroName::Hourly) => "每小时执行一次",
            (Locale::Chinese, MacroName::Reboot) => "系统重启时执行",
        }
    }

    // ========================================================================
    // Fast-path sentences
    // ========================================================================

    pub(crate) fn every_minute(self) -> &'static str {
        match self {
            Locale::English => "runs every minute",
            Locale::Chinese => "每分钟执行",
        }
    }

    pub(crate) fn every_n_hours(self, interval: u32) -> String {
        match self {
            Locale::English => format!("runs every {} {}", interval, plural("hour", interval)),
            Locale::Chinese => format!("每{}小时执行", interval),
        }
    }

    pub(crate) fn daily_at_hour(self, hour: &str) -> String {
        match self {
            Locale::English => format!("runs daily at hour {}", hour),
            Locale::Chinese => format!("每天{}点执行", hour),
        }
    }

    pub(crate) fn every_n_minutes(self, interval: u32) -> String {
        match self {
            Locale::English => format!("runs every {} {}", interval, plural("minute", interval)),
            Locale::Chinese => format!("每{}分钟执行", interval),
        }
    }

    pub(crate) fn minute_of_every_hour(self, minute: &str) -> String {
        match self {
            Locale::English => format!("runs at minute {} of every hour", minute),
            Locale::Chinese => format!("每小时的第{}分执行", minute),
        }
    }

    // ========================================================================
    // Composition building blocks
    // ========================================================================

    /// `every {interval} {unit}`
    pub(crate) fn step_phrase(self, unit: Unit, wildcard_derived: bool, interval: u32) -> String {
        match self {
            Locale::English => format!("every {} {}", interval, en_noun(unit, interval)),
            Locale::Chinese => format!("每{}{}", interval, zh_suffix(unit, wildcard_derived)),
        }
    }

    /// `{start}-{end} {unit}`
    pub(crate) fn range_phrase(
        self,
        unit: Unit,
        wildcard_derived: bool,
        start: &str,
        end: &str,
    ) -> String {
        match self {
            Locale::English => format!("{} {}-{}", en_prefix(unit, true), start, end),
            Locale::Chinese => format!("{}-{}{}", start, end, zh_suffix(unit, wildcard_derived)),
        }
    }

    /// Values with the unit interleaved, unit appended once
    pub(crate) fn list_phrase(self, unit: Unit, wildcard_derived: bool, values: &[String]) -> String {
        match self {
            Locale::English => format!("{} {}", en_prefix(unit, true), values.join(", ")),
            Locale::Chinese => {
                let suffix = zh_suffix(unit, wildcard_derived);
                format!("{}{}", values.join(&format!("{}、", suffix)), suffix)
            }
        }
    }

    /// `{n}{unit}`
    pub(crate) fn single_phrase(self, unit: Unit, wildcard_derived: bool, value: &str) -> String {
        match self {
            Locale::English => format!("{} {}", en_prefix(unit, false), value),
            Locale::Chinese => format!("{}{}", value, zh_suffix(unit, wildcard_derived)),
        }
    }

    pub(crate) fn weekday_single(self, name: &str) -> String {
        match self {
            Locale::English => format!("every {}", name),
            Locale::Chinese => format!("每周{}", name),
        }
    }

    pub(crate) fn weekday_list(self, names: &[String]) -> String {
        match self {
            Locale::English => format!("every {}", names.join(", ")),
            Locale::Chinese => format!("每周{}", names.join("、")),
        }
    }

    pub(crate) fn weekday_range(self, start: &str, end: &str) -> String {
        match self {
            Locale::English => format!("every {} through {}", start, end),
            Locale::Chinese => format!("每周{}至周{}", start, end),
        }
    }

    pub(crate) fn weekday_step(self, interval: u32) -> String {
        match self {
            Locale::English => format!(
                "every {} {} of the week",
                interval,
                en_noun(Unit::Day, interval)
            ),
            Locale::Chinese => format!("每周每{}天", interval),
        }
    }

    pub(crate) fn month_single(self, name: &str) -> String {
        match self {
            Locale::English => format!("in {}", name),
            Locale::Chinese => format!("{}月", name),
        }
    }

    pub(crate) fn month_list(self, names: &[String]) -> String {
        match self {
            Locale::English => format!("in {}", names.join(", ")),
            Locale::Chinese => format!("{}月", names.join("、")),
        }
    }

    pub(crate) fn month_range(self, start: &str, end: &str) -> String {
        match self {
            Locale::English => format!("from {} through {}", start, end),
            Locale::Chinese => format!("{}月至{}月", start, end),
        }
    }

    pub(crate) fn month_step(self, wildcard_derived: bool, interval: u32) -> String {
        match (self, wildcard_derived) {
            (Locale::English, _) => format!("every {} {}", interval, plural("month", interval)),
            (Locale::Chinese, true) => format!("每{}个月", interval),
            (Locale::Chinese, false) => format!("每{}月", interval),
        }
    }

    /// Fallback when general composition yields no fragment at all
    pub(crate) fn composed_fallback(self) -> &'static str {
        match self {
            Locale::English => "runs every minute",
            Locale::Chinese => "每分钟",
        }
    }

    /// Join non-empty fragments into a sentence
    pub(crate) fn join_fragments(self, fragments: &[String]) -> String {
        match self {
            Locale::English => format!("runs {}", fragments.join(", ")),
            Locale::Chinese => fragments.concat(),
        }
    }

    /// Collapse a doubled leading "every" left behind by concatenation
    pub(crate) fn dedup_every(self, text: &str) -> String {
        match self {
            Locale::English => text.replace("every every ", "every "),
            Locale::Chinese => text.replace("每每", "每"),
        }
    }

    // ========================================================================
    // Validation messages
    // ========================================================================

    pub(crate) fn empty_expression(self) -> &'static str {
        match self {
            Locale::English => "expression must not be empty",
            Locale::Chinese => "Cron 表达式不能为空",
        }
    }

    pub(crate) fn wrong_field_count(self) -> &'static str {
        match self {
            Locale::English => "expression must have exactly 5 fields",
            Locale::Chinese => "Cron 表达式必须包含5个字段",
        }
    }

    pub(crate) fn unrecognized_macro(self, token: &str) -> String {
        match self {
            Locale::English => format!("unrecognized macro: {}", token),
            Locale::Chinese => format!("无法识别的宏: {}", token),
        }
    }

    pub(crate) fn empty_command(self) -> &'static str {
        match self {
            Locale::English => "command must not be empty",
            Locale::Chinese => "命令不能为空",
        }
    }

    pub(crate) fn dangerous_command(self) -> &'static str {
        match self {
            Locale::English => "potentially dangerous command detected",
            Locale::Chinese => "检测到危险命令",
        }
    }
}

fn plural(noun: &str, count: u32) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

fn en_noun(unit: Unit, count: u32) -> String {
    let noun = match unit {
        Unit::Minute => "minute",
        Unit::Hour => "hour",
        Unit::Day => "day",
    };
    plural(noun, count)
}

fn en_prefix(unit: Unit, many: bool) -> &'static str {
    match (unit, many) {
        (Unit::Minute, false) => "at minute",
        (Unit::Minute, true) => "at minutes",
        (Unit::Hour, false) => "at hour",
        (Unit::Hour, true) => "at hours",
        (Unit::Day, false) => "on day",
        (Unit::Day, true) => "on days",
    }
}

fn zh_suffix(unit: Unit, wildcard_derived: bool) -> &'static str {
    match (unit, wildcard_derived) {
        (Unit::Minute, true) => "分钟",
        (Unit::Minute, false) => "分",
        (Unit::Hour, true) => "小时",
        (Unit::Hour, false) => "点",
        (Unit::Day, true) => "天",
        (Unit::Day, false) => "日",
    }
}
