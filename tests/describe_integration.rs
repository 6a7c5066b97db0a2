//! Description and validation integration tests
//!
//! Exercises the public pipeline end to end: validation gate, macro
//! lookup, fast-path shapes and general composition in both locales.

use a3s_cron_text::{
    describe, validate_expression, CronExpression, CronTextConfig, Describer, Locale,
};

fn zh(raw: &str) -> String {
    Describer::new(Locale::Chinese).describe(raw)
}

// ─── Reference Scenarios ─────────────────────────────────────────

#[test]
fn test_every_minute() {
    assert_eq!(describe("* * * * *"), "runs every minute");
}

#[test]
fn test_on_the_hour() {
    let description = describe("0 * * * *");
    assert!(description.contains("every hour"), "{description}");
}

#[test]
fn test_every_fifteen_minutes() {
    assert_eq!(describe("*/15 * * * *"), "runs every 15 minutes");
}

#[test]
fn test_weekdays_at_nine() {
    let description = describe("0 9 * * 1-5");
    assert!(description.contains("Monday through Friday"), "{description}");
    assert!(description.contains("hour 9"), "{description}");
    assert!(!description.contains("on day"), "{description}");
}

#[test]
fn test_daily_macro() {
    assert_eq!(describe("@daily"), "runs once a day");
    let result = validate_expression("@daily");
    assert!(result.is_valid);
    assert!(result.message.is_empty());
}

#[test]
fn test_empty_input() {
    let result = validate_expression("");
    assert!(!result.is_valid);
    assert!(!result.message.is_empty());
    assert_eq!(describe(""), "");
}

// ─── Properties ──────────────────────────────────────────────────

const TOKENS: [&str; 12] = [
    "*", "0", "5", "*/5", "1-5", "1,3,5", "0-30/10", "7/2", "MON", "L", "99", "?",
];

#[test]
fn test_any_five_tokens_describe_non_empty() {
    for (i, a) in TOKENS.iter().enumerate() {
        for b in TOKENS.iter() {
            let c = TOKENS[(i + 3) % TOKENS.len()];
            let d = TOKENS[(i + 7) % TOKENS.len()];
            let raw = format!("{} {} {} {} {}", a, b, c, d, b);
            assert!(!describe(&raw).is_empty(), "{raw}");
            assert!(!zh(&raw).is_empty(), "{raw}");
        }
    }
}

#[test]
fn test_wrong_token_count_is_invalid() {
    for count in [1usize, 2, 3, 4, 6, 7] {
        let raw = vec!["*"; count].join(" ");
        assert!(!validate_expression(&raw).is_valid, "{raw}");
    }
}

#[test]
fn test_weekday_precedence() {
    for raw in ["0 0 15 * 1", "* * 15 * 1", "*/5 3 15 * 1", "0 0 1-10 * 1,2"] {
        let description = describe(raw);
        assert!(description.contains("every Monday"), "{raw} -> {description}");
        assert!(!description.contains("day 15"), "{raw} -> {description}");
        assert!(!description.contains("days 1-10"), "{raw} -> {description}");
    }
}

#[test]
fn test_fast_paths_take_precedence_over_composition() {
    assert_eq!(describe("0 */3 * * *"), "runs every 3 hours");
    assert_eq!(describe("* 14 * * *"), "runs daily at hour 14");
    assert_eq!(describe("45 * * * *"), "runs at minute 45 of every hour");
}

#[test]
fn test_parse_matches_validation() {
    for raw in [
        "* * * * *",
        "0 9 * * 1-5",
        "@weekly",
        "* * *",
        "",
        "@nope",
        "0  9 * * *",
        " * * * * *",
        "0\t9 * * *",
    ] {
        let parsed_fields = matches!(CronExpression::parse(raw), Ok(CronExpression::Fields(_)));
        let parsed_macro = matches!(CronExpression::parse(raw), Ok(CronExpression::Macro(_)));
        assert_eq!(
            validate_expression(raw).is_valid,
            parsed_fields || parsed_macro,
            "{raw}"
        );
    }
}

// ─── Chinese Locale ──────────────────────────────────────────────

#[test]
fn test_chinese_fast_paths() {
    assert_eq!(zh("* * * * *"), "每分钟执行");
    assert_eq!(zh("0 */2 * * *"), "每2小时执行");
    assert_eq!(zh("0 8 * * *"), "每天8点执行");
    assert_eq!(zh("*/30 * * * *"), "每30分钟执行");
    assert_eq!(zh("15 * * * *"), "每小时的第15分执行");
}

#[test]
fn test_chinese_composition() {
    assert_eq!(zh("0 9 * * 1-5"), "每周一至周五9点0分");
    assert_eq!(zh("30 2 1 * *"), "1日2点30分");
    assert_eq!(zh("0 0 1 1 *"), "一月1日0点0分");
    assert_eq!(zh("0 10 * * 0,6"), "每周日、六10点0分");
}

#[test]
fn test_chinese_macros() {
    assert_eq!(zh("@weekly"), "每周执行一次");
    assert_eq!(zh("@custom"), "@custom");
}

// ─── Configuration ───────────────────────────────────────────────

#[test]
fn test_describer_from_config() {
    let config = CronTextConfig::from_toml_str(r#"locale = "zh""#).unwrap();
    let describer = Describer::from_config(&config);
    assert_eq!(describer.describe("@daily"), "每天执行一次");
}
