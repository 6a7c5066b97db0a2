//! Structural validation
//!
//! Only the shape of an expression is checked: non-empty, and either a
//! known macro or exactly five fields separated by single spaces. Field
//! values are never range checked, so `0 25 * * *` passes here and is left
//! to the scheduler.
//!
//! The command check is a flat substring denylist. It has no notion of
//! quoting or tokens and yields both false positives and false negatives;
//! treat its verdict as advisory.

use crate::locale::Locale;
use crate::macros::{MacroName, MACRO_SIGIL};
use crate::types::{tokenize, FIELD_COUNT};
use serde::{Deserialize, Serialize};

/// Substrings that flag a command as dangerous
pub const DANGEROUS_PATTERNS: [&str; 4] = ["rm -rf", "mkfs", "> /", "dd"];

/// Pass/fail verdict with a display message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Empty when valid
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Validate an expression with English messages
///
/// ```
/// use a3s_cron_text::validate_expression;
///
/// assert!(validate_expression("0 9 * * 1-5").is_valid);
/// assert!(validate_expression("@daily").is_valid);
/// assert!(!validate_expression("0 9 * *").is_valid);
/// ```
pub fn validate_expression(raw: &str) -> ValidationResult {
    Validator::default().validate(raw)
}

/// Check a command against the denylist with English messages
pub fn validate_command(command: &str) -> ValidationResult {
    Validator::default().validate_command(command)
}

/// Locale-bound validator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    locale: Locale,
}

impl Validator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Validate an expression's structure
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ValidationResult::invalid(self.locale.empty_expression());
        }

        if trimmed.starts_with(MACRO_SIGIL) {
            return match MacroName::from_token(trimmed) {
                Some(_) => ValidationResult::valid(),
                None => ValidationResult::invalid(self.locale.unrecognized_macro(trimmed)),
            };
        }

        if tokenize(raw).len() != FIELD_COUNT {
            return ValidationResult::invalid(self.locale.wrong_field_count());
        }

        ValidationResult::valid()
    }

    /// Flag empty commands and commands containing a denylisted substring
    pub fn validate_command(&self, command: &str) -> ValidationResult {
        if command.trim().is_empty() {
            return ValidationResult::invalid(self.locale.empty_command());
        }

        if let Some(pattern) = DANGEROUS_PATTERNS.into_iter().find(|p| command.contains(p)) {
            tracing::warn!(pattern, "Command matched dangerous pattern");
            return ValidationResult::invalid(self.locale.dangerous_command());
        }

        ValidationResult::valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_expressions() {
        for raw in ["* * * * *", "0 9 * * 1-5", "*/15 * * * *", "0 0 1 1 *"] {
            assert_eq!(validate_expression(raw), ValidationResult::valid(), "{raw}");
        }
    }

    #[test]
    fn test_empty_expression() {
        for raw in ["", "   ", "\t\n"] {
            let result = validate_expression(raw);
            assert!(!result.is_valid);
            assert_eq!(result.message, "expression must not be empty");
        }
    }

    #[test]
    fn test_wrong_field_count() {
        for raw in ["*", "* * * *", "* * * * * *", "0 0 * * * 2026"] {
            let result = validate_expression(raw);
            assert!(!result.is_valid, "{raw}");
            assert_eq!(result.message, "expression must have exactly 5 fields");
        }
    }

    #[test]
    fn test_fields_split_on_single_spaces() {
        for raw in ["0  9 * * *", " * * * * *", "* * * * * ", "0\t9 * * *", "0 9 *\t* *"] {
            let result = validate_expression(raw);
            assert!(!result.is_valid, "{raw:?}");
            assert_eq!(result.message, "expression must have exactly 5 fields");
        }
        // A doubled space counts as an empty field
        assert!(validate_expression("0  * * *").is_valid);
    }

    #[test]
    fn test_values_are_not_range_checked() {
        assert!(validate_expression("99 25 32 13 7").is_valid);
        assert!(validate_expression("30-10 a b c d").is_valid);
    }

    #[test]
    fn test_macros_bypass_field_count() {
        for name in MacroName::ALL {
            assert!(validate_expression(&name.to_string()).is_valid, "{name}");
        }
        let result = validate_expression("@fortnightly");
        assert!(!result.is_valid);
        assert_eq!(result.message, "unrecognized macro: @fortnightly");
    }

    #[test]
    fn test_chinese_messages() {
        let validator = Validator::new(Locale::Chinese);
        assert_eq!(validator.validate("").message, "Cron 表达式不能为空");
        assert_eq!(validator.validate("* *").message, "Cron 表达式必须包含5个字段");
        assert_eq!(validator.validate_command(" ").message, "命令不能为空");
        assert_eq!(validator.validate_command("rm -rf /").message, "检测到危险命令");
    }

    #[test]
    fn test_command_validation() {
        assert!(validate_command("backup.sh --full").is_valid);
        assert_eq!(
            validate_command("").message,
            "command must not be empty"
        );
        for command in ["rm -rf /tmp/x", "mkfs.ext4 /dev/sda1", "echo hi > /etc/passwd", "dd if=/dev/zero"] {
            let result = validate_command(command);
            assert!(!result.is_valid, "{command}");
            assert_eq!(result.message, "potentially dangerous command detected");
        }
    }

    #[test]
    fn test_command_denylist_is_substring_based() {
        // "dd" inside an unrelated word still trips the check
        assert!(!validate_command("git add .").is_valid);
        // spacing variants slip through
        assert!(validate_command("rm  -rf /").is_valid);
    }

    #[test]
    fn test_validation_result_serializes_camel_case() {
        let json = serde_json::to_value(ValidationResult::invalid("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"isValid": false, "message": "nope"}));
    }
}
