//! Named whole-expression shorthands (`@daily`, `@reboot`, ...)

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix that marks a macro token
pub const MACRO_SIGIL: char = '@';

/// The closed set of recognized macros
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroName {
    Yearly,
    Monthly,
    Weekly,
    Daily,
    Hourly,
    Reboot,
}

impl MacroName {
    /// Every recognized macro
    pub const ALL: [MacroName; 6] = [
        MacroName::Yearly,
        MacroName::Monthly,
        MacroName::Weekly,
        MacroName::Daily,
        MacroName::Hourly,
        MacroName::Reboot,
    ];

    /// Look up a sigil-prefixed token; matching is exact and case-sensitive
    pub fn from_token(token: &str) -> Option<Self> {
        let name = token.strip_prefix(MACRO_SIGIL)?;
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Name without the sigil
    pub fn as_str(self) -> &'static str {
        match self {
            MacroName::Yearly => "yearly",
            MacroName::Monthly => "monthly",
            MacroName::Weekly => "weekly",
            MacroName::Daily => "daily",
            MacroName::Hourly => "hourly",
            MacroName::Reboot => "reboot",
        }
    }
}

impl fmt::Display for MacroName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", MACRO_SIGIL, self.as_str())
    }
}

/// Describe a macro expression in English
///
/// Returns `None` unless `raw` starts with `@`. Tokens outside the known
/// set resolve to `raw` itself.
///
/// ```
/// use a3s_cron_text::resolve_macro;
///
/// assert_eq!(resolve_macro("@daily").as_deref(), Some("runs once a day"));
/// assert_eq!(resolve_macro("@often").as_deref(), Some("@often"));
/// assert_eq!(resolve_macro("0 0 * * *"), None);
/// ```
pub fn resolve_macro(raw: &str) -> Option<String> {
    resolve_macro_in(raw, Locale::English)
}

/// Describe a macro expression in the given locale
pub fn resolve_macro_in(raw: &str, locale: Locale) -> Option<String> {
    let token = raw.trim();
    if !token.starts_with(MACRO_SIGIL) {
        return None;
    }

    match MacroName::from_token(token) {
        Some(name) => Some(locale.macro_phrase(name).to_string()),
        None => {
            tracing::debug!(token, "Unrecognized cron macro, echoing input");
            Some(raw.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_table_english() {
        let expected = [
            ("@yearly", "runs once a year"),
            ("@monthly", "runs once a month"),
            ("@weekly", "runs once a week"),
            ("@daily", "runs once a day"),
            ("@hourly", "runs once an hour"),
            ("@reboot", "runs at system restart"),
        ];
        for (raw, phrase) in expected {
            assert_eq!(resolve_macro(raw).as_deref(), Some(phrase), "{raw}");
        }
    }

    #[test]
    fn test_macro_table_chinese() {
        assert_eq!(
            resolve_macro_in("@yearly", Locale::Chinese).as_deref(),
            Some("每年执行一次")
        );
        assert_eq!(
            resolve_macro_in("@reboot", Locale::Chinese).as_deref(),
            Some("系统重启时执行")
        );
    }

    #[test]
    fn test_unknown_macro_echoes_input() {
        assert_eq!(resolve_macro("@annually").as_deref(), Some("@annually"));
        assert_eq!(resolve_macro("@DAILY").as_deref(), Some("@DAILY"));
        assert_eq!(resolve_macro("@").as_deref(), Some("@"));
    }

    #[test]
    fn test_non_macro_is_ignored() {
        assert_eq!(resolve_macro("* * * * *"), None);
        assert_eq!(resolve_macro("daily"), None);
        assert_eq!(resolve_macro(""), None);
    }

    #[test]
    fn test_from_token_roundtrip() {
        for name in MacroName::ALL {
            assert_eq!(MacroName::from_token(&name.to_string()), Some(name));
        }
        assert_eq!(MacroName::from_token("daily"), None);
    }
}
