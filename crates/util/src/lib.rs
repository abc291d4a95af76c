//! Shared helpers for the Navdeck CLI/TUI.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

pub mod preferences;

pub use preferences::{PreferencesError, UserPreferences};

static REDACTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(authorization: )([\w\-\.=:/+]+)",
        r"(?i)([A-Z0-9_]*?(KEY|TOKEN|SECRET|PASSWORD)=)([^\s]+)",
        r"(?i)(client_secret=)([^\s&]+)",
    ]
    .iter()
    .map(|pat| Regex::new(pat).expect("static redaction pattern"))
    .collect()
});

/// Redacts values that look like secrets in a string.
///
/// Used before credentials or environment assignments reach logs or debug
/// output.
pub fn redact_sensitive(input: &str) -> String {
    let mut redacted = input.to_string();
    for re in REDACTION_PATTERNS.iter() {
        redacted = re
            .replace_all(&redacted, |caps: &regex::Captures| {
                let prefix = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                format!("{}<redacted>", prefix)
            })
            .to_string();
    }
    redacted
}

/// Parses a bool-ish environment variable value.
///
/// Empty, `0`, and `false` (any case) are false; everything else is true.
pub fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs_next::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_env_style_assignments() {
        let out = redact_sensitive("GOOGLE_CLIENT_SECRET=abc123 plain=ok");
        assert!(out.contains("GOOGLE_CLIENT_SECRET=<redacted>"));
        assert!(out.contains("plain=ok"));
    }

    #[test]
    fn redacts_authorization_headers() {
        let out = redact_sensitive("authorization: Bearer.token.value");
        assert_eq!(out, "authorization: <redacted>");
    }

    #[test]
    fn env_flag_treats_zero_and_false_as_off() {
        temp_env::with_var("NAVDECK_TEST_FLAG", Some("0"), || {
            assert!(!env_flag("NAVDECK_TEST_FLAG"));
        });
        temp_env::with_var("NAVDECK_TEST_FLAG", Some("False"), || {
            assert!(!env_flag("NAVDECK_TEST_FLAG"));
        });
        temp_env::with_var("NAVDECK_TEST_FLAG", Some("1"), || {
            assert!(env_flag("NAVDECK_TEST_FLAG"));
        });
        temp_env::with_var("NAVDECK_TEST_FLAG", None::<&str>, || {
            assert!(!env_flag("NAVDECK_TEST_FLAG"));
        });
    }
}
