use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::parsing::{parse_bool, split_key_value};
use crate::config::paths::resolve_settings_config_path;

/// Default backend address (the trivia API's development server).
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Skeleton written on first run when no settings file exists.
pub const SETTINGS_SKELETON_CONTENT: &str = "# trivia-browser settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# Base URL of the trivia API (no trailing slash needed)\n\
api_base_url = http://127.0.0.1:5000\n\
#\n\
# Per-request timeout in seconds\n\
request_timeout_secs = 10\n\
#\n\
# Ask for confirmation before deleting a question\n\
confirm_delete = true\n\
#\n\
# Reveal every answer in the question list\n\
show_answers = false\n";

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL the endpoint paths are appended to.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Ask before deleting.
    pub confirm_delete: bool,
    /// Reveal all answers by default.
    pub show_answers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            confirm_delete: true,
            show_answers: false,
        }
    }
}

/// What: Parse settings from `settings.conf` content into `settings`.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Values to overwrite; keys absent from `content` keep their current value.
///
/// Details:
/// - Unknown keys are ignored; malformed values are logged and skipped.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "api_base_url" | "base_url" | "api_url" => {
                let trimmed = val.trim_end_matches('/');
                if trimmed.is_empty() {
                    warn!(key = %key, "empty api base url ignored");
                } else {
                    settings.api_base_url = trimmed.to_string();
                }
            }
            "request_timeout_secs" | "timeout_secs" | "timeout" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.request_timeout_secs = v,
                _ => warn!(key = %key, value = %val, "invalid timeout ignored"),
            },
            "confirm_delete" => {
                if let Some(b) = parse_bool(val) {
                    settings.confirm_delete = b;
                }
            }
            "show_answers" | "reveal_answers" => {
                if let Some(b) = parse_bool(val) {
                    settings.show_answers = b;
                }
            }
            _ => debug!(key = %key, "unknown settings key"),
        }
    }
}

/// What: Load settings from a specific file.
///
/// Output:
/// - Parsed settings, or defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// What: Load user settings from HOME/XDG, writing a skeleton on first run.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or unreadable.
#[must_use]
pub fn settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        return load_settings_from(&path);
    }
    let target = crate::config::config_dir().join("settings.conf");
    if !target.exists() {
        match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => tracing::info!(path = %target.display(), "wrote default settings skeleton"),
            Err(e) => warn!(path = %target.display(), error = %e, "could not write settings skeleton"),
        }
    }
    Settings::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every recognized key overrides its default.
    ///
    /// Inputs:
    /// - Content setting all four keys, with comments and a trailing slash on the URL.
    ///
    /// Output:
    /// - Parsed values replace defaults; trailing slash trimmed.
    fn parse_settings_overrides_defaults() {
        let mut s = Settings::default();
        parse_settings(
            "# header\n\
             api_base_url = http://trivia.local:8080/ # prod\n\
             request_timeout_secs = 3\n\
             confirm_delete = no\n\
             show_answers = yes\n",
            &mut s,
        );
        assert_eq!(s.api_base_url, "http://trivia.local:8080");
        assert_eq!(s.request_timeout_secs, 3);
        assert!(!s.confirm_delete);
        assert!(s.show_answers);
    }

    #[test]
    /// What: Malformed and unknown entries leave defaults intact.
    fn parse_settings_ignores_bad_values() {
        let mut s = Settings::default();
        parse_settings(
            "request_timeout_secs = soon\nrequest_timeout_secs = 0\nconfirm_delete = perhaps\ncolour = red\napi_base_url =\n",
            &mut s,
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Loading from a file reads its content; a missing file yields defaults.
    ///
    /// Details:
    /// - Uses a temporary directory so no user config is touched.
    fn load_settings_from_file_and_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "timeout = 7\n").expect("write settings");
        assert_eq!(load_settings_from(&path).request_timeout_secs, 7);
        assert_eq!(
            load_settings_from(&dir.path().join("absent.conf")),
            Settings::default()
        );
    }

    #[test]
    /// What: The first-run skeleton parses back to the defaults.
    fn skeleton_matches_defaults() {
        let mut s = Settings::default();
        s.request_timeout_secs = 99;
        parse_settings(SETTINGS_SKELETON_CONTENT, &mut s);
        assert_eq!(s, Settings::default());
    }
}
