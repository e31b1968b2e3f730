// SPDX-License-Identifier: MPL-2.0
//! Read-only application configuration from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[server]` - API base URL, sign-in path, session cookie, refresh interval
//! - `[toast]` - Delivered-toast lifecycle durations
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_BELL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The file is never written; a missing or unusable file yields defaults.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::ToastTiming;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key shown when the config file exists but cannot be used.
pub const LOAD_WARNING_KEY: &str = "toast-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ko").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Where the notification API lives.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sign-in page shown when the session is missing.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Raw `Cookie` header value, e.g. `SESSION=abc`.
    #[serde(default)]
    pub session_cookie: Option<String>,

    /// Periodic unread-count refetch; absent or 0 disables it.
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            session_cookie: None,
            refresh_interval_secs: None,
        }
    }
}

impl ServerConfig {
    /// Effective refresh interval, clamped to the accepted range.
    #[must_use]
    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.refresh_interval_secs {
            None | Some(0) => None,
            Some(secs) => Some(Duration::from_secs(
                secs.clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS),
            )),
        }
    }
}

/// Delivered-toast lifecycle, all measured from creation.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct ToastConfig {
    #[serde(default = "default_enter_delay_ms")]
    pub enter_delay_ms: u64,
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: DEFAULT_TOAST_ENTER_DELAY_MS,
            display_ms: DEFAULT_TOAST_DISPLAY_MS,
            exit_ms: DEFAULT_TOAST_EXIT_MS,
        }
    }
}

impl ToastConfig {
    #[must_use]
    pub fn timing(&self) -> ToastTiming {
        let ms = |value: u64| Duration::from_millis(value.min(MAX_TOAST_DURATION_MS));
        ToastTiming {
            enter_delay: ms(self.enter_delay_ms),
            display: Some(ms(self.display_ms)),
            exit: ms(self.exit_ms),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub toast: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

fn default_enter_delay_ms() -> u64 {
    DEFAULT_TOAST_ENTER_DELAY_MS
}

fn default_display_ms() -> u64 {
    DEFAULT_TOAST_DISPLAY_MS
}

fn default_exit_ms() -> u64 {
    DEFAULT_TOAST_EXIT_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring unusable config file");
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    const SAMPLE_TOML: &str = r#"
[general]
language = "ko"
theme_mode = "dark"

[server]
base_url = "https://example.com/app"
login_path = "/signin"
session_cookie = "SESSION=abc"
refresh_interval_secs = 60

[toast]
enter_delay_ms = 0
display_ms = 8000
exit_ms = 500
"#;

    fn sample() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("ko".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            server: ServerConfig {
                base_url: "https://example.com/app".to_string(),
                login_path: "/signin".to_string(),
                session_cookie: Some("SESSION=abc".to_string()),
                refresh_interval_secs: Some(60),
            },
            toast: ToastConfig {
                enter_delay_ms: 0,
                display_ms: 8000,
                exit_ms: 500,
            },
        }
    }

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, SAMPLE_TOML).expect("write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, sample());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.login_path, DEFAULT_LOGIN_PATH);
        assert_eq!(config.server.refresh_interval(), None);
        assert_eq!(config.toast.timing(), ToastTiming::default());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            session_cookie = "SESSION=xyz"

            [toast]
            display_ms = 7000
            "#,
        )
        .expect("parse");
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.session_cookie.as_deref(), Some("SESSION=xyz"));
        assert_eq!(config.toast.display_ms, 7000);
        assert_eq!(config.toast.exit_ms, DEFAULT_TOAST_EXIT_MS);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"LIGHT\"").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert!(toml::from_str::<Config>("[general]\ntheme_mode = \"neon\"").is_err());
    }

    #[test]
    fn refresh_interval_zero_disables_and_values_are_clamped() {
        let mut server = ServerConfig::default();
        server.refresh_interval_secs = Some(0);
        assert_eq!(server.refresh_interval(), None);
        server.refresh_interval_secs = Some(1);
        assert_eq!(
            server.refresh_interval(),
            Some(Duration::from_secs(MIN_REFRESH_INTERVAL_SECS))
        );
        server.refresh_interval_secs = Some(90);
        assert_eq!(server.refresh_interval(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn toast_durations_are_capped() {
        let toast = ToastConfig {
            enter_delay_ms: 100,
            display_ms: u64::MAX,
            exit_ms: 300,
        };
        assert_eq!(
            toast.timing().display,
            Some(Duration::from_millis(MAX_TOAST_DURATION_MS))
        );
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), SAMPLE_TOML).expect("write file");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, sample());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));
        assert_eq!(config, Config::default());
    }
}
