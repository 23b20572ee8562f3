//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Everything lives in one app directory:
//!
//! ```text
//! $COUNTDOWN_CONFIG_DIR  or  <platform config dir>/countdown/
//! ├── config.toml     // generated, fully commented out, on first run
//! ├── events.json     // the persisted events
//! └── countdown.log
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CountdownConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub events_file: Option<String>,
    pub abort_on_save_error: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub title: Option<String>,
    pub detail_title: Option<String>,
    pub item_title: Option<String>,
    pub item_desc: Option<String>,
    pub dimmed_title: Option<String>,
    pub dimmed_desc: Option<String>,
    pub error: Option<String>,
    pub text: Option<String>,
    pub prompt_border: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const APP_DIR_ENV: &str = "COUNTDOWN_CONFIG_DIR";
pub const EVENTS_FILE_ENV: &str = "COUNTDOWN_EVENTS_FILE";
pub const LOG_LEVEL_ENV: &str = "COUNTDOWN_LOG_LEVEL";

pub const APP_DIR_NAME: &str = "countdown";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_EVENTS_FILE: &str = "events.json";
pub const LOG_FILE_NAME: &str = "countdown.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub app_dir: PathBuf,
    pub events_path: PathBuf,
    pub log_path: PathBuf,
    pub abort_on_save_error: bool,
    pub log_level: LevelFilter,
    pub theme: ThemeColors,
}

/// Theme colors as `#RRGGBB` strings, parsed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub title: String,
    pub detail_title: String,
    pub item_title: String,
    pub item_desc: String,
    pub dimmed_title: String,
    pub dimmed_desc: String,
    pub error: String,
    pub text: String,
    pub prompt_border: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            title: "#2389D3".into(),
            detail_title: "#D32389".into(),
            item_title: "#F5EB6D".into(),
            item_desc: "#9E9742".into(),
            dimmed_title: "#DDDDDD".into(),
            dimmed_desc: "#999999".into(),
            error: "#CF002E".into(),
            text: "#FFFDF5".into(),
            prompt_border: "#D32389".into(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not determine a config directory; set {APP_DIR_ENV}")]
    NoAppDir,
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the app directory, honoring `COUNTDOWN_CONFIG_DIR`.
pub fn app_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(APP_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoAppDir)
}

/// Load `config.toml` from `app_dir`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CountdownConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(app_dir: &Path) -> Result<CountdownConfig, ConfigError> {
    let path = app_dir.join(CONFIG_FILE_NAME);

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CountdownConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config: CountdownConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Countdown Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# events_file = "events.json"        # Relative to this directory, or absolute
# abort_on_save_error = true         # false: keep running, show the error in the status bar
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"

# [theme]
# title = "#2389D3"
# detail_title = "#D32389"
# item_title = "#F5EB6D"
# item_desc = "#9E9742"
# dimmed_title = "#DDDDDD"
# dimmed_desc = "#999999"
# error = "#CF002E"
# text = "#FFFDF5"
# prompt_border = "#D32389"
"##;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Where the log file lives. Known before the config file is read.
pub fn log_path(app_dir: &Path) -> PathBuf {
    app_dir.join(LOG_FILE_NAME)
}

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &CountdownConfig, app_dir: &Path) -> ResolvedConfig {
    resolve_with(config, app_dir, |key| std::env::var(key).ok())
}

/// `resolve` with an explicit environment lookup.
pub fn resolve_with(
    config: &CountdownConfig,
    app_dir: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Events file: env → config → default, relative paths land in the app dir
    let events_file = env(EVENTS_FILE_ENV)
        .filter(|f| !f.is_empty())
        .or_else(|| config.general.events_file.clone())
        .unwrap_or_else(|| DEFAULT_EVENTS_FILE.to_string());
    let events_path = app_dir.join(events_file);

    // Log level: env → config → default
    let log_level = env(LOG_LEVEL_ENV)
        .or_else(|| config.general.log_level.clone())
        .map(|level| parse_log_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        app_dir: app_dir.to_path_buf(),
        events_path,
        log_path: log_path(app_dir),
        abort_on_save_error: config.general.abort_on_save_error.unwrap_or(true),
        log_level,
        theme: resolve_theme(&config.theme),
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        warn!("Unknown log level \"{level}\", using {DEFAULT_LOG_LEVEL}");
        DEFAULT_LOG_LEVEL
    })
}

fn resolve_theme(theme: &ThemeConfig) -> ThemeColors {
    let defaults = ThemeColors::default();
    let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);
    ThemeColors {
        title: pick(&theme.title, defaults.title),
        detail_title: pick(&theme.detail_title, defaults.detail_title),
        item_title: pick(&theme.item_title, defaults.item_title),
        item_desc: pick(&theme.item_desc, defaults.item_desc),
        dimmed_title: pick(&theme.dimmed_title, defaults.dimmed_title),
        dimmed_desc: pick(&theme.dimmed_desc, defaults.dimmed_desc),
        error: pick(&theme.error, defaults.error),
        text: pick(&theme.text, defaults.text),
        prompt_border: pick(&theme.prompt_border, defaults.prompt_border),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = CountdownConfig::default();
        assert!(config.general.events_file.is_none());
        assert!(config.theme.title.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let dir = Path::new("/tmp/countdown-test");
        let resolved = resolve_with(&CountdownConfig::default(), dir, no_env);
        assert_eq!(resolved.events_path, dir.join("events.json"));
        assert_eq!(resolved.log_path, dir.join("countdown.log"));
        assert!(resolved.abort_on_save_error);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.theme, ThemeColors::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CountdownConfig {
            general: GeneralConfig {
                events_file: Some("mine.json".to_string()),
                abort_on_save_error: Some(false),
                log_level: Some("debug".to_string()),
            },
            theme: ThemeConfig {
                error: Some("#FF0000".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve_with(&config, Path::new("/app"), no_env);
        assert_eq!(resolved.events_path, PathBuf::from("/app/mine.json"));
        assert!(!resolved.abort_on_save_error);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.theme.error, "#FF0000");
        assert_eq!(resolved.theme.title, "#2389D3");
    }

    #[test]
    fn test_absolute_events_file_is_kept() {
        let config = CountdownConfig {
            general: GeneralConfig {
                events_file: Some("/data/events.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with(&config, Path::new("/app"), no_env);
        assert_eq!(resolved.events_path, PathBuf::from("/data/events.json"));
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = CountdownConfig {
            general: GeneralConfig {
                events_file: Some("config.json".to_string()),
                log_level: Some("debug".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            EVENTS_FILE_ENV => Some("env.json".to_string()),
            LOG_LEVEL_ENV => Some("warn".to_string()),
            _ => None,
        };
        let resolved = resolve_with(&config, Path::new("/app"), env);
        assert_eq!(resolved.events_path, PathBuf::from("/app/env.json"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let env = |key: &str| (key == LOG_LEVEL_ENV).then(|| "chatty".to_string());
        let resolved = resolve_with(&CountdownConfig::default(), Path::new("/app"), env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r##"
[theme]
title = "#000000"
"##;
        let config: CountdownConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme.title.as_deref(), Some("#000000"));
        assert!(config.theme.error.is_none());
        assert!(config.general.abort_on_save_error.is_none());
    }

    #[test]
    fn test_load_config_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.general.events_file.is_none());

        let path = dir.path().join(CONFIG_FILE_NAME);
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.contains("# abort_on_save_error = true"));
        // Everything is commented out, so it parses back to the defaults.
        let reparsed = load_config(dir.path()).unwrap();
        assert!(reparsed.general.log_level.is_none());
    }

    #[test]
    fn test_load_config_malformed_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[general\nlog_level = ").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
