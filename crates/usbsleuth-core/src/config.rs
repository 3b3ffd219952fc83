/// `config.toml` loading and startup validation.
///
/// Precedence is CLI flag > config file > named constant. This module only
/// covers the config-file layer; the binary applies CLI overrides on top of
/// the returned [`AppConfig`].
///
/// Uses the `directories` crate to locate the per-user config directory
/// (`%APPDATA%\UsbSleuth\config\` on Windows).
use crate::constants;
use crate::{Result, UsbSleuthError};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still loads.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[monitor]` section.
    pub monitor: MonitorSection,
    /// `[log]` section.
    pub log: LogSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[monitor]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct MonitorSection {
    /// Delay between volume polls, in seconds.
    pub poll_interval_secs: Option<u64>,
}

/// `[log]` config section (the activity log, not diagnostics).
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Activity log destination.
    pub path: Option<String>,
}

/// `[logging]` config section (diagnostic output on stderr).
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// "error", "warn", "info", "debug" or "trace".
    pub level: Option<String>,
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Activity log destination.
    pub log_path: PathBuf,
    /// Delay between volume polls.
    pub poll_interval: Duration,
    /// Diagnostic filter level from the config file, if any.
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(constants::DEFAULT_LOG_FILE),
            poll_interval: Duration::from_secs(constants::DEFAULT_POLL_INTERVAL_SECS),
            log_level: None,
        }
    }
}

/// Default location of `config.toml`, if the platform config dir resolves.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", constants::APP_ID)
        .map(|dirs| dirs.config_dir().join(constants::CONFIG_FILE_NAME))
}

/// Poll interval for `secs`, or `None` if outside the accepted range.
pub fn validate_poll_interval(secs: u64) -> Option<Duration> {
    (constants::MIN_POLL_INTERVAL_SECS..=constants::MAX_POLL_INTERVAL_SECS)
        .contains(&secs)
        .then(|| Duration::from_secs(secs))
}

/// Load `config.toml` from `path`.
///
/// A missing file yields defaults. When `explicit` is set (the user named the
/// file on the command line) a missing, unreadable or unparseable file is an
/// error; otherwise those cases fall back to defaults with a warning.
/// Out-of-range values always produce a warning and keep the default.
pub fn load_config(path: &Path, explicit: bool) -> Result<(AppConfig, Vec<String>)> {
    let config_err = |reason: String| UsbSleuthError::Config {
        path: path.to_path_buf(),
        reason,
    };

    if !path.exists() {
        if explicit {
            return Err(config_err("file does not exist".to_owned()));
        }
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return Ok((AppConfig::default(), Vec::new()));
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if explicit => return Err(config_err(e.to_string())),
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                path.display()
            );
            return Ok((AppConfig::default(), vec![msg]));
        }
    };

    match parse_config(&content) {
        Ok(parsed) => {
            tracing::info!(path = %path.display(), "Loaded config.toml");
            Ok(parsed)
        }
        Err(e) if explicit => Err(config_err(e.to_string())),
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                path.display()
            );
            Ok((AppConfig::default(), vec![msg]))
        }
    }
}

/// Parse and validate config.toml text.
pub fn parse_config(content: &str) -> std::result::Result<(AppConfig, Vec<String>), toml::de::Error> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Monitor: poll_interval_secs --
    if let Some(secs) = raw.monitor.poll_interval_secs {
        match validate_poll_interval(secs) {
            Some(interval) => config.poll_interval = interval,
            None => warnings.push(format!(
                "[monitor] poll_interval_secs = {secs} is out of range ({}-{}). Using default ({}).",
                constants::MIN_POLL_INTERVAL_SECS,
                constants::MAX_POLL_INTERVAL_SECS,
                constants::DEFAULT_POLL_INTERVAL_SECS,
            )),
        }
    }

    // -- Log: path --
    if let Some(ref path) = raw.log.path {
        if path.trim().is_empty() {
            warnings.push(format!(
                "[log] path is empty. Using default ({}).",
                constants::DEFAULT_LOG_FILE
            ));
        } else {
            config.log_path = PathBuf::from(path);
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL
            ));
        }
    }

    Ok((config, warnings))
}
