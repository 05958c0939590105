use std::{num::ParseIntError, path::PathBuf, str::FromStr, time::Duration};

use gmail_sender_lettre::RelayConfig;
use log::LevelFilter;
use thiserror::Error;

pub const SMTP_HOST_VAR: &str = "GMAIL_SMTP_HOST";
pub const SMTP_PORT_VAR: &str = "GMAIL_SMTP_PORT";
pub const SMTP_TIMEOUT_VAR: &str = "GMAIL_SMTP_TIMEOUT_SECS";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const LOG_FILE_PATH_VAR: &str = "LOG_FILE_PATH";
pub const LOG_ARCHIVE_PATTERN_VAR: &str = "LOG_ARCHIVE_PATTERN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("{var} must be a whole number of seconds, got {value:?}: {source}")]
    InvalidTimeout {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
    #[error("{var} must be one of off, error, warn, info, debug, trace; got {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Threshold for the stderr appender. Off unless asked for, since callers
    /// commonly merge stderr into the JSON they parse.
    pub stderr_level: LevelFilter,
    pub file_path: Option<PathBuf>,
    pub archive_pattern: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            stderr_level: LevelFilter::Off,
            file_path: None,
            archive_pattern: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub relay: RelayConfig,
    pub log: LogConfig,
}

impl Config {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Config::default();

        if let Some(host) = var(SMTP_HOST_VAR) {
            config.relay.host = host.trim().to_string();
        }
        if let Some(value) = var(SMTP_PORT_VAR) {
            config.relay.port = value.trim().parse::<u16>().map_err(|source| ConfigError::InvalidPort {
                var: SMTP_PORT_VAR,
                value: value.clone(),
                source,
            })?;
        }
        if let Some(value) = var(SMTP_TIMEOUT_VAR) {
            let secs: u64 = value.trim().parse().map_err(|source| ConfigError::InvalidTimeout {
                var: SMTP_TIMEOUT_VAR,
                value: value.clone(),
                source,
            })?;
            config.relay.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(value) = var(LOG_LEVEL_VAR) {
            config.log.stderr_level =
                LevelFilter::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel {
                    var: LOG_LEVEL_VAR,
                    value: value.clone(),
                })?;
        }
        config.log.file_path = var(LOG_FILE_PATH_VAR).map(PathBuf::from);
        config.log.archive_pattern = var(LOG_ARCHIVE_PATTERN_VAR);

        Ok(config)
    }
}
