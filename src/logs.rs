use log::LevelFilter;
use log4rs::{
    Config,
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};
use thiserror::Error;

use crate::config::LogConfig;

const LOG_SIZE_LIMIT: u64 = 10 * 1024 * 1024; // 10 MB

const LOG_FILE_COUNT: u32 = 3;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("invalid log archive pattern: {0}")]
    Roller(String),
    #[error("cannot open log file: {0}")]
    File(#[from] std::io::Error),
    #[error("invalid logger configuration: {0}")]
    Config(String),
    #[error("logger already set: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

fn default_archive_pattern(file_path: &std::path::Path) -> String {
    format!("{}.{{}}.gz", file_path.display())
}

/// Stderr only gets records when `stderr_level` allows it; the rolling file
/// is added only when a path is configured.
pub fn build_config(log_config: &LogConfig) -> Result<Config, LogInitError> {
    let file_level = LevelFilter::Debug;
    let mut root = Root::builder();
    let mut root_level = log_config.stderr_level;
    let mut config = Config::builder();

    if log_config.stderr_level != LevelFilter::Off {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        config = config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(log_config.stderr_level)))
                .build("stderr", Box::new(stderr)),
        );
        root = root.appender("stderr");
    }

    if let Some(file_path) = &log_config.file_path {
        let archive_pattern = log_config
            .archive_pattern
            .clone()
            .unwrap_or_else(|| default_archive_pattern(file_path));

        let trigger = SizeTrigger::new(LOG_SIZE_LIMIT);
        let roller = FixedWindowRoller::builder()
            .build(&archive_pattern, LOG_FILE_COUNT)
            .map_err(|e| LogInitError::Roller(e.to_string()))?;
        let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

        let logfile = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(file_path, Box::new(policy))?;

        config = config.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(file_level)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
        root_level = root_level.max(file_level);
    }

    config
        .build(root.build(root_level))
        .map_err(|e| LogInitError::Config(e.to_string()))
}

pub fn init_logger(log_config: &LogConfig) -> Result<(), LogInitError> {
    let config = build_config(log_config)?;
    let _handle = log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_default_archive_pattern() {
        assert_eq!(
            default_archive_pattern(&PathBuf::from("/tmp/mailer.log")),
            "/tmp/mailer.log.{}.gz"
        );
    }

    #[test]
    fn test_build_silent_config() {
        let config = build_config(&LogConfig::default()).unwrap();
        assert!(config.appenders().is_empty());
        assert_eq!(config.root().level(), LevelFilter::Off);
    }

    #[test]
    fn test_build_stderr_config() {
        let config = build_config(&LogConfig {
            stderr_level: LevelFilter::Info,
            ..LogConfig::default()
        })
        .unwrap();
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.root().level(), LevelFilter::Info);
    }

    #[test]
    fn test_build_file_config() {
        let dir = std::env::temp_dir().join(format!("gmail-sender-logs-{}", std::process::id()));
        let config = build_config(&LogConfig {
            stderr_level: LevelFilter::Warn,
            file_path: Some(dir.join("mailer.log")),
            archive_pattern: None,
        })
        .unwrap();
        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().level(), LevelFilter::Debug);
        let _ = std::fs::remove_dir_all(dir);
    }
}
