use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::Serialize;

use crate::config::logging_config::{LogFormat, LoggingConfig};

#[derive(Debug, Serialize, Clone)]
pub struct LogMessage {
    level: String,
    target: String,
    message: String,
    timestamp: String,
}

/// Writes log records to stderr as text or JSON lines
pub struct ConsoleLogger {
    level: LevelFilter,
    format: LogFormat,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, format: LogFormat) -> Self {
        Self { level, format }
    }

    pub fn init(level: LevelFilter, format: LogFormat) -> Result<(), SetLoggerError> {
        let logger = ConsoleLogger::new(level, format);
        log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(level))
    }

    fn format_record(&self, level: Level, target: &str, message: String) -> String {
        match self.format {
            LogFormat::Text => format!("[{}] {}", level, message),
            LogFormat::Json => {
                let log_message = LogMessage {
                    level: level.to_string(),
                    target: target.to_string(),
                    message,
                    timestamp: Local::now().to_rfc3339(),
                };
                // A struct of plain strings always serializes
                serde_json::to_string(&log_message).unwrap_or_default()
            }
        }
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = self.format_record(
                record.level(),
                record.target(),
                record.args().to_string(),
            );
            eprintln!("{}", line);
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger, falling back to env_logger. Failures are reported on stderr.
pub fn init_logging(config: &LoggingConfig) {
    let level = config.level_filter();
    if let Err(e) = ConsoleLogger::init(level, config.format) {
        eprintln!("Failed to install console logger: {}", e);
        if let Err(e) = env_logger::builder().filter_level(level).try_init() {
            eprintln!("Failed to install env_logger fallback: {}", e);
        }
    }
    log::debug!("Logging initialized at {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn text_format_prefixes_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info, LogFormat::Text);
        let line = logger.format_record(Level::Warn, "wfd", "port busy".to_string());
        assert_eq!(line, "[WARN] port busy");
    }

    #[test]
    fn json_format_carries_fields() {
        let logger = ConsoleLogger::new(LevelFilter::Info, LogFormat::Json);
        let line = logger.format_record(Level::Info, "wfd_info_lib::config", "loaded".to_string());
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["target"], "wfd_info_lib::config");
        assert_eq!(value["message"], "loaded");
        assert!(value["timestamp"].as_str().is_some());
    }

    #[test]
    fn records_above_level_are_disabled() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, LogFormat::Text);
        let info = Metadata::builder().level(Level::Info).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));
    }

    #[test]
    fn repeated_init_does_not_panic() {
        let config = LoggingConfig::default();
        init_logging(&config);
        init_logging(&config);
        assert!(log::max_level() >= LevelFilter::Error);
    }
}
