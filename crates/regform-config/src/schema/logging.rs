//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Minimum level for regform's own log output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` env-filter directive scoped to the regform crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "regform=trace",
            LogLevel::Debug => "regform=debug",
            LogLevel::Info => "regform=info",
            LogLevel::Warn => "regform=warn",
            LogLevel::Error => "regform=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_lowercase() {
        let config: LoggingConfig = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let result: Result<LoggingConfig, _> = toml::from_str(r#"level = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn directive_targets_regform() {
        assert_eq!(LogLevel::Info.directive(), "regform=info");
        assert_eq!(LogLevel::Trace.directive(), "regform=trace");
    }
}
