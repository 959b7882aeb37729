//! Process configuration read from the environment.

use thiserror::Error;

use stockpad_observability::{LogFormat, ParseLogFormatError, TracingConfig};

/// Selects the log line format (`json` or `pretty`).
pub const LOG_FORMAT_VAR: &str = "STOCKPAD_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    LogFormat {
        var: &'static str,
        #[source]
        source: ParseLogFormatError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub tracing: TracingConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// The log filter itself is left to `RUST_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                raw.parse::<LogFormat>()
                    .map_err(|source| ConfigError::LogFormat {
                        var: LOG_FORMAT_VAR,
                        source,
                    })?
            }
            _ => LogFormat::default(),
        };

        Ok(Self {
            tracing: TracingConfig { format },
        })
    }
}
