use std::fmt;
use std::time::Duration;

pub mod controller;
pub mod log;
pub mod state;

pub use controller::AutomationController;
pub use log::{LogBuffer, DEFAULT_LOG_CAPACITY};
pub use state::{AutomationState, AutomationStatus};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30 * 60);

#[derive(Clone)]
pub struct Config {
    /// Key handed to the rewriter on every cycle
    pub api_key: Option<String>,
    /// Period between scheduled cycles
    pub interval: Duration,
    pub log_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            interval: DEFAULT_INTERVAL,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}

impl Config {
    /// A zero interval cannot drive a timer.
    pub fn validate(&self) -> nr_core::Result<()> {
        if self.interval.is_zero() {
            return Err(nr_core::Error::Configuration(
                "Automation interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("interval", &self.interval)
            .field("log_capacity", &self.log_capacity)
            .finish()
    }
}

pub mod prelude {
    pub use super::{AutomationController, AutomationStatus, Config};
    pub use nr_core::{Credentials, LogEntry, LogLevel, RewrittenArticle, Result, Error};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = Config {
            interval: Duration::ZERO,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(nr_core::Error::Configuration(_))));
    }
}
