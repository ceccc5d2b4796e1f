use super::ConfigFileError;
use crate::constants::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_POLL_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_poll_timeout_ms() -> u64 {
    DEFAULT_POLL_TIMEOUT_MS
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

/// Timing used by [`wait_for`](crate::services::rpc::wait_for).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    /// Give up after this long (milliseconds)
    #[serde(default = "default_poll_timeout_ms")]
    pub timeout_ms: u64,

    /// Sleep between attempts (milliseconds)
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_poll_timeout_ms(),
            interval_ms: default_poll_interval_ms(),
        }
    }
}

impl PollConfig {
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        if self.interval_ms == 0 {
            return Err(ConfigFileError::InvalidFormat(
                "Poll interval_ms must be greater than zero".into(),
            ));
        }

        if self.interval_ms > self.timeout_ms {
            return Err(ConfigFileError::InvalidFormat(
                "Poll interval_ms must not exceed timeout_ms".into(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
