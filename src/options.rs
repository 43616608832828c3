//! Configuration options for the time-based decorators.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration options for [`throttle`](crate::throttle)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleOptions {
    /// Length of the throttle window in milliseconds
    pub wait_ms: u64,

    /// Invoke on the leading edge of a window (default: true)
    #[serde(default)]
    pub leading: Option<bool>,

    /// Invoke with the latest arguments on the trailing edge (default: true)
    #[serde(default)]
    pub trailing: Option<bool>,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            wait_ms: 0,
            leading: Some(true),
            trailing: Some(true),
        }
    }
}

impl ThrottleOptions {
    /// Create new options with just the window length
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            ..Default::default()
        }
    }

    /// Builder pattern: enable/disable the leading-edge call
    pub fn leading(mut self, enabled: bool) -> Self {
        self.leading = Some(enabled);
        self
    }

    /// Builder pattern: enable/disable the trailing-edge call
    pub fn trailing(mut self, enabled: bool) -> Self {
        self.trailing = Some(enabled);
        self
    }

    /// Get the window length
    pub fn get_wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }

    pub fn is_leading(&self) -> bool {
        self.leading.unwrap_or(true)
    }

    pub fn is_trailing(&self) -> bool {
        self.trailing.unwrap_or(true)
    }
}
