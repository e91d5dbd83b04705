//! Notification queue and event bus sizing.

use serde::{Deserialize, Serialize};

/// Acknowledgment queue settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub capacity: u32,
    pub ttl_secs: u32,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            capacity: 8,
            ttl_secs: 5,
        }
    }
}

/// Event bus settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Buffered events per subscriber before slow readers lag.
    pub capacity: u32,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}
