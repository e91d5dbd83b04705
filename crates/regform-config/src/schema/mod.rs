//! Configuration schema types for regform.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod form;
mod logging;
mod notifications;

pub use form::*;
pub use logging::*;
pub use notifications::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the regform driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct RegformConfig {
    pub logging: LoggingConfig,
    pub form: FormConfig,
    pub notifications: NotificationsConfig,
    pub events: EventsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_sections() {
        let config = RegformConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(!config.form.reset_clears_images);
        assert_eq!(config.notifications.capacity, 8);
        assert_eq!(config.notifications.ttl_secs, 5);
        assert_eq!(config.events.capacity, 64);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: RegformConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.events.capacity, 64);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: RegformConfig = toml::from_str(
            r#"
[notifications]
ttl_secs = 12
"#,
        )
        .unwrap();
        assert_eq!(config.notifications.ttl_secs, 12);
        assert_eq!(config.notifications.capacity, 8);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let config: RegformConfig = toml::from_str(
            r#"
[theme]
name = "dark"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Info);
    }
}
