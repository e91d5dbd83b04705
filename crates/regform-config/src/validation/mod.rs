//! Full configuration validation.
//!
//! Validates numeric ranges per section and collects every error into a
//! single `ConfigError`.

mod helpers;
mod limits;


use crate::schema::RegformConfig;
use regform_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &RegformConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    limits::validate_notifications(&mut errors, config);
    limits::validate_events(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
