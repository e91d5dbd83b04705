use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors raised at the boundary where untyped input (field names typed by
/// a user, driver commands) is turned into typed form operations.
///
/// Validation failures are not errors; they live in the form's error map.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RegformError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("events.capacity = 0".into());
        assert_eq!(err.to_string(), "config validation error: events.capacity = 0");
    }

    #[test]
    fn form_error_display() {
        let err = FormError::UnknownField("nickname".into());
        assert_eq!(err.to_string(), "unknown field: nickname");

        let err = FormError::InvalidCommand("jump".into());
        assert_eq!(err.to_string(), "invalid command: jump");
    }

    #[test]
    fn regform_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: RegformError = config_err.into();
        assert!(matches!(err, RegformError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn regform_error_from_form() {
        let err: RegformError = FormError::UnknownField("age".into()).into();
        assert!(matches!(err, RegformError::Form(_)));
        assert_eq!(err.to_string(), "unknown field: age");
    }

    #[test]
    fn regform_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "script missing");
        let err: RegformError = io_err.into();
        assert!(matches!(err, RegformError::Io(_)));
        assert!(err.to_string().contains("script missing"));
    }

    #[test]
    fn regform_error_other() {
        let err = RegformError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
