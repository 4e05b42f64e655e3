use thiserror::Error;

/// Errors from repository operations (used by trait definitions in parlance-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors raised while assembling startup configuration.
///
/// Any of these is fatal: the relay refuses to start without its
/// mandatory credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing mandatory secret '{0}'")]
    MissingSecret(String),

    #[error("secret resolution failed: {0}")]
    Resolution(String),

    #[error("invalid configuration value for '{key}': {reason}")]
    Invalid { key: String, reason: String },
}

/// Delivery failure for the user-facing liveness indicator.
#[derive(Debug, Error)]
#[error("liveness delivery failed: {0}")]
pub struct SignalError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingSecret("TELEGRAM_BOT_TOKEN".to_string());
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn test_signal_error_display() {
        let err = SignalError("timeout".to_string());
        assert_eq!(err.to_string(), "liveness delivery failed: timeout");
    }
}
