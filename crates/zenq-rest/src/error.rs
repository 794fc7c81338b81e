//! Error types for REST API operations
//!
//! Only transport-level failures are errors at this level. Client-side
//! validation failures and exchange-reported errors surface as
//! [`StandardResult`](crate::response::StandardResult) values with
//! `is_error` set, so callers check the flag rather than match on an
//! error enum. Nothing is retried and nothing panics.

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (timeout, DNS, TLS, connection)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_error_display() {
        let err = RestError::EnvVarNotSet("ZENQ_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Environment variable not set: ZENQ_API_KEY"
        );
    }
}
