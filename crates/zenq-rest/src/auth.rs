//! API credentials for ZenQ endpoints
//!
//! Every ZenQ endpoint is authenticated with the plain query parameters
//! `apiKeyID` and `apiKeyPassword`. There is no nonce, signing, or
//! header-based scheme.

use crate::error::{RestError, RestResult};
use std::fmt;

const API_KEY_VAR: &str = "ZENQ_API_KEY";
const API_SECRET_VAR: &str = "ZENQ_API_SECRET";

/// API key pair generated from the ZenQ exchange account page
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create credentials from a key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Load credentials from the `ZENQ_API_KEY` and `ZENQ_API_SECRET`
    /// environment variables
    pub fn from_env() -> RestResult<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| RestError::EnvVarNotSet(API_KEY_VAR.to_string()))?;
        let api_secret = std::env::var(API_SECRET_VAR)
            .map_err(|_| RestError::EnvVarNotSet(API_SECRET_VAR.to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// The API key id
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        &self.api_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("key-id", "very-secret");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("key-id"));
        assert!(!rendered.contains("very-secret"));
    }

    #[test]
    fn test_from_env_missing() {
        // Variables are not set in the test environment
        let result = Credentials::from_env();
        assert!(matches!(result, Err(RestError::EnvVarNotSet(_))));
    }
}
