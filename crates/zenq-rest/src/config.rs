//! Environment selection and the ZenQ endpoint catalog

/// Base URL for the paper-money (test) environment
pub const PAPER_BASE_URL: &str = "https://paper-api.zenq.exchange";

/// Base URL for the real-money environment
pub const LIVE_BASE_URL: &str = "https://api.zenq.exchange";

/// Endpoint paths. These are configuration, not logic: every endpoint is
/// a GET with query parameters under one of the base URLs above.
pub(crate) mod paths {
    pub const PLACE_ORDER: &str = "/trade/placeOrder";
    pub const MODIFY_ORDER: &str = "/trade/modifyOrder";
    pub const CANCEL_ORDER: &str = "/trade/cancelOrder";
    pub const ORDER_LIST: &str = "/trade/orderList";
    pub const SEARCH_TICKER: &str = "/market/searchTicker";
    pub const USER_BALANCES: &str = "/account/userBalances";
}

/// Default request timeout
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Target exchange environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Paper-money endpoints (simulated trading)
    #[default]
    Paper,
    /// Real-money endpoints
    Live,
}

impl Environment {
    /// Base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Paper => PAPER_BASE_URL,
            Self::Live => LIVE_BASE_URL,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Target environment
    pub environment: Environment,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Paper,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_paper() {
        let config = ClientConfig::default();
        assert_eq!(config.environment, Environment::Paper);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_environment(Environment::Live)
            .with_timeout(60)
            .with_user_agent("test-agent");

        assert_eq!(config.environment, Environment::Live);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_base_urls_differ() {
        assert_ne!(Environment::Paper.base_url(), Environment::Live.base_url());
    }
}
