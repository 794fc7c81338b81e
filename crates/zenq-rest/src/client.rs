//! Main REST client implementation

use crate::auth::Credentials;
use crate::config::{ClientConfig, Environment};
use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::response::{BalanceResult, StandardResult};
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;
use zenq_types::{SideRef, TickerRef};

/// ZenQ REST API client
///
/// Every call resolves its inputs against the compiled-in ticker
/// registry, issues one GET request, and normalizes the response into a
/// [`StandardResult`]. Clients are cheap to clone and fully independent
/// of each other: the only shared state is the read-only registry.
///
/// # Example
///
/// ```no_run
/// use zenq_rest::{Credentials, ZenqClient};
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Paper-money environment
///     let client = ZenqClient::new(Credentials::from_env()?);
///
///     let result = client
///         .place_market_order(Decimal::new(1, 4), "buy", "BTCUSDT")
///         .await?;
///     println!("{}: {}", result.status_code, result.message);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ZenqClient {
    http_client: Client,
    credentials: Credentials,
    environment: Environment,
}

impl ZenqClient {
    /// Create a client against the paper-money (test) environment
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client against the real-money environment
    pub fn live(credentials: Credentials) -> Self {
        Self::with_config(
            credentials,
            ClientConfig::default().with_environment(Environment::Live),
        )
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("zenq-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created ZenQ REST client ({:?})", config.environment);

        Self {
            http_client,
            credentials,
            environment: config.environment,
        }
    }

    /// The environment this client talks to
    pub fn environment(&self) -> Environment {
        self.environment
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(
            &self.http_client,
            &self.credentials,
            self.environment.base_url(),
        )
    }

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(
            &self.http_client,
            &self.credentials,
            self.environment.base_url(),
        )
    }

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(
            &self.http_client,
            &self.credentials,
            self.environment.base_url(),
        )
    }

    // ========================================================================
    // Trading
    // ========================================================================

    /// Place a limit order
    pub async fn place_limit_order(
        &self,
        quantity: Decimal,
        side: impl Into<SideRef>,
        price: Decimal,
        ticker: impl Into<TickerRef>,
    ) -> RestResult<StandardResult> {
        self.trading()
            .place_limit_order(quantity, side, price, ticker)
            .await
    }

    /// Place a market order
    pub async fn place_market_order(
        &self,
        quantity: Decimal,
        side: impl Into<SideRef>,
        ticker: impl Into<TickerRef>,
    ) -> RestResult<StandardResult> {
        self.trading()
            .place_market_order(quantity, side, ticker)
            .await
    }

    /// Modify an existing order's price and quantity
    pub async fn order_modify(
        &self,
        order_id: u64,
        new_price: Decimal,
        new_quantity: Decimal,
        market_value: Decimal,
        ticker: Option<TickerRef>,
    ) -> RestResult<StandardResult> {
        self.trading()
            .modify_order(order_id, new_price, new_quantity, market_value, ticker)
            .await
    }

    /// Cancel an existing order
    pub async fn order_cancel(
        &self,
        order_id: u64,
        ticker: Option<TickerRef>,
    ) -> RestResult<StandardResult> {
        self.trading().cancel_order(order_id, ticker).await
    }

    // ========================================================================
    // Market
    // ========================================================================

    /// Retrieve information about a market pair
    pub async fn search_ticker(
        &self,
        ticker: impl Into<TickerRef>,
    ) -> RestResult<StandardResult> {
        self.market().search_ticker(ticker).await
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// Retrieve the account's orders, optionally filtered client-side
    pub async fn order_list(
        &self,
        ticker: Option<TickerRef>,
        order_id: Option<u64>,
    ) -> RestResult<StandardResult> {
        self.account().order_list(ticker, order_id).await
    }

    /// Retrieve the balances of a user account
    pub async fn user_balances(&self, user_id: Option<&str>) -> RestResult<BalanceResult> {
        self.account().user_balances(user_id).await
    }
}

impl std::fmt::Debug for ZenqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenqClient")
            .field("environment", &self.environment)
            .finish()
    }
}
