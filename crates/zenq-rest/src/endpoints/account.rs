//! Account endpoints: order list and user balances

use crate::auth::Credentials;
use crate::config::paths;
use crate::endpoints::{base_params, send_get, UNKNOWN_TICKER};
use crate::error::RestResult;
use crate::response::{self, BalanceResult, StandardResult};
use reqwest::Client;
use tracing::{debug, instrument};
use zenq_types::{resolve_to_name, TickerRef};

/// Account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
    base_url: &'static str,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials, base_url: &'static str) -> Self {
        Self {
            client,
            credentials,
            base_url,
        }
    }

    /// Retrieve the account's orders, optionally filtered
    ///
    /// The exchange returns the full list; filtering by ticker and/or
    /// order id is applied client-side. Filters are resolved before the
    /// request goes out, so an unknown ticker costs no round trip. The
    /// order-list filter compares symbol names, not numeric ids.
    ///
    /// # Arguments
    /// * `ticker` - Keep only orders for this market pair
    /// * `order_id` - Keep only the order with this id
    #[instrument(skip_all)]
    pub async fn order_list(
        &self,
        ticker: Option<TickerRef>,
        order_id: Option<u64>,
    ) -> RestResult<StandardResult> {
        let ticker_name = match ticker {
            None => None,
            Some(t) => match resolve_to_name(t) {
                Some(name) => Some(name),
                None => return Ok(StandardResult::validation_failed(UNKNOWN_TICKER)),
            },
        };

        debug!("Fetching order list (ticker filter: {:?})", ticker_name);

        let params = base_params(self.credentials);
        let raw = send_get(self.client, self.base_url, paths::ORDER_LIST, &params).await?;

        Ok(response::from_order_list(
            raw.status,
            &raw.body,
            ticker_name,
            order_id,
        ))
    }

    /// Retrieve the balances of a user account
    ///
    /// # Arguments
    /// * `user_id` - Account to query; the API key's own account when
    ///   omitted
    #[instrument(skip_all)]
    pub async fn user_balances(&self, user_id: Option<&str>) -> RestResult<BalanceResult> {
        let mut params = base_params(self.credentials);
        if let Some(user_id) = user_id {
            params.push(("userId", user_id.to_string()));
        }

        debug!("Fetching user balances");

        let raw = send_get(self.client, self.base_url, paths::USER_BALANCES, &params).await?;
        Ok(BalanceResult::from_payload(raw.status, &raw.body))
    }
}
