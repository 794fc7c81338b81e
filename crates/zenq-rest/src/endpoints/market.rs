//! Market data endpoints

use crate::auth::Credentials;
use crate::config::paths;
use crate::endpoints::{base_params, send_get, UNKNOWN_TICKER};
use crate::error::RestResult;
use crate::response::{self, StandardResult};
use reqwest::Client;
use tracing::{debug, instrument};
use zenq_types::{resolve_to_name, TickerRef};

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
    base_url: &'static str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials, base_url: &'static str) -> Self {
        Self {
            client,
            credentials,
            base_url,
        }
    }

    /// Retrieve information about a market pair
    ///
    /// The search endpoint expects the symbol name on the wire, so the
    /// reference is resolved to its name regardless of how it was passed.
    ///
    /// # Arguments
    /// * `ticker` - Market pair (symbol, numeric id, or ticker constant)
    #[instrument(skip_all)]
    pub async fn search_ticker(
        &self,
        ticker: impl Into<TickerRef>,
    ) -> RestResult<StandardResult> {
        let Some(name) = resolve_to_name(ticker) else {
            return Ok(StandardResult::validation_failed(UNKNOWN_TICKER));
        };

        let mut params = base_params(self.credentials);
        params.push(("st", name.to_string()));

        debug!("Searching ticker {}", name);

        let raw = send_get(self.client, self.base_url, paths::SEARCH_TICKER, &params).await?;
        Ok(response::from_envelope(raw.status, &raw.body))
    }
}
