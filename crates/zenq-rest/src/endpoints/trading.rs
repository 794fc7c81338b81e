//! Trading endpoints for order management
//!
//! Inputs are validated against the compiled-in registry before any
//! request is built: an unknown ticker or side yields an `R422` result
//! without spending a network round trip.

use crate::auth::Credentials;
use crate::config::paths;
use crate::endpoints::{base_params, send_get, UNKNOWN_SIDE, UNKNOWN_TICKER};
use crate::error::RestResult;
use crate::response::{self, StandardResult};
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, instrument};
use zenq_types::{resolve_to_id, OrderSide, SideRef, TickerRef};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a Client,
    credentials: &'a Credentials,
    base_url: &'static str,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a Client, credentials: &'a Credentials, base_url: &'static str) -> Self {
        Self {
            client,
            credentials,
            base_url,
        }
    }

    /// Place a limit order
    ///
    /// # Arguments
    /// * `quantity` - Quantity in base token units
    /// * `side` - Order direction ("buy"/"sell", +1/-1, or [`OrderSide`])
    /// * `price` - Price level at which the order rests
    /// * `ticker` - Market pair (symbol, numeric id, or ticker constant)
    #[instrument(skip_all, fields(price = %price, quantity = %quantity))]
    pub async fn place_limit_order(
        &self,
        quantity: Decimal,
        side: impl Into<SideRef>,
        price: Decimal,
        ticker: impl Into<TickerRef>,
    ) -> RestResult<StandardResult> {
        let Some(side) = OrderSide::resolve(side) else {
            return Ok(StandardResult::validation_failed(UNKNOWN_SIDE));
        };
        let Some(ticker_id) = resolve_to_id(ticker) else {
            return Ok(StandardResult::validation_failed(UNKNOWN_TICKER));
        };

        let mut params = base_params(self.credentials);
        params.push(("apiQuantity", quantity.to_string()));
        params.push(("apiOrderType", side.signum().to_string()));
        params.push(("apiPrice", price.to_string()));
        params.push(("apiTickerId", ticker_id.to_string()));

        debug!("Placing limit {} {} @ {} on ticker {}", side, quantity, price, ticker_id);

        let raw = send_get(self.client, self.base_url, paths::PLACE_ORDER, &params).await?;
        Ok(response::from_envelope(raw.status, &raw.body))
    }

    /// Place a market order
    ///
    /// Same endpoint as limit orders; omitting the price parameter makes
    /// the exchange fill at market.
    #[instrument(skip_all, fields(quantity = %quantity))]
    pub async fn place_market_order(
        &self,
        quantity: Decimal,
        side: impl Into<SideRef>,
        ticker: impl Into<TickerRef>,
    ) -> RestResult<StandardResult> {
        let Some(side) = OrderSide::resolve(side) else {
            return Ok(StandardResult::validation_failed(UNKNOWN_SIDE));
        };
        let Some(ticker_id) = resolve_to_id(ticker) else {
            return Ok(StandardResult::validation_failed(UNKNOWN_TICKER));
        };

        let mut params = base_params(self.credentials);
        params.push(("apiQuantity", quantity.to_string()));
        params.push(("apiOrderType", side.signum().to_string()));
        params.push(("apiTickerId", ticker_id.to_string()));

        debug!("Placing market {} {} on ticker {}", side, quantity, ticker_id);

        let raw = send_get(self.client, self.base_url, paths::PLACE_ORDER, &params).await?;
        Ok(response::from_envelope(raw.status, &raw.body))
    }

    /// Modify an existing order's price and quantity
    ///
    /// # Arguments
    /// * `order_id` - Id of the order to modify
    /// * `new_price` - Replacement price
    /// * `new_quantity` - Replacement quantity
    /// * `market_value` - Current market value, used by the exchange to
    ///   validate the modification
    /// * `ticker` - Optional market pair the order belongs to
    #[instrument(skip_all, fields(order_id = order_id))]
    pub async fn modify_order(
        &self,
        order_id: u64,
        new_price: Decimal,
        new_quantity: Decimal,
        market_value: Decimal,
        ticker: Option<TickerRef>,
    ) -> RestResult<StandardResult> {
        let ticker_id = match resolve_optional(ticker) {
            Ok(id) => id,
            Err(result) => return Ok(result),
        };

        let mut params = base_params(self.credentials);
        params.push(("orderId", order_id.to_string()));
        params.push(("newPrice", new_price.to_string()));
        params.push(("newQuantity", new_quantity.to_string()));
        params.push(("marketValue", market_value.to_string()));
        if let Some(id) = ticker_id {
            params.push(("apiTickerId", id.to_string()));
        }

        debug!("Modifying order {} to {} @ {}", order_id, new_quantity, new_price);

        let raw = send_get(self.client, self.base_url, paths::MODIFY_ORDER, &params).await?;
        Ok(response::from_status_line(raw.status, &raw.body, order_id))
    }

    /// Cancel an existing order
    ///
    /// Cancellation is served by the modify handler on the exchange side;
    /// the `mode` flag selects it.
    #[instrument(skip_all, fields(order_id = order_id))]
    pub async fn cancel_order(
        &self,
        order_id: u64,
        ticker: Option<TickerRef>,
    ) -> RestResult<StandardResult> {
        let ticker_id = match resolve_optional(ticker) {
            Ok(id) => id,
            Err(result) => return Ok(result),
        };

        let mut params = base_params(self.credentials);
        params.push(("orderId", order_id.to_string()));
        params.push(("mode", "modify".to_string()));
        if let Some(id) = ticker_id {
            params.push(("apiTickerId", id.to_string()));
        }

        debug!("Cancelling order {}", order_id);

        let raw = send_get(self.client, self.base_url, paths::CANCEL_ORDER, &params).await?;
        Ok(response::from_status_line(raw.status, &raw.body, order_id))
    }
}

/// Resolve an optional ticker filter, mapping an unknown reference to the
/// validation-failure result
pub(crate) fn resolve_optional(ticker: Option<TickerRef>) -> Result<Option<u32>, StandardResult> {
    match ticker {
        None => Ok(None),
        Some(t) => match resolve_to_id(t) {
            Some(id) => Ok(Some(id)),
            None => Err(StandardResult::validation_failed(UNKNOWN_TICKER)),
        },
    }
}
