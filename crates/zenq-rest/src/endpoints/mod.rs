//! API endpoint implementations

pub mod account;
pub mod market;
pub mod trading;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;

use crate::auth::Credentials;
use crate::error::RestResult;
use reqwest::{Client, StatusCode};
use tracing::debug;

pub(crate) const UNKNOWN_TICKER: &str = "Ticker not found in the compiled-in registry";
pub(crate) const UNKNOWN_SIDE: &str = "Order side must be \"buy\", \"sell\", +1 or -1";

/// Raw HTTP outcome handed to the response normalizer
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Issue one GET request against the exchange
///
/// The body is read as text rather than decoded here: payload decoding
/// belongs to the normalizer, which must degrade gracefully on malformed
/// bodies instead of failing the call.
pub(crate) async fn send_get(
    client: &Client,
    base_url: &str,
    path: &str,
    params: &[(&str, String)],
) -> RestResult<RawResponse> {
    let url = format!("{}{}", base_url, path);
    debug!("GET {}", path);

    let response = client.get(&url).query(params).send().await?;
    let status = response.status();
    let body = response.text().await?;

    Ok(RawResponse { status, body })
}

/// Query parameters common to every call: credentials and output format
pub(crate) fn base_params(credentials: &Credentials) -> Vec<(&'static str, String)> {
    vec![
        ("apiKeyID", credentials.api_key().to_string()),
        ("apiKeyPassword", credentials.api_secret().to_string()),
        ("outputType", "json".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_params_carry_credentials() {
        let creds = Credentials::new("id", "pw");
        let params = base_params(&creds);

        assert!(params.contains(&("apiKeyID", "id".to_string())));
        assert!(params.contains(&("apiKeyPassword", "pw".to_string())));
        assert!(params.contains(&("outputType", "json".to_string())));
    }
}
