//! Normalization of raw ZenQ payloads into uniform result records
//!
//! Each endpoint returns a slightly different raw shape: order placement
//! and search wrap everything in a `{"code", "data", "errors"}` envelope,
//! while modify and cancel signal success through the HTTP status line
//! with a loose body. All of them converge on [`StandardResult`], so
//! callers never branch on which endpoint produced a result.
//!
//! Normalization never fails: a malformed or empty payload degrades to a
//! result with `is_error` set and a best-effort message. Transport-level
//! failures never reach this module.

use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use zenq_types::status;

/// Uniform outcome record shared by every trading and query endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardResult {
    /// Raw exchange status code ("R200", "R422", ...)
    pub status_code: String,
    /// Order id the result concerns; 0 when absent
    pub order_id: u64,
    /// Server message, including any error text
    pub message: String,
    /// True when the status does not indicate success
    pub is_error: bool,
}

impl StandardResult {
    /// Client-side validation failure, produced before any network call
    pub(crate) fn validation_failed(message: impl Into<String>) -> Self {
        Self {
            status_code: status::VALIDATION_FAILED.to_string(),
            order_id: 0,
            message: message.into(),
            is_error: true,
        }
    }

    fn malformed(http: StatusCode, body: &str) -> Self {
        Self {
            status_code: status::from_http(http.as_u16()),
            order_id: 0,
            message: body.trim().to_string(),
            is_error: true,
        }
    }
}

/// The `{"code", "data", "errors"}` wrapper most endpoints respond with
#[derive(Debug, Deserialize)]
struct Envelope {
    code: Option<String>,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    errors: Vec<Value>,
}

impl Envelope {
    fn status_code(&self, http: StatusCode) -> String {
        self.code
            .clone()
            .unwrap_or_else(|| status::from_http(http.as_u16()))
    }

    fn into_result(self, http: StatusCode, body: &str) -> StandardResult {
        let status_code = self.status_code(http);
        let mut is_error = !status::is_success(&status_code);

        let message = if let Some(first) = self.errors.first() {
            is_error = true;
            render(first)
        } else {
            message_of(&self.data, body)
        };

        StandardResult {
            status_code,
            order_id: order_id_of(&self.data),
            message,
            is_error,
        }
    }
}

/// Normalize an envelope-shaped payload (place order, search ticker)
pub fn from_envelope(http: StatusCode, body: &str) -> StandardResult {
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => envelope.into_result(http, body),
        Err(_) => StandardResult::malformed(http, body),
    }
}

/// Normalize a modify/cancel payload
///
/// These endpoints do not reliably echo the order id back, so the
/// caller-supplied id fills the result whenever the payload omits one.
/// The body may be the usual envelope, a loose `{"success", "message"}`
/// object, or bare text; only the envelope carries its own status code,
/// the other shapes inherit the HTTP status line.
pub fn from_status_line(http: StatusCode, body: &str, order_id: u64) -> StandardResult {
    if let Ok(envelope) = serde_json::from_str::<Envelope>(body) {
        if envelope.code.is_some() {
            let mut result = envelope.into_result(http, body);
            if result.order_id == 0 {
                result.order_id = order_id;
            }
            return result;
        }
    }

    let mut is_error = !http.is_success();
    let mut message = body.trim().to_string();

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(msg) = value.get("message").and_then(Value::as_str) {
            message = msg.trim().to_string();
        }
        if value.get("success").and_then(Value::as_i64) == Some(0) {
            is_error = true;
        }
    }

    StandardResult {
        status_code: status::from_http(http.as_u16()),
        order_id,
        message,
        is_error,
    }
}

/// Normalize an order-list payload, applying client-side filters
///
/// The exchange returns the full list; filtering by resolved ticker name
/// and/or order id happens here. The surviving entries are re-serialized
/// into the result message.
pub fn from_order_list(
    http: StatusCode,
    body: &str,
    ticker_name: Option<&str>,
    order_id: Option<u64>,
) -> StandardResult {
    let Ok(envelope) = serde_json::from_str::<Envelope>(body) else {
        return StandardResult::malformed(http, body);
    };

    let status_code = envelope.status_code(http);

    if let Some(first) = envelope.errors.first() {
        return StandardResult {
            status_code,
            order_id: 0,
            message: render(first),
            is_error: true,
        };
    }

    let orders = envelope
        .data
        .get("orders")
        .and_then(Value::as_array)
        .or_else(|| envelope.data.as_array());

    let message = match orders {
        Some(orders) => {
            let filtered: Vec<&Value> = orders
                .iter()
                .filter(|entry| matches_filters(entry, ticker_name, order_id))
                .collect();
            serde_json::to_string(&filtered).unwrap_or_default()
        }
        None => message_of(&envelope.data, body),
    };

    StandardResult {
        is_error: !status::is_success(&status_code),
        status_code,
        order_id: 0,
        message,
    }
}

fn matches_filters(entry: &Value, ticker_name: Option<&str>, order_id: Option<u64>) -> bool {
    if let Some(name) = ticker_name {
        if entry.get("ticker").and_then(Value::as_str) != Some(name) {
            return false;
        }
    }
    if let Some(id) = order_id {
        if order_id_of(entry) != id {
            return false;
        }
    }
    true
}

/// Render a JSON value as message text, unquoting plain strings
fn render(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

fn message_of(data: &Value, fallback: &str) -> String {
    if let Some(msg) = data.get("message").and_then(Value::as_str) {
        return msg.to_string();
    }
    if data.is_null() {
        fallback.trim().to_string()
    } else {
        render(data)
    }
}

/// The exchange sends order ids both as strings and as numbers
fn order_id_of(data: &Value) -> u64 {
    match data.get("orderId") {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

/// Balances for a user account, keyed by asset symbol
///
/// The exchange-defined asset map is passed through with minimal
/// reshaping; typed accessors parse amounts on demand.
#[derive(Debug, Clone)]
pub struct BalanceResult {
    /// Raw exchange status code
    pub status_code: String,
    /// Server message, if any
    pub message: String,
    /// True when the status does not indicate success
    pub is_error: bool,
    balances: HashMap<String, String>,
}

impl BalanceResult {
    /// Normalize a user-balances payload
    pub fn from_payload(http: StatusCode, body: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Self {
                status_code: status::from_http(http.as_u16()),
                message: body.trim().to_string(),
                is_error: true,
                balances: HashMap::new(),
            };
        };

        let status_code = value
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| status::from_http(http.as_u16()));

        let data = value.get("data").unwrap_or(&value);
        let source = data.get("balances").unwrap_or(data);

        let mut balances = HashMap::new();
        if let Some(map) = source.as_object() {
            for (asset, amount) in map {
                if asset == "message" {
                    continue;
                }
                match amount {
                    Value::String(s) => {
                        balances.insert(asset.clone(), s.clone());
                    }
                    Value::Number(n) => {
                        balances.insert(asset.clone(), n.to_string());
                    }
                    _ => {}
                }
            }
        }

        let message = data
            .get("message")
            .or_else(|| value.get("message"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            is_error: !status::is_success(&status_code),
            status_code,
            message,
            balances,
        }
    }

    /// Get the balance for a specific asset
    pub fn get(&self, asset: &str) -> Option<Decimal> {
        self.balances.get(asset).and_then(|s| s.parse().ok())
    }

    /// Get all non-zero balances
    pub fn non_zero(&self) -> HashMap<String, Decimal> {
        self.balances
            .iter()
            .filter_map(|(asset, amount)| {
                let balance: Decimal = amount.parse().ok()?;
                if balance.is_zero() {
                    None
                } else {
                    Some((asset.clone(), balance))
                }
            })
            .collect()
    }

    /// Iterate over all parseable balances
    pub fn iter(&self) -> impl Iterator<Item = (&String, Decimal)> {
        self.balances.iter().filter_map(|(asset, amount)| {
            let balance: Decimal = amount.parse().ok()?;
            Some((asset, balance))
        })
    }

    /// The raw asset map as the exchange sent it
    pub fn raw(&self) -> &HashMap<String, String> {
        &self.balances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const PLACED: &str =
        r#"{"code":"R200","data":{"orderId":"48485","message":"Order was placed successfully. Order #  48485. <br>BTCUSDT X 0.00010 @ 125213.000"},"errors":[],"extra":[]}"#;

    #[test]
    fn test_envelope_success() {
        let result = from_envelope(StatusCode::OK, PLACED);
        assert_eq!(result.status_code, "R200");
        assert_eq!(result.order_id, 48485);
        assert!(!result.is_error);
        assert!(result.message.contains("placed successfully"));
    }

    #[test]
    fn test_envelope_with_errors_list() {
        let body = r#"{"code":"R422","data":{},"errors":["Quantity below minimum"],"extra":[]}"#;
        let result = from_envelope(StatusCode::OK, body);
        assert!(result.is_error);
        assert_eq!(result.status_code, "R422");
        assert_eq!(result.message, "Quantity below minimum");
        assert_eq!(result.order_id, 0);
    }

    #[test]
    fn test_envelope_numeric_order_id() {
        let body = r#"{"code":"R200","data":{"orderId":48486}}"#;
        let result = from_envelope(StatusCode::OK, body);
        assert_eq!(result.order_id, 48486);
    }

    #[test]
    fn test_envelope_malformed_degrades() {
        let result = from_envelope(StatusCode::OK, "<html>gateway error</html>");
        assert!(result.is_error);
        assert_eq!(result.status_code, "R200");
        assert_eq!(result.order_id, 0);
    }

    #[test]
    fn test_envelope_empty_body() {
        let result = from_envelope(StatusCode::OK, "");
        assert!(result.is_error);
        assert_eq!(result.message, "");
    }

    #[test]
    fn test_envelope_without_code_uses_http_status() {
        let body = r#"{"data":{"message":"ok"}}"#;
        let result = from_envelope(StatusCode::OK, body);
        assert_eq!(result.status_code, "R200");
        assert!(!result.is_error);
    }

    #[test]
    fn test_status_line_success_object() {
        let body = "{\"success\":1,\"message\":\"Success: Modify order has been done\\r\\n\"}";
        let result = from_status_line(StatusCode::OK, body, 48485);
        assert!(!result.is_error);
        assert_eq!(result.order_id, 48485);
        assert_eq!(result.message, "Success: Modify order has been done");
    }

    #[test]
    fn test_status_line_success_flag_zero() {
        let body = r#"{"success":0,"message":"Order not found"}"#;
        let result = from_status_line(StatusCode::OK, body, 7);
        assert!(result.is_error);
        assert_eq!(result.message, "Order not found");
    }

    #[test]
    fn test_status_line_bare_text() {
        let body = "Success: Order #48484 has been cancelled successfully";
        let result = from_status_line(StatusCode::OK, body, 48484);
        assert!(!result.is_error);
        assert_eq!(result.status_code, "R200");
        assert_eq!(result.order_id, 48484);
        assert_eq!(result.message, body);
    }

    #[test]
    fn test_status_line_http_failure() {
        let result = from_status_line(StatusCode::BAD_GATEWAY, "upstream down", 9);
        assert!(result.is_error);
        assert_eq!(result.status_code, "R502");
        assert_eq!(result.order_id, 9);
    }

    #[test]
    fn test_status_line_envelope_keeps_payload_id() {
        let result = from_status_line(StatusCode::OK, PLACED, 1);
        assert_eq!(result.order_id, 48485);
    }

    #[test]
    fn test_order_list_filtering() {
        let body = r#"{"code":"R200","data":{"orders":[
            {"orderId":"1","ticker":"BTCUSDT"},
            {"orderId":"2","ticker":"ETHUSDT"},
            {"orderId":"3","ticker":"BTCUSDT"}
        ]},"errors":[],"extra":[]}"#;

        let all = from_order_list(StatusCode::OK, body, None, None);
        assert!(!all.is_error);
        assert!(all.message.contains("\"1\"") && all.message.contains("\"2\""));

        let btc = from_order_list(StatusCode::OK, body, Some("BTCUSDT"), None);
        assert!(btc.message.contains("\"1\"") && btc.message.contains("\"3\""));
        assert!(!btc.message.contains("ETHUSDT"));

        let one = from_order_list(StatusCode::OK, body, Some("BTCUSDT"), Some(3));
        assert!(one.message.contains("\"3\""));
        assert!(!one.message.contains("\"1\""));

        let none = from_order_list(StatusCode::OK, body, Some("ETHUSDT"), Some(3));
        assert_eq!(none.message, "[]");
    }

    #[test]
    fn test_order_list_malformed_degrades() {
        let result = from_order_list(StatusCode::OK, "not json", Some("BTCUSDT"), None);
        assert!(result.is_error);
    }

    #[test]
    fn test_balances_nested_map() {
        let body = r#"{"code":"R200","data":{"balances":{"BTC":"0.5","USDT":1000.25,"DOGE":"0"}}}"#;
        let balances = BalanceResult::from_payload(StatusCode::OK, body);
        assert!(!balances.is_error);
        assert_eq!(balances.get("BTC"), Some(dec!(0.5)));
        assert_eq!(balances.get("USDT"), Some(dec!(1000.25)));
        assert_eq!(balances.get("XRP"), None);
        assert!(!balances.non_zero().contains_key("DOGE"));
        assert_eq!(balances.iter().count(), 3);
    }

    #[test]
    fn test_balances_flat_map() {
        let body = r#"{"BTC":"0.1","ETH":"2"}"#;
        let balances = BalanceResult::from_payload(StatusCode::OK, body);
        assert_eq!(balances.get("ETH"), Some(dec!(2)));
        assert_eq!(balances.status_code, "R200");
    }

    #[test]
    fn test_balances_malformed_degrades() {
        let balances = BalanceResult::from_payload(StatusCode::OK, "oops");
        assert!(balances.is_error);
        assert!(balances.raw().is_empty());
    }

    #[test]
    fn test_balances_skips_unparseable_amounts() {
        let body = r#"{"code":"R200","data":{"balances":{"BTC":"n/a","ETH":"1"}}}"#;
        let balances = BalanceResult::from_payload(StatusCode::OK, body);
        assert_eq!(balances.get("BTC"), None);
        assert_eq!(balances.iter().count(), 1);
        assert_eq!(balances.raw().len(), 2);
    }
}
