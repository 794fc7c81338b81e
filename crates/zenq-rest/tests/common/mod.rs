//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON payloads in the shapes the ZenQ exchange returns.

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber for test output (idempotent)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Successful order placement
pub const ORDER_PLACED: &str = r#"{
    "code": "R200",
    "data": {
        "orderId": "48485",
        "message": "Order was placed successfully. Order #  48485. <br>BTCUSDT X 0.00010 @ 125213.000"
    },
    "errors": [],
    "extra": []
}"#;

/// Placement rejected by the exchange
pub const ORDER_REJECTED: &str = r#"{
    "code": "R422",
    "data": {},
    "errors": ["Insufficient balance for BTCUSDT"],
    "extra": []
}"#;

/// Successful modify, loose shape keyed off the HTTP status
pub const MODIFY_OK: &str = "{\"success\":1,\"message\":\"Success: Modify order has been done\\r\\n\"}";

/// Successful cancel, bare text body
pub const CANCEL_OK: &str = "Success: Order #48484 has been cancelled successfully";

/// Open orders for two market pairs
pub const ORDER_LIST: &str = r#"{
    "code": "R200",
    "data": {
        "orders": [
            {"orderId": "48485", "ticker": "BTCUSDT", "quantity": "0.0001", "price": "125213.000"},
            {"orderId": "48490", "ticker": "ETHUSDT", "quantity": "0.5", "price": "4100.000"},
            {"orderId": "48492", "ticker": "BTCUSDT", "quantity": "0.0002", "price": "124900.000"}
        ]
    },
    "errors": [],
    "extra": []
}"#;

/// User balances keyed by asset
pub const BALANCES: &str = r#"{
    "code": "R200",
    "data": {
        "balances": {
            "BTC": "0.50000000",
            "USDT": "10250.25",
            "ADA": "0"
        }
    },
    "errors": [],
    "extra": []
}"#;

/// A body that is not JSON at all (e.g. an HTML gateway page)
pub const MALFORMED: &str = "<html><body>502 Bad Gateway</body></html>";
