//! REST API client for the ZenQ cryptocurrency exchange
//!
//! This crate provides a thin client for ZenQ's HTTP API: placing and
//! managing orders, searching tickers, and fetching account balances.
//!
//! # Features
//!
//! - **Trading**: Place limit/market orders, modify, cancel
//! - **Market**: Search ticker information
//! - **Account**: Order list with client-side filtering, user balances
//!
//! # Authentication
//!
//! ZenQ authenticates every call with plain query parameters
//! (`apiKeyID` / `apiKeyPassword`); there is no request signing.
//!
//! # Results
//!
//! Every endpoint converges on [`StandardResult`]: a raw exchange status
//! code, an order id (0 when absent), a message, and an `is_error` flag.
//! Client-side validation failures (unknown ticker, bad side) and
//! exchange-reported errors are values with `is_error` set; only
//! transport-level failures surface as [`RestError`].
//!
//! # Example
//!
//! ```no_run
//! use zenq_rest::{Credentials, ZenqClient};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Paper-money environment by default
//!     let client = ZenqClient::new(Credentials::new("key", "secret"));
//!
//!     let result = client
//!         .place_limit_order(Decimal::new(1, 4), "buy", Decimal::from(50000), "BTCUSDT")
//!         .await?;
//!
//!     if result.is_error {
//!         eprintln!("rejected: {} {}", result.status_code, result.message);
//!     } else {
//!         println!("order placed: {}", result.order_id);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod response;

// Re-export main types
pub use auth::Credentials;
pub use client::ZenqClient;
pub use config::{ClientConfig, Environment};
pub use error::{RestError, RestResult};
pub use response::{BalanceResult, StandardResult};

// Re-export the shared types callers need at every call site
pub use zenq_types::{OrderSide, SideRef, Ticker, TickerRef};
