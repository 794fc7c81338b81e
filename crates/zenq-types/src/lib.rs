//! Shared types for the ZenQ exchange API
//!
//! This crate provides the core type definitions used across the ZenQ SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Ticker`] - A tradeable market pair with its exchange-assigned id
//! - [`TickerRegistry`] - O(1) lookup over the compiled-in ticker universe
//! - [`TickerRef`] - Polymorphic ticker reference (symbol, id, or record)
//! - [`OrderSide`], [`SideRef`] - Order direction and its accepted spellings
//! - [`status`] - Helpers for ZenQ's "R"-prefixed response codes

pub mod side;
pub mod status;
pub mod ticker;

// Re-export commonly used types
pub use side::{OrderSide, SideRef};
pub use ticker::{resolve_to_id, resolve_to_name, Ticker, TickerRef, TickerRegistry};
