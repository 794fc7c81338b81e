//! Order direction and the spellings ZenQ accepts for it

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Resolve a polymorphic side reference
    ///
    /// String matching is case-sensitive against the literal tokens "buy"
    /// and "sell"; integers must be exactly +1 or -1. Anything else is
    /// `None`, which callers must treat as a validation failure before
    /// any network round trip is spent.
    pub fn resolve(side: impl Into<SideRef>) -> Option<OrderSide> {
        match side.into() {
            SideRef::Token(s) => match s.as_str() {
                "buy" => Some(Self::Buy),
                "sell" => Some(Self::Sell),
                _ => None,
            },
            SideRef::Signed(1) => Some(Self::Buy),
            SideRef::Signed(-1) => Some(Self::Sell),
            SideRef::Signed(_) => None,
        }
    }

    /// Signed integer form transmitted as `apiOrderType` (+1 buy, -1 sell)
    pub fn signum(&self) -> i8 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Polymorphic reference to an order side
///
/// Call sites accept `impl Into<SideRef>`, so the direction can be passed
/// as the token "buy"/"sell", as +1/-1, or as an [`OrderSide`] directly.
#[derive(Debug, Clone)]
pub enum SideRef {
    /// Textual token, "buy" or "sell"
    Token(String),
    /// Signed integer, +1 (buy) or -1 (sell)
    Signed(i64),
}

impl From<&str> for SideRef {
    fn from(s: &str) -> Self {
        Self::Token(s.to_string())
    }
}

impl From<String> for SideRef {
    fn from(s: String) -> Self {
        Self::Token(s)
    }
}

impl From<i64> for SideRef {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<OrderSide> for SideRef {
    fn from(side: OrderSide) -> Self {
        Self::Signed(side.signum() as i64)
    }
}
