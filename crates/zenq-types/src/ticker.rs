//! Trading pair registry and identifier resolution
//!
//! ZenQ identifies each market pair both by an uppercase symbol and a
//! numeric exchange-assigned id. The universe is a compiled-in constant:
//! it is not fetched from the exchange at runtime. Some endpoints expect
//! the numeric id on the wire (place/modify order) while others expect
//! the symbol name (search, order-list filtering), so resolution exposes
//! both an id-returning and a name-returning entry point.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// A tradeable market pair on the ZenQ exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Ticker {
    /// Exchange-assigned numeric id
    pub id: u32,
    /// Uppercase pair symbol (e.g. "BTCUSDT")
    pub name: &'static str,
}

impl Ticker {
    pub const AAVEUSDT: Ticker = Ticker { id: 33853, name: "AAVEUSDT" };
    pub const ADAUSDC: Ticker = Ticker { id: 40895, name: "ADAUSDC" };
    pub const ADAUSDT: Ticker = Ticker { id: 33049, name: "ADAUSDT" };
    pub const ALGOUSDC: Ticker = Ticker { id: 40886, name: "ALGOUSDC" };
    pub const ATOMUSDC: Ticker = Ticker { id: 40917, name: "ATOMUSDC" };
    pub const BCHUSDC: Ticker = Ticker { id: 40874, name: "BCHUSDC" };
    pub const BCHUSDT: Ticker = Ticker { id: 33419, name: "BCHUSDT" };
    pub const BNBUSDC: Ticker = Ticker { id: 40876, name: "BNBUSDC" };
    pub const BNBUSDT: Ticker = Ticker { id: 32770, name: "BNBUSDT" };
    pub const BTCUSDC: Ticker = Ticker { id: 40927, name: "BTCUSDC" };
    pub const BTCUSDT: Ticker = Ticker { id: 32777, name: "BTCUSDT" };
    pub const DOGEUSDC: Ticker = Ticker { id: 40932, name: "DOGEUSDC" };
    pub const DOGEUSDT: Ticker = Ticker { id: 33316, name: "DOGEUSDT" };
    pub const DOTUSDC: Ticker = Ticker { id: 40911, name: "DOTUSDC" };
    pub const DOTUSDT: Ticker = Ticker { id: 33715, name: "DOTUSDT" };
    pub const ETHUSDC: Ticker = Ticker { id: 40913, name: "ETHUSDC" };
    pub const ETHUSDT: Ticker = Ticker { id: 32811, name: "ETHUSDT" };
    pub const FTMUSDC: Ticker = Ticker { id: 40920, name: "FTMUSDC" };
    pub const FTMUSDT: Ticker = Ticker { id: 33289, name: "FTMUSDT" };
    pub const INJUSDC: Ticker = Ticker { id: 40899, name: "INJUSDC" };
    pub const LINKUSDC: Ticker = Ticker { id: 40867, name: "LINKUSDC" };
    pub const LINKUSDT: Ticker = Ticker { id: 33185, name: "LINKUSDT" };
    pub const LTCUSDC: Ticker = Ticker { id: 40907, name: "LTCUSDC" };
    pub const LTCUSDT: Ticker = Ticker { id: 32845, name: "LTCUSDT" };
    pub const MANAUSDT: Ticker = Ticker { id: 33662, name: "MANAUSDT" };
    pub const MATICUSDC: Ticker = Ticker { id: 40939, name: "MATICUSDC" };
    pub const MATICUSDT: Ticker = Ticker { id: 33257, name: "MATICUSDT" };
    pub const ONTUSDC: Ticker = Ticker { id: 40914, name: "ONTUSDC" };
    pub const SANDUSDT: Ticker = Ticker { id: 33702, name: "SANDUSDT" };
    pub const SHIBUSDT: Ticker = Ticker { id: 34180, name: "SHIBUSDT" };
    pub const SOLUSDC: Ticker = Ticker { id: 40905, name: "SOLUSDC" };
    pub const SOLUSDT: Ticker = Ticker { id: 33537, name: "SOLUSDT" };
    pub const TRXUSDT: Ticker = Ticker { id: 33101, name: "TRXUSDT" };
    pub const USDCUSDT: Ticker = Ticker { id: 33176, name: "USDCUSDT" };
    pub const WLDUSDC: Ticker = Ticker { id: 40887, name: "WLDUSDC" };

    /// All pairs currently listed on the exchange
    pub fn all() -> &'static [Ticker] {
        &ALL_TICKERS
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

static ALL_TICKERS: [Ticker; 35] = [
    Ticker::AAVEUSDT,
    Ticker::ADAUSDC,
    Ticker::ADAUSDT,
    Ticker::ALGOUSDC,
    Ticker::ATOMUSDC,
    Ticker::BCHUSDC,
    Ticker::BCHUSDT,
    Ticker::BNBUSDC,
    Ticker::BNBUSDT,
    Ticker::BTCUSDC,
    Ticker::BTCUSDT,
    Ticker::DOGEUSDC,
    Ticker::DOGEUSDT,
    Ticker::DOTUSDC,
    Ticker::DOTUSDT,
    Ticker::ETHUSDC,
    Ticker::ETHUSDT,
    Ticker::FTMUSDC,
    Ticker::FTMUSDT,
    Ticker::INJUSDC,
    Ticker::LINKUSDC,
    Ticker::LINKUSDT,
    Ticker::LTCUSDC,
    Ticker::LTCUSDT,
    Ticker::MANAUSDT,
    Ticker::MATICUSDC,
    Ticker::MATICUSDT,
    Ticker::ONTUSDC,
    Ticker::SANDUSDT,
    Ticker::SHIBUSDT,
    Ticker::SOLUSDC,
    Ticker::SOLUSDT,
    Ticker::TRXUSDT,
    Ticker::USDCUSDT,
    Ticker::WLDUSDC,
];

/// Dual-keyed index over the compiled-in ticker list
///
/// The numeric-id space and the symbol space are kept in separate maps so
/// the two key spaces can never collide. Built once at first use and
/// read-only afterward, so shared access from concurrent tasks is safe.
pub struct TickerRegistry {
    by_id: HashMap<u32, &'static Ticker>,
    by_name: HashMap<&'static str, &'static Ticker>,
}

impl TickerRegistry {
    fn build() -> Self {
        let mut by_id = HashMap::with_capacity(ALL_TICKERS.len());
        let mut by_name = HashMap::with_capacity(ALL_TICKERS.len());

        for ticker in &ALL_TICKERS {
            by_id.insert(ticker.id, ticker);
            by_name.insert(ticker.name, ticker);
        }

        // Every id and every name maps to exactly one record.
        debug_assert_eq!(by_id.len(), ALL_TICKERS.len());
        debug_assert_eq!(by_name.len(), ALL_TICKERS.len());

        Self { by_id, by_name }
    }

    /// Get the process-wide registry instance
    pub fn global() -> &'static TickerRegistry {
        static REGISTRY: OnceLock<TickerRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::build)
    }

    /// Look up a pair by its exchange-assigned numeric id
    pub fn lookup_by_id(&self, id: u32) -> Option<&'static Ticker> {
        self.by_id.get(&id).copied()
    }

    /// Look up a pair by its uppercase symbol (e.g. "BTCUSDT")
    pub fn lookup_by_name(&self, name: &str) -> Option<&'static Ticker> {
        self.by_name.get(name).copied()
    }

    /// Number of listed pairs
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// True if the registry holds no pairs
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Polymorphic reference to a ticker
///
/// Call sites accept `impl Into<TickerRef>`, so a pair can be passed as a
/// symbol string, a numeric id, or one of the [`Ticker`] constants.
#[derive(Debug, Clone)]
pub enum TickerRef {
    /// Pair symbol, e.g. "BTCUSDT"
    Symbol(String),
    /// Exchange-assigned numeric id
    Id(u32),
    /// A registry record
    Record(Ticker),
}

impl From<&str> for TickerRef {
    fn from(s: &str) -> Self {
        Self::Symbol(s.to_string())
    }
}

impl From<String> for TickerRef {
    fn from(s: String) -> Self {
        Self::Symbol(s)
    }
}

impl From<u32> for TickerRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<Ticker> for TickerRef {
    fn from(ticker: Ticker) -> Self {
        Self::Record(ticker)
    }
}

impl From<&Ticker> for TickerRef {
    fn from(ticker: &Ticker) -> Self {
        Self::Record(*ticker)
    }
}

/// Resolve a ticker reference to its exchange-assigned numeric id
///
/// A record is taken at face value; a symbol is looked up by name; an id
/// is looked up to validate that the pair actually exists. `None` means
/// the reference matches no registry entry and must be treated as a
/// client-side validation failure, not a network error.
pub fn resolve_to_id(ticker: impl Into<TickerRef>) -> Option<u32> {
    match ticker.into() {
        TickerRef::Record(t) => Some(t.id),
        TickerRef::Symbol(s) => TickerRegistry::global().lookup_by_name(&s).map(|t| t.id),
        TickerRef::Id(id) => TickerRegistry::global().lookup_by_id(id).map(|t| t.id),
    }
}

/// Resolve a ticker reference to its uppercase symbol name
///
/// Same resolution rules as [`resolve_to_id`]; endpoints that transmit
/// the symbol string (search, order-list filtering) use this entry point.
pub fn resolve_to_name(ticker: impl Into<TickerRef>) -> Option<&'static str> {
    match ticker.into() {
        TickerRef::Record(t) => Some(t.name),
        TickerRef::Symbol(s) => TickerRegistry::global().lookup_by_name(&s).map(|t| t.name),
        TickerRef::Id(id) => TickerRegistry::global().lookup_by_id(id).map(|t| t.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trip() {
        let registry = TickerRegistry::global();

        for ticker in Ticker::all() {
            let by_id = registry.lookup_by_id(ticker.id).expect("id missing");
            let by_name = registry.lookup_by_name(by_id.name).expect("name missing");
            assert!(std::ptr::eq(by_id, by_name));
        }
    }

    #[test]
    fn test_registry_covers_all_pairs() {
        let registry = TickerRegistry::global();
        assert_eq!(registry.len(), Ticker::all().len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_resolve_symbol_to_id() {
        assert_eq!(resolve_to_id("BTCUSDT"), Some(32777));
        assert_eq!(resolve_to_id("NOTREAL"), None);
    }

    #[test]
    fn test_resolve_id_to_name() {
        assert_eq!(resolve_to_name(32777_u32), Some("BTCUSDT"));
        assert_eq!(resolve_to_name(1_u32), None);
    }

    #[test]
    fn test_resolve_record_passthrough() {
        assert_eq!(resolve_to_id(Ticker::ADAUSDC), Some(40895));
        assert_eq!(resolve_to_name(Ticker::ADAUSDC), Some("ADAUSDC"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(resolve_to_id("btcusdt"), None);
    }

    #[test]
    fn test_ticker_display() {
        assert_eq!(Ticker::ETHUSDT.to_string(), "ETHUSDT");
    }
}
