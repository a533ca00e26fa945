//! # centum-currencies
//!
//! Currency definitions and the [`Money`] value type: currency-checked,
//! overflow-checked arithmetic, conversion between currencies, text
//! rendering, and aggregate algorithms over same-currency sequences.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency data and definitions.
pub mod currency;

/// Pre-defined world currencies and the code registry.
pub mod currencies;

/// The money value type.
pub mod money;

/// Configuration consulted by money operations.
pub mod settings;

/// Exchange rates and currency conversion.
pub mod exchange_rate;

/// Text rendering of money.
pub mod format;

/// Algorithms over same-currency sequences.
pub mod collections;

pub use currency::{CashRounding, Currency, SymbolPosition};
pub use exchange_rate::{ExchangeRate, ExchangeRateSource, ExchangeRateTable};
pub use format::FormatOptions;
pub use money::Money;
pub use settings::Settings;
