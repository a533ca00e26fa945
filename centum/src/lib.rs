//! # centum
//!
//! Fixed-point money for Rust: amounts are `i64` counts of a currency's
//! smallest unit, arithmetic is currency-checked and overflow-checked, and
//! every operation that needs a finer result rounds through one shared
//! engine with a choice of rounding modes.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than the individual
//! `centum-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use centum::{Money, Settings};
//!
//! let settings = Settings::default();
//! let price = Money::new(1099, "USD")?;
//! let total = price.multiply(3.0, &settings);
//! assert_eq!(total.format(), "$32.97");
//!
//! let brl = Money::new(123, "BRL")?;
//! assert_eq!(brl.format(), "R$1,25");
//! # Ok::<(), centum::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use centum_core as core;

/// The rounding engine.
pub use centum_math as math;

/// Currencies, money, conversion, formatting, and collections.
pub use centum_currencies as currencies;

pub use centum_core::{Error, Result};
pub use centum_currencies::{
    collections, Currency, ExchangeRate, ExchangeRateSource, ExchangeRateTable, FormatOptions,
    Money, Settings, SymbolPosition,
};
pub use centum_math::RoundingMode;
