//! # centum-core
//!
//! Core types, error definitions, and small helpers for centum.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace: type aliases for amounts and rates, the
//! error taxonomy with its `ensure!` / `fail!` macros, and text utilities
//! used when rendering amounts.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// An amount expressed in a currency's smallest unit (e.g. cents).
pub type Amount = i64;

/// Floating-point type used for factors and approximations.
pub type Real = f64;

/// An exchange rate: units of the target currency bought by one unit of the
/// source currency.
pub type Rate = Real;

/// Number of fractional digits a currency uses.
pub type Precision = u8;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
