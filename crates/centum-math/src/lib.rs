//! # centum-math
//!
//! The fixed-point rounding engine shared by every centum operation that
//! re-quantizes an amount: rounding modes, the two nearest-five-cents passes,
//! and the integer scaling helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rounding modes and fixed-point scaling.
pub mod rounding;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use rounding::{
    pow10, requantize, round, scale_to_i64, settle_nearest_five_cents, snap_cash_band,
    RoundingMode,
};
