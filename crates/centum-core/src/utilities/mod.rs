//! Miscellaneous utilities.

/// Text formatting helpers.
pub mod data_formatters;

pub use data_formatters::{group_digits, zero_pad};
