//! `Currency`: definition and display metadata for a currency.

use std::hash::{Hash, Hasher};

use centum_core::{Amount, Precision};
use centum_math::rounding::{pow10, settle_nearest_five_cents};

/// Where the currency symbol goes relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SymbolPosition {
    /// `$10.99`
    Before,
    /// `10,99 kr`
    After,
}

/// Post-processing applied to settled amounts of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CashRounding {
    /// Amounts are used as computed.
    #[default]
    None,
    /// Settled amounts snap to the nearest five smallest units.
    NearestFiveCents,
}

/// Data describing a single currency.
///
/// Two descriptors are the same currency when their ISO codes match; the
/// remaining fields are metadata and take no part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Currency {
    /// Full name (e.g. "U.S. Dollar").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// ISO 4217 numeric code (e.g. 840).
    pub numeric_code: u16,
    /// Symbol used in display (e.g. "$").
    pub symbol: &'static str,
    /// Number of fractional digits (2 for cents, 0 for yen).
    pub precision: Precision,
    /// Name of one unit (e.g. "Dollar").
    pub singular_name: &'static str,
    /// Name of several units (e.g. "Dollars").
    pub plural_name: &'static str,
    /// Thousands separator used by default formatting.
    pub group_separator: &'static str,
    /// Decimal separator used by default formatting.
    pub decimal_separator: &'static str,
    /// Default symbol placement.
    pub symbol_position: SymbolPosition,
    /// Settlement rounding applied to final amounts.
    pub cash_rounding: CashRounding,
}

impl Currency {
    /// Number of smallest units per whole unit (`10^precision`).
    pub fn fractions_per_unit(&self) -> Amount {
        pow10(self.precision)
    }

    /// `true` if this currency and `other` share an ISO code.
    pub fn same_as(&self, other: &Currency) -> bool {
        self.code == other.code
    }

    /// Apply this currency's settlement rounding to a final amount.
    pub fn settle(&self, amount: Amount) -> Amount {
        match self.cash_rounding {
            CashRounding::None => amount,
            CashRounding::NearestFiveCents => settle_nearest_five_cents(amount),
        }
    }

    /// The singular or plural unit name appropriate for `units` whole units.
    pub fn unit_name(&self, units: Amount) -> &'static str {
        if units.unsigned_abs() == 1 {
            self.singular_name
        } else {
            self.plural_name
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currencies::{BRL, JPY, USD};

    #[test]
    fn equality_is_by_code() {
        let lookalike = Currency {
            name: "Greenback",
            symbol: "US$",
            ..USD.clone()
        };
        assert_eq!(lookalike, USD);
        assert_ne!(USD, JPY);
    }

    #[test]
    fn fractions_follow_precision() {
        assert_eq!(USD.fractions_per_unit(), 100);
        assert_eq!(JPY.fractions_per_unit(), 1);
    }

    #[test]
    fn settle_only_touches_cash_rounded_currencies() {
        assert_eq!(USD.settle(123), 123);
        assert_eq!(BRL.settle(123), 125);
        assert_eq!(BRL.settle(-1_023), -1_025);
    }

    #[test]
    fn unit_names() {
        assert_eq!(USD.unit_name(1), "Dollar");
        assert_eq!(USD.unit_name(-1), "Dollar");
        assert_eq!(USD.unit_name(3), "Dollars");
        assert_eq!(USD.unit_name(i64::MIN), "Dollars");
    }
}
