//! Pre-defined world currencies, organized by region, and the registry that
//! resolves ISO codes to them.

pub mod america;
pub mod asia;
pub mod europe;
pub mod oceania;

// Re-export all currencies at the `currencies` module level for convenience.
pub use america::*;
pub use asia::*;
pub use europe::*;
pub use oceania::*;

use crate::currency::Currency;
use centum_core::errors::{Error, Result};

static REGISTRY: [&Currency; 22] = [
    // Major world currencies
    &USD, &EUR, &JPY, &GBP, &CHF,
    // South America
    &BRL, &ARS, &UYU, &CLP,
    // North America
    &CAD, &MXN,
    // Asia-Pacific
    &CNY, &HKD, &SGD, &INR, &KRW, &TWD, &AUD, &NZD,
    // Europe (non-EUR)
    &SEK, &NOK, &DKK,
];

/// Every registered currency.
pub fn all() -> &'static [&'static Currency] {
    &REGISTRY
}

/// Resolve an ISO code to its registered [`Currency`].
///
/// Codes are matched exactly (`"usd"` is not `"USD"`).  An empty code is a
/// [`Error::Validation`]; any other unknown code is
/// [`Error::CurrencyNotFound`].
pub fn lookup(code: &str) -> Result<&'static Currency> {
    if code.is_empty() {
        return Err(Error::validation(
            "currency code",
            "currency code cannot be empty",
        ));
    }
    REGISTRY
        .iter()
        .copied()
        .find(|c| c.code == code)
        .ok_or_else(|| Error::CurrencyNotFound(code.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn usd_properties() {
        assert_eq!(USD.code, "USD");
        assert_eq!(USD.numeric_code, 840);
        assert_eq!(USD.precision, 2);
    }

    #[test]
    fn eur_display() {
        assert_eq!(format!("{}", &EUR), "EUR");
    }

    #[test]
    fn jpy_no_fractions() {
        assert_eq!(JPY.precision, 0);
        assert_eq!(JPY.fractions_per_unit(), 1);
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<&str> = all().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn lookup_finds_every_registered_code() {
        for c in all() {
            assert_eq!(lookup(c.code).unwrap().code, c.code);
        }
    }

    #[test]
    fn lookup_rejects_unknown_and_empty_codes() {
        assert_eq!(
            lookup("INVALID"),
            Err(Error::CurrencyNotFound("INVALID".into()))
        );
        assert_eq!(lookup("usd"), Err(Error::CurrencyNotFound("usd".into())));
        assert!(matches!(
            lookup(""),
            Err(Error::Validation { field: "currency code", .. })
        ));
    }

    #[test]
    fn only_brl_is_cash_rounded() {
        use crate::currency::CashRounding;
        let cash: Vec<&str> = all()
            .iter()
            .filter(|c| c.cash_rounding == CashRounding::NearestFiveCents)
            .map(|c| c.code)
            .collect();
        assert_eq!(cash, vec!["BRL"]);
    }
}
