//! Rendering money as text.

use centum_core::utilities::{group_digits, zero_pad};

use crate::currency::{Currency, SymbolPosition};
use crate::money::Money;

/// Options controlling how [`Money::format_with`] renders an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Display the currency symbol.
    pub use_symbol: bool,
    /// Display the fractional digits (ignored for zero-precision currencies).
    pub show_cents: bool,
    /// Where the symbol goes.
    pub symbol_position: SymbolPosition,
    /// Separator between groups of three integer digits; empty for none.
    pub group_separator: String,
    /// Separator between the integer and fractional digits.
    pub decimal_separator: String,
}

impl FormatOptions {
    /// The conventional rendering of `currency`: symbol, cents, and the
    /// currency's own separators and symbol placement.
    pub fn for_currency(currency: &Currency) -> Self {
        Self {
            use_symbol: true,
            show_cents: true,
            symbol_position: currency.symbol_position,
            group_separator: currency.group_separator.to_owned(),
            decimal_separator: currency.decimal_separator.to_owned(),
        }
    }
}

impl Money {
    /// Render with the currency's default options (`$10.99`, `¥1,000`,
    /// `1 234,56 kr`).
    pub fn format(&self) -> String {
        self.format_with(&FormatOptions::for_currency(self.currency()))
    }

    /// Render with custom options.
    ///
    /// Cash-rounded currencies are settled first, so `R$1,23` renders as
    /// `R$1,25`.
    pub fn format_with(&self, opts: &FormatOptions) -> String {
        let currency = self.currency();
        let amount = self.settled().amount();
        let scale = currency.fractions_per_unit().unsigned_abs();
        let magnitude = amount.unsigned_abs();
        let units = (magnitude / scale).to_string();

        let mut out = String::new();
        if amount < 0 {
            out.push('-');
        }
        if opts.use_symbol && opts.symbol_position == SymbolPosition::Before {
            out.push_str(currency.symbol);
        }
        out.push_str(&group_digits(&units, &opts.group_separator));
        if opts.show_cents && currency.precision > 0 {
            out.push_str(&opts.decimal_separator);
            out.push_str(&zero_pad(magnitude % scale, usize::from(currency.precision)));
        }
        if opts.use_symbol && opts.symbol_position == SymbolPosition::After {
            out.push(' ');
            out.push_str(currency.symbol);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(amount: i64, code: &str) -> Money {
        Money::new(amount, code).unwrap()
    }

    #[test]
    fn default_formats() {
        assert_eq!(money(1099, "USD").format(), "$10.99");
        assert_eq!(money(1000, "JPY").format(), "¥1,000");
        assert_eq!(money(123456789, "USD").format(), "$1,234,567.89");
        assert_eq!(money(123456789, "CHF").format(), "Fr.1'234'567.89");
        assert_eq!(money(123456, "SEK").format(), "1 234,56 kr");
        assert_eq!(money(2050, "EUR").format(), "€20,50");
        assert_eq!(money(5, "USD").format(), "$0.05");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(money(-500, "USD").format(), "-$5.00");
        assert_eq!(money(-5, "USD").format(), "-$0.05");
        assert_eq!(money(i64::MIN, "JPY").format(), "-¥9,223,372,036,854,775,808");
    }

    #[test]
    fn cash_rounded_currency_is_settled() {
        assert_eq!(money(123, "BRL").format(), "R$1,25");
        assert_eq!(money(1023, "BRL").format(), "R$10,25");
        assert_eq!(money(198, "BRL").format(), "R$2,00");
    }

    #[test]
    fn custom_options() {
        let amount = money(123456789, "USD");
        let european = FormatOptions {
            use_symbol: true,
            show_cents: true,
            symbol_position: SymbolPosition::After,
            group_separator: ".".into(),
            decimal_separator: ",".into(),
        };
        assert_eq!(amount.format_with(&european), "1.234.567,89 $");

        let minimal = FormatOptions {
            use_symbol: false,
            show_cents: true,
            symbol_position: SymbolPosition::Before,
            group_separator: String::new(),
            decimal_separator: ".".into(),
        };
        assert_eq!(amount.format_with(&minimal), "1234567.89");

        let yen = FormatOptions {
            use_symbol: true,
            show_cents: false,
            symbol_position: SymbolPosition::Before,
            group_separator: ",".into(),
            decimal_separator: String::new(),
        };
        assert_eq!(money(1000, "JPY").format_with(&yen), "¥1,000");
        assert_eq!(money(1099, "USD").format_with(&yen), "$10");
    }

    #[test]
    fn display_matches_format() {
        assert_eq!(money(1099, "USD").to_string(), "$10.99");
    }
}
