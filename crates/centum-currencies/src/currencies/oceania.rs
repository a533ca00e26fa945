//! Oceania currencies.

use crate::currency::{CashRounding, Currency, SymbolPosition};

/// Australian Dollar.
pub static AUD: Currency = Currency {
    name: "Australian Dollar",
    code: "AUD",
    numeric_code: 36,
    symbol: "$",
    precision: 2,
    singular_name: "Dollar",
    plural_name: "Dollars",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// New Zealand Dollar.
pub static NZD: Currency = Currency {
    name: "New Zealand Dollar",
    code: "NZD",
    numeric_code: 554,
    symbol: "$",
    precision: 2,
    singular_name: "Dollar",
    plural_name: "Dollars",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};
