//! European currencies.

use crate::currency::{CashRounding, Currency, SymbolPosition};

/// Euro.
pub static EUR: Currency = Currency {
    name: "Euro",
    code: "EUR",
    numeric_code: 978,
    symbol: "€",
    precision: 2,
    singular_name: "Euro",
    plural_name: "Euros",
    group_separator: ".",
    decimal_separator: ",",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// British Pound.
pub static GBP: Currency = Currency {
    name: "British Pound",
    code: "GBP",
    numeric_code: 826,
    symbol: "£",
    precision: 2,
    singular_name: "Pound",
    plural_name: "Pounds",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Swiss Franc.
pub static CHF: Currency = Currency {
    name: "Swiss Franc",
    code: "CHF",
    numeric_code: 756,
    symbol: "Fr.",
    precision: 2,
    singular_name: "Franc",
    plural_name: "Francs",
    group_separator: "'",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Swedish Krona.
pub static SEK: Currency = Currency {
    name: "Swedish Krona",
    code: "SEK",
    numeric_code: 752,
    symbol: "kr",
    precision: 2,
    singular_name: "Krona",
    plural_name: "Kronor",
    group_separator: " ",
    decimal_separator: ",",
    symbol_position: SymbolPosition::After,
    cash_rounding: CashRounding::None,
};

/// Norwegian Krone.
pub static NOK: Currency = Currency {
    name: "Norwegian Krone",
    code: "NOK",
    numeric_code: 578,
    symbol: "kr",
    precision: 2,
    singular_name: "Krone",
    plural_name: "Kroner",
    group_separator: " ",
    decimal_separator: ",",
    symbol_position: SymbolPosition::After,
    cash_rounding: CashRounding::None,
};

/// Danish Krone.
pub static DKK: Currency = Currency {
    name: "Danish Krone",
    code: "DKK",
    numeric_code: 208,
    symbol: "kr",
    precision: 2,
    singular_name: "Krone",
    plural_name: "Kroner",
    group_separator: ".",
    decimal_separator: ",",
    symbol_position: SymbolPosition::After,
    cash_rounding: CashRounding::None,
};
