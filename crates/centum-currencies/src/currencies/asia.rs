//! Asian currencies.

use crate::currency::{CashRounding, Currency, SymbolPosition};

/// Japanese Yen.
pub static JPY: Currency = Currency {
    name: "Japanese Yen",
    code: "JPY",
    numeric_code: 392,
    symbol: "¥",
    precision: 0,
    singular_name: "Yen",
    plural_name: "Yen",
    group_separator: ",",
    decimal_separator: "",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Chinese Yuan.
pub static CNY: Currency = Currency {
    name: "Chinese Yuan",
    code: "CNY",
    numeric_code: 156,
    symbol: "¥",
    precision: 2,
    singular_name: "Yuan",
    plural_name: "Yuan",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Hong Kong Dollar.
pub static HKD: Currency = Currency {
    name: "Hong Kong Dollar",
    code: "HKD",
    numeric_code: 344,
    symbol: "HK$",
    precision: 2,
    singular_name: "Dollar",
    plural_name: "Dollars",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Singapore Dollar.
pub static SGD: Currency = Currency {
    name: "Singapore Dollar",
    code: "SGD",
    numeric_code: 702,
    symbol: "$",
    precision: 2,
    singular_name: "Dollar",
    plural_name: "Dollars",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Indian Rupee.
pub static INR: Currency = Currency {
    name: "Indian Rupee",
    code: "INR",
    numeric_code: 356,
    symbol: "₹",
    precision: 2,
    singular_name: "Rupee",
    plural_name: "Rupees",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// South Korean Won.
pub static KRW: Currency = Currency {
    name: "South Korean Won",
    code: "KRW",
    numeric_code: 410,
    symbol: "₩",
    precision: 0,
    singular_name: "Won",
    plural_name: "Won",
    group_separator: ",",
    decimal_separator: "",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// New Taiwan Dollar.
pub static TWD: Currency = Currency {
    name: "New Taiwan Dollar",
    code: "TWD",
    numeric_code: 901,
    symbol: "NT$",
    precision: 2,
    singular_name: "Dollar",
    plural_name: "Dollars",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};
