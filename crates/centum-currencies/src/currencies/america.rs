//! Americas currencies.

use crate::currency::{CashRounding, Currency, SymbolPosition};

/// U.S. Dollar.
pub static USD: Currency = Currency {
    name: "U.S. Dollar",
    code: "USD",
    numeric_code: 840,
    symbol: "$",
    precision: 2,
    singular_name: "Dollar",
    plural_name: "Dollars",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Canadian Dollar.
pub static CAD: Currency = Currency {
    name: "Canadian Dollar",
    code: "CAD",
    numeric_code: 124,
    symbol: "$",
    precision: 2,
    singular_name: "Dollar",
    plural_name: "Dollars",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Mexican Peso.
pub static MXN: Currency = Currency {
    name: "Mexican Peso",
    code: "MXN",
    numeric_code: 484,
    symbol: "$",
    precision: 2,
    singular_name: "Peso",
    plural_name: "Pesos",
    group_separator: ",",
    decimal_separator: ".",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Brazilian Real.
///
/// Settled amounts are cash-rounded to the nearest five centavos.
pub static BRL: Currency = Currency {
    name: "Brazilian Real",
    code: "BRL",
    numeric_code: 986,
    symbol: "R$",
    precision: 2,
    singular_name: "Real",
    plural_name: "Reais",
    group_separator: ".",
    decimal_separator: ",",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::NearestFiveCents,
};

/// Argentine Peso.
pub static ARS: Currency = Currency {
    name: "Argentine Peso",
    code: "ARS",
    numeric_code: 32,
    symbol: "$",
    precision: 0,
    singular_name: "Peso",
    plural_name: "Pesos",
    group_separator: ".",
    decimal_separator: ",",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Uruguayan Peso.
pub static UYU: Currency = Currency {
    name: "Uruguayan Peso",
    code: "UYU",
    numeric_code: 858,
    symbol: "$U",
    precision: 2,
    singular_name: "Peso",
    plural_name: "Pesos",
    group_separator: ".",
    decimal_separator: ",",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};

/// Chilean Peso.
pub static CLP: Currency = Currency {
    name: "Chilean Peso",
    code: "CLP",
    numeric_code: 152,
    symbol: "$",
    precision: 0,
    singular_name: "Peso",
    plural_name: "Pesos",
    group_separator: ".",
    decimal_separator: "",
    symbol_position: SymbolPosition::Before,
    cash_rounding: CashRounding::None,
};
