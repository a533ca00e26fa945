//! Direct and reference-currency conversion with an in-memory rate table.
//!
//! Run with `RUST_LOG=debug cargo run -p centum --example conversion` to see
//! each conversion leg.

use std::sync::Arc;

use centum::{ExchangeRateTable, FormatOptions, Money, Settings, SymbolPosition};

fn main() -> centum::Result<()> {
    env_logger::init();

    let rates = ExchangeRateTable::new()
        .with_rate("USD", "EUR", 0.85)?
        .with_rate("USD", "GBP", 0.73)?
        .with_rate("USD", "JPY", 110.0)?
        .with_rate("EUR", "USD", 1.18)?
        .with_rate("EUR", "GBP", 0.86)?
        .with_rate("EUR", "JPY", 129.5)?;
    let settings = Settings::default()
        .with_rate_source(Arc::new(rates))
        .with_float_warning(false);

    let usd = Money::from_f64(100.00, "USD", &settings)?;
    let eur = Money::from_f64(100.00, "EUR", &settings)?;
    let gbp = Money::from_f64(100.00, "GBP", &settings)?;
    let jpy = Money::from_f64(10_000.0, "JPY", &settings)?;
    println!("Original amounts: {usd} {eur} {gbp} {jpy}");

    println!("EUR 100 to USD: {}", eur.convert("USD", 1.18, &settings)?);
    let today = chrono::Local::now().date_naive();
    println!(
        "EUR 100 to JPY via USD: {}",
        eur.convert_via_reference("JPY", "USD", Some(today), &settings)?
    );

    let amount = Money::from_f64(1_234_567.89, "USD", &settings)?;
    println!("Default format: {amount}");
    let european = FormatOptions {
        use_symbol: true,
        show_cents: true,
        symbol_position: SymbolPosition::After,
        group_separator: ".".into(),
        decimal_separator: ",".into(),
    };
    println!("European style: {}", amount.format_with(&european));
    let minimal = FormatOptions {
        use_symbol: false,
        group_separator: String::new(),
        decimal_separator: ".".into(),
        ..european
    };
    println!("Minimal style: {}", amount.format_with(&minimal));

    if let Err(err) = usd.add(&eur) {
        println!("Currency mismatch error: {err}");
    }

    let brl = Money::from_f64(10.23, "BRL", &settings)?;
    println!("Brazilian Real with cash rounding: {brl}");
    let yen = Money::from_f64(1234.56, "JPY", &settings)?;
    println!("Japanese Yen (no decimals): {yen}");
    let chf = Money::from_f64(1_234_567.89, "CHF", &settings)?;
    println!("Swiss Franc grouping: {chf}");

    let no_source = Settings::default();
    if let Err(err) = eur.convert_via_reference("JPY", "USD", None, &no_source) {
        println!("Without a rate source: {err}");
    }
    Ok(())
}
