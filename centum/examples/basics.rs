//! Creating, combining, comparing, and rendering money.
//!
//! Run with `cargo run -p centum --example basics`.

use centum::{FormatOptions, Money, Settings, SymbolPosition};

fn main() -> centum::Result<()> {
    env_logger::init();
    let settings = Settings::default();

    let dollars = Money::new(1099, "USD")?;
    let euros = Money::from_f64(20.50, "EUR", &settings)?;
    println!("Formatted amounts: {} {}", dollars, euros);

    let price = Money::new(500, "USD")?;
    let tax = Money::new(45, "USD")?;
    println!("Total with tax: {}", price.add(&tax)?);

    let original = Money::new(2500, "USD")?;
    let discounted = original.apply_percentage_discount(20.0, &settings)?;
    println!("After 20% discount: {discounted}");

    let ten = Money::new(1000, "USD")?;
    let twenty = Money::new(2000, "USD")?;
    println!("Is {ten} less than {twenty}? {}", ten.less_than(&twenty)?);

    let yen = Money::new(1000, "JPY")?;
    println!("Default yen format: {yen}");
    let custom = FormatOptions {
        use_symbol: true,
        show_cents: false,
        symbol_position: SymbolPosition::Before,
        group_separator: ",".into(),
        decimal_separator: String::new(),
    };
    println!("Custom yen format: {}", yen.format_with(&custom));

    let profit = Money::new(1500, "USD")?;
    let loss = Money::new(-500, "USD")?;
    println!("Is {profit} positive? {}", profit.is_positive());
    println!("Is {loss} negative? {} (sign {})", loss.is_negative(), loss.sign());
    println!("Absolute value of {loss}: {}", loss.abs());

    let item = Money::new(399, "USD")?;
    println!("Total for 3 items: {}", item.multiply(3.0, &settings));

    let real = Money::new(123, "BRL")?;
    println!("Brazilian Real with cash rounding: {real}");

    if let Err(err) = ten.add(&Money::new(1000, "EUR")?) {
        println!("Adding different currencies: {err}");
    }
    if let Err(err) = Money::new(1000, "INVALID") {
        println!("Invalid currency: {err}");
    }
    if let Err(err) = ten.apply_percentage_discount(150.0, &settings) {
        println!("Invalid discount percentage: {err}");
    }
    Ok(())
}
