//! Aggregates over same-currency sequences.
//!
//! Run with `cargo run -p centum --example collections`.

use centum::{collections, Money, Settings};

fn show(label: &str, values: &[Money]) {
    let rendered: Vec<String> = values.iter().map(Money::format).collect();
    println!("{label}: {}", rendered.join(" "));
}

fn main() -> centum::Result<()> {
    env_logger::init();
    let settings = Settings::default();

    let mut payments = [1000, 2000, -500, 1500]
        .into_iter()
        .map(|cents| Money::new(cents, "USD"))
        .collect::<centum::Result<Vec<_>>>()?;

    println!("Sum of payments: {}", collections::sum(&payments)?);
    println!("Average payment: {}", collections::average(&payments, &settings)?);

    collections::sort(&mut payments)?;
    show("Sorted payments (ascending)", &payments);
    collections::sort_descending(&mut payments)?;
    show("Sorted payments (descending)", &payments);

    show(
        "Positive payments only",
        &collections::filter(&payments, collections::is_positive),
    );
    let doubled = collections::map(&payments, |m| m.multiply(2.0, &settings))?;
    show("Doubled payments", &doubled);

    if let Err(err) = collections::sum(&[]) {
        println!("Sum of empty slice: {err}");
    }
    let converted = collections::map(&payments, |m| {
        m.convert("EUR", 0.85, &settings).unwrap_or(*m)
    });
    if let Err(err) = converted {
        println!("Map changing currency: {err}");
    }
    log::info!("collections demo finished");
    Ok(())
}
