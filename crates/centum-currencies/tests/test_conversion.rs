//! Conversion through injected exchange-rate sources.

use std::sync::{Arc, Mutex};
use std::thread;

use approx::assert_relative_eq;
use chrono::NaiveDate;

use centum_core::{fail, Error, Rate, Result};
use centum_currencies::{ExchangeRateSource, ExchangeRateTable, Money, Settings};
use centum_math::RoundingMode;

/// A source with one rate per day that records every lookup it serves.
#[derive(Debug, Default)]
struct DatedSource {
    lookups: Mutex<Vec<(String, String, Option<NaiveDate>)>>,
}

impl ExchangeRateSource for DatedSource {
    fn rate(&self, from: &str, to: &str, date: Option<NaiveDate>) -> Result<Rate> {
        self.lookups
            .lock()
            .expect("lookup log poisoned")
            .push((from.to_owned(), to.to_owned(), date));
        let rate = match (from, to, date) {
            ("EUR", "USD", Some(d)) if d < day(2024, 1, 1) => 1.10,
            ("EUR", "USD", Some(_)) => 1.20,
            ("USD", "JPY", _) => 150.0,
            _ => fail!("no {from}/{to} rate"),
        };
        Ok(rate)
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn date_is_passed_to_both_legs() {
    let source = Arc::new(DatedSource::default());
    let settings = Settings::default().with_rate_source(source.clone());
    let eur = Money::new(10_000, "EUR").unwrap();

    let old = eur
        .convert_via_reference("JPY", "USD", Some(day(2023, 6, 30)), &settings)
        .unwrap();
    // 100.00 EUR → 110.00 USD → 16,500 JPY
    assert_eq!(old.amount(), 16_500);

    let new = eur
        .convert_via_reference("JPY", "USD", Some(day(2024, 6, 30)), &settings)
        .unwrap();
    // 100.00 EUR → 120.00 USD → 18,000 JPY
    assert_eq!(new.amount(), 18_000);

    let lookups = source.lookups.lock().unwrap();
    assert_eq!(lookups.len(), 4);
    assert_eq!(
        lookups[0],
        ("EUR".to_owned(), "USD".to_owned(), Some(day(2023, 6, 30)))
    );
    assert_eq!(
        lookups[3],
        ("USD".to_owned(), "JPY".to_owned(), Some(day(2024, 6, 30)))
    );
}

#[test]
fn source_error_is_passed_through_verbatim() {
    let settings = Settings::default().with_rate_source(Arc::new(DatedSource::default()));
    let err = Money::new(100, "GBP")
        .unwrap()
        .convert_via_reference("JPY", "USD", None, &settings)
        .unwrap_err();
    assert_eq!(
        err,
        Error::RateLookup {
            from: "GBP".into(),
            to: "USD".into(),
            source: Box::new(Error::Runtime("no GBP/USD rate".into())),
        }
    );
    assert_eq!(
        err.to_string(),
        "could not fetch rate from GBP to USD: no GBP/USD rate"
    );
}

#[test]
fn unknown_reference_currency_fails_before_lookup() {
    let source = Arc::new(DatedSource::default());
    let settings = Settings::default().with_rate_source(source.clone());
    let result = Money::new(100, "EUR")
        .unwrap()
        .convert_via_reference("JPY", "XXX", None, &settings);
    assert_eq!(result, Err(Error::CurrencyNotFound("XXX".into())));
    assert!(source.lookups.lock().unwrap().is_empty());
}

#[test]
fn non_finite_rate_is_reported_on_its_leg() {
    #[derive(Debug)]
    struct Broken;
    impl ExchangeRateSource for Broken {
        fn rate(&self, _: &str, _: &str, _: Option<NaiveDate>) -> Result<Rate> {
            Ok(f64::NAN)
        }
    }
    let settings = Settings::default().with_rate_source(Arc::new(Broken));
    let err = Money::new(100, "EUR")
        .unwrap()
        .convert_via_reference("JPY", "USD", None, &settings)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::RateLookup { ref from, ref source, .. }
            if from == "EUR" && matches!(**source, Error::Validation { field: "rate", .. })
    ));
}

#[test]
fn conversion_uses_settings_rounding() {
    let money = Money::new(100, "USD").unwrap();
    // 1.00 USD * 0.125 = 0.125 EUR
    let half_up = money.convert("EUR", 0.125, &Settings::default()).unwrap();
    assert_eq!(half_up.amount(), 13);
    let half_even = Settings::default().with_rounding(RoundingMode::HalfEven);
    assert_eq!(money.convert("EUR", 0.125, &half_even).unwrap().amount(), 12);
    let down = Settings::default().with_rounding(RoundingMode::Down);
    assert_eq!(money.convert("EUR", 0.129, &down).unwrap().amount(), 12);
}

#[test]
fn exact_decimal_rates_survive_binary_error() {
    let money = Money::new(100, "USD").unwrap();
    let down = Settings::default().with_rounding(RoundingMode::Down);
    assert_eq!(money.convert("EUR", 0.29, &down).unwrap().amount(), 29);
    assert_eq!(money.convert("EUR", 1.15, &down).unwrap().amount(), 115);
    let half_up = Settings::default();
    assert_eq!(money.convert("EUR", 0.285, &half_up).unwrap().amount(), 29);
}

#[test]
fn converted_value_tracks_float_product() {
    let money = Money::new(1_234_567, "USD").unwrap();
    let eur = money.convert("EUR", 0.9137, &Settings::default()).unwrap();
    assert_relative_eq!(eur.to_f64(), 12_345.67 * 0.9137, epsilon = 0.005);
}

#[test]
fn settings_are_shared_across_threads() {
    let table = ExchangeRateTable::new()
        .with_rate("USD", "EUR", 0.5)
        .and_then(|t| t.with_rate("EUR", "GBP", 0.5))
        .unwrap();
    let settings = Arc::new(Settings::default().with_rate_source(Arc::new(table)));

    let handles: Vec<_> = (1..=4_i64)
        .map(|i| {
            let settings = Arc::clone(&settings);
            thread::spawn(move || {
                Money::new(i * 400, "USD")
                    .unwrap()
                    .convert_via_reference("GBP", "EUR", None, &settings)
                    .unwrap()
                    .amount()
            })
        })
        .collect();
    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![100, 200, 300, 400]);
}
