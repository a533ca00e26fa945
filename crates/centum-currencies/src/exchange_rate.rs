//! Exchange rates and currency conversion.
//!
//! Conversion multiplies the amount by the rate, shifts it to the target
//! currency's precision, and re-quantizes the result through the rounding
//! engine with one extra digit.  Converting through a reference currency
//! chains two such legs, rounding after each one; the intermediate rounding
//! is part of the result and is not collapsed into a single cross rate.

use std::collections::HashMap;

use chrono::NaiveDate;

use centum_core::{
    ensure, fail,
    errors::{Error, Result},
    Rate, Real,
};
use centum_math::rounding::{pow10, requantize, scale_to_i64, RoundingMode};

use crate::currencies;
use crate::currency::Currency;
use crate::money::Money;
use crate::settings::Settings;

/// A provider of exchange rates.
///
/// `rate` returns how many units of `to` one unit of `from` buys, optionally
/// as of `date`.  Lookups are synchronous and may block; implementations are
/// responsible for their own caching, timeouts and retries.
pub trait ExchangeRateSource: std::fmt::Debug + Send + Sync {
    /// Look up the `from → to` rate.
    fn rate(&self, from: &str, to: &str, date: Option<NaiveDate>) -> Result<Rate>;
}

/// An exchange rate between two currencies.
#[derive(Debug, Clone)]
pub struct ExchangeRate {
    /// The source currency.
    pub source: &'static Currency,
    /// The target currency.
    pub target: &'static Currency,
    /// Rate: how many units of `target` one unit of `source` buys.
    pub rate: Rate,
}

impl ExchangeRate {
    /// Create a new exchange rate.
    pub fn new(source: &'static Currency, target: &'static Currency, rate: Rate) -> Self {
        Self {
            source,
            target,
            rate,
        }
    }

    /// Convert `amount` from `source` to `target`, or from `target` back to
    /// `source` using the inverse rate.
    pub fn exchange(&self, amount: &Money, settings: &Settings) -> Result<Money> {
        if amount.currency() == self.source {
            amount.convert_to(self.target, self.rate, settings)
        } else if amount.currency() == self.target {
            amount.convert_to(self.source, 1.0 / self.rate, settings)
        } else {
            fail!(
                "ExchangeRate({}/{}) cannot convert {}",
                self.source.code,
                self.target.code,
                amount.currency().code
            )
        }
    }

    /// Return the inverse rate (target → source).
    pub fn inverse(&self) -> Self {
        Self {
            source: self.target,
            target: self.source,
            rate: 1.0 / self.rate,
        }
    }
}

/// An in-memory table of exchange rates.
///
/// Answers direct pairs, inverse pairs (`1 / rate`) and same-currency
/// lookups (`1.0`).  Dates are accepted and ignored.
#[derive(Debug, Default, Clone)]
pub struct ExchangeRateTable {
    // source code → target code → rate
    rates: HashMap<&'static str, HashMap<&'static str, Rate>>,
}

impl ExchangeRateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exchange rate, replacing any previous rate for the pair.
    pub fn add(&mut self, rate: ExchangeRate) {
        self.rates
            .entry(rate.source.code)
            .or_default()
            .insert(rate.target.code, rate.rate);
    }

    /// Register a rate between two registry codes.
    pub fn insert(&mut self, from: &str, to: &str, rate: Rate) -> Result<()> {
        ensure!(
            rate.is_finite() && rate > 0.0,
            "rate",
            "rate must be a positive finite number, got {rate}"
        );
        let rate = ExchangeRate::new(currencies::lookup(from)?, currencies::lookup(to)?, rate);
        self.add(rate);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_rate(mut self, from: &str, to: &str, rate: Rate) -> Result<Self> {
        self.insert(from, to, rate)?;
        Ok(self)
    }

    /// Number of registered pairs.
    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    /// `true` if no rates are registered.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Remove all registered rates.
    pub fn clear(&mut self) {
        self.rates.clear();
    }

    fn direct(&self, from: &str, to: &str) -> Option<Rate> {
        self.rates.get(from)?.get(to).copied()
    }
}

impl ExchangeRateSource for ExchangeRateTable {
    fn rate(&self, from: &str, to: &str, _date: Option<NaiveDate>) -> Result<Rate> {
        if from == to {
            return Ok(1.0);
        }
        if let Some(rate) = self.direct(from, to) {
            return Ok(rate);
        }
        if let Some(rate) = self.direct(to, from) {
            return Ok(1.0 / rate);
        }
        fail!("rate not found for {from} to {to}")
    }
}

impl Money {
    /// Convert to the currency registered as `target` at a given `rate`.
    ///
    /// The result is rounded with the settings' default mode at the target
    /// precision; a cash-rounded target then gets its settlement pass.
    pub fn convert(&self, target: &str, rate: Rate, settings: &Settings) -> Result<Money> {
        self.convert_to(currencies::lookup(target)?, rate, settings)
    }

    /// Convert to `target` at a given `rate`.
    pub fn convert_to(
        &self,
        target: &'static Currency,
        rate: Rate,
        settings: &Settings,
    ) -> Result<Money> {
        ensure!(
            rate.is_finite(),
            "rate",
            "rate must be a finite number, got {rate}"
        );
        Ok(self.exchange_leg(target, rate, settings.rounding()).settled())
    }

    /// Convert to `target` by way of `reference`, looking both legs up in
    /// the settings' rate source.
    ///
    /// The amount is first converted to `reference` and rounded, and that
    /// rounded intermediate is converted to `target` and rounded again.
    /// Fails with [`Error::ConfigurationMissing`] when no rate source is
    /// configured and with [`Error::RateLookup`] naming the leg whose lookup
    /// failed.
    pub fn convert_via_reference(
        &self,
        target: &str,
        reference: &str,
        date: Option<NaiveDate>,
        settings: &Settings,
    ) -> Result<Money> {
        let source = settings
            .rate_source()
            .ok_or(Error::ConfigurationMissing("exchange rate source"))?;
        let reference = currencies::lookup(reference)?;
        let target = currencies::lookup(target)?;
        let mode = settings.rounding();

        let to_reference = leg_rate(source, self.currency(), reference, date)?;
        let intermediate = self.exchange_leg(reference, to_reference, mode);
        log::debug!(
            "{} {} -> {} {} at {to_reference}",
            self.amount(),
            self.currency().code,
            intermediate.amount(),
            reference.code
        );

        let to_target = leg_rate(source, reference, target, date)?;
        let converted = intermediate.exchange_leg(target, to_target, mode);
        log::debug!(
            "{} {} -> {} {} at {to_target}",
            intermediate.amount(),
            reference.code,
            converted.amount(),
            target.code
        );

        Ok(converted.settled())
    }

    /// One rounded conversion step, without settlement.
    fn exchange_leg(&self, target: &'static Currency, rate: Rate, mode: RoundingMode) -> Money {
        let mut value = self.amount() as Real * rate;
        let (from, to) = (self.currency().precision, target.precision);
        // Division by an exact power of ten keeps representable results exact.
        if to >= from {
            value *= pow10(to - from) as Real;
        } else {
            value /= pow10(from - to) as Real;
        }
        Money::with_currency(requantize(scale_to_i64(value * 10.0), mode), target)
    }
}

fn leg_rate(
    source: &dyn ExchangeRateSource,
    from: &'static Currency,
    to: &'static Currency,
    date: Option<NaiveDate>,
) -> Result<Rate> {
    let wrap = |err: Error| Error::RateLookup {
        from: from.code.to_owned(),
        to: to.code.to_owned(),
        source: Box::new(err),
    };
    let rate = source.rate(from.code, to.code, date).map_err(wrap)?;
    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(wrap(Error::validation(
            "rate",
            format!("rate source returned a non-finite rate {rate}"),
        )))
    }
}
