//! Algorithms over sequences of money in a single currency.
//!
//! Every aggregate here is anchored on one currency: a slice mixing
//! currencies is rejected with [`Error::CurrencyMismatch`] naming the first
//! divergent pair, and [`map`] checks its currency-preservation contract on
//! each element individually.

use centum_core::{
    errors::{Error, Result},
    Real,
};

use crate::money::Money;
use crate::settings::Settings;

/// Check that every element shares the first element's currency.
///
/// Empty and single-element slices trivially pass.
pub fn validate_homogeneous(slice: &[Money]) -> Result<()> {
    let Some((first, rest)) = slice.split_first() else {
        return Ok(());
    };
    rest.iter()
        .try_for_each(|money| first.ensure_same_currency(money))
}

/// Sum of all elements.
///
/// Fails with [`Error::Validation`] on an empty slice (there is no currency
/// to anchor a zero on) and propagates [`Error::Overflow`].
pub fn sum(slice: &[Money]) -> Result<Money> {
    let first = slice
        .first()
        .ok_or_else(|| Error::validation("slice", "empty slice provided"))?;
    validate_homogeneous(slice)?;
    slice
        .iter()
        .try_fold(Money::zero(first.currency()), |acc, money| acc.add(money))
}

/// Arithmetic mean: [`sum`] multiplied by `1 / n` with the settings'
/// default rounding mode, so the result is exact only up to rounding.
pub fn average(slice: &[Money], settings: &Settings) -> Result<Money> {
    let total = sum(slice)?;
    Ok(total.multiply(1.0 / slice.len() as Real, settings))
}

/// Sort ascending by amount.  The sort is stable.
pub fn sort(slice: &mut [Money]) -> Result<()> {
    validate_homogeneous(slice)?;
    slice.sort_by_key(Money::amount);
    Ok(())
}

/// Sort descending by amount.  The sort is stable.
pub fn sort_descending(slice: &mut [Money]) -> Result<()> {
    validate_homogeneous(slice)?;
    slice.sort_by_key(|money| std::cmp::Reverse(money.amount()));
    Ok(())
}

/// Elements satisfying `predicate`, in order.
pub fn filter<P>(slice: &[Money], mut predicate: P) -> Vec<Money>
where
    P: FnMut(&Money) -> bool,
{
    slice.iter().filter(|m| predicate(m)).copied().collect()
}

/// Apply `transform` to every element.
///
/// Fails with [`Error::Validation`] at the first element whose result is in
/// a different currency from its input.
pub fn map<F>(slice: &[Money], mut transform: F) -> Result<Vec<Money>>
where
    F: FnMut(&Money) -> Money,
{
    slice
        .iter()
        .map(|money| {
            let transformed = transform(money);
            if transformed.currency().same_as(money.currency()) {
                Ok(transformed)
            } else {
                Err(Error::validation(
                    "transform",
                    format!(
                        "transformation must maintain the same currency ({} became {})",
                        money.currency().code,
                        transformed.currency().code
                    ),
                ))
            }
        })
        .collect()
}

/// Predicate for [`filter`]: amount above zero.
pub fn is_positive(money: &Money) -> bool {
    money.is_positive()
}

/// Predicate for [`filter`]: amount below zero.
pub fn is_negative(money: &Money) -> bool {
    money.is_negative()
}

/// Predicate for [`filter`]: amount equal to zero.
pub fn is_zero(money: &Money) -> bool {
    money.is_zero()
}
