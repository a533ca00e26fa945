//! `Money`: a fixed-point amount tied to a currency.
//!
//! The amount is an `i64` count of the currency's smallest unit.  Every
//! binary operation checks that both operands share a currency code and
//! returns [`Error::CurrencyMismatch`] otherwise; nothing is ever coerced.
//! Operations that produce a finer result than the currency can hold
//! (multiplication, discounts, construction from a float) compute it with one
//! extra digit and re-quantize through [`centum_math::rounding`].

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use centum_core::{
    ensure,
    errors::{Error, Result},
    Amount, Real,
};
use centum_math::rounding::{pow10, requantize, scale_to_i64, RoundingMode};

use crate::currencies;
use crate::currency::Currency;
use crate::settings::Settings;

/// A monetary amount with an associated currency.
#[derive(Debug, Clone, Copy)]
pub struct Money {
    amount: Amount,
    currency: &'static Currency,
}

impl Money {
    /// Largest magnitude that leaves headroom for the extra-digit scaling
    /// used while rounding.
    pub const MAX_SAFE_AMOUNT: Amount = i64::MAX / 100;

    // ── Constructors ─────────────────────────────────────────────────────

    /// Create an amount in smallest units of the currency registered as
    /// `code` (`Money::new(1099, "USD")` is $10.99).
    pub fn new(amount: Amount, code: &str) -> Result<Self> {
        Ok(Self::with_currency(amount, currencies::lookup(code)?))
    }

    /// Create an amount in smallest units of `currency`.
    pub fn with_currency(amount: Amount, currency: &'static Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in `currency`.
    pub fn zero(currency: &'static Currency) -> Self {
        Self::with_currency(0, currency)
    }

    /// Create an amount from a floating approximation in whole units
    /// (`20.50` EUR is 2050 cents).
    ///
    /// The value is scaled to the currency's precision plus one extra digit
    /// and rounded with the settings' default mode.  Floats cannot represent
    /// most decimal fractions exactly, so an advisory is logged unless the
    /// settings disable it.  Fails with [`Error::Validation`] if the result
    /// lies outside the safe band.
    pub fn from_f64(amount: Real, code: &str, settings: &Settings) -> Result<Self> {
        if settings.warn_on_float() {
            log::warn!(
                "constructing {code} money from f64 {amount}; floating-point input may lose precision"
            );
        }
        let currency = currencies::lookup(code)?;
        ensure!(
            amount.is_finite(),
            "amount",
            "amount must be a finite number, got {amount}"
        );
        let scale = pow10(currency.precision) as Real;
        let scaled = requantize(scale_to_i64(amount * scale * 10.0), settings.rounding());
        Self::validate_amount(scaled)?;
        Ok(Self::with_currency(scaled, currency))
    }

    /// Check that `amount` lies within the safe band
    /// `[-MAX_SAFE_AMOUNT, MAX_SAFE_AMOUNT]`.
    pub fn validate_amount(amount: Amount) -> Result<()> {
        ensure!(
            (-Self::MAX_SAFE_AMOUNT..=Self::MAX_SAFE_AMOUNT).contains(&amount),
            "amount",
            "amount exceeds safe bounds for monetary calculations"
        );
        Ok(())
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// The amount in smallest units.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The amount in whole units as a float, for display or analytics only.
    pub fn to_f64(&self) -> Real {
        self.amount as Real / self.currency.fractions_per_unit() as Real
    }

    /// `true` if the amount lies within the safe band.
    pub fn is_within_safe_band(&self) -> bool {
        Self::validate_amount(self.amount).is_ok()
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// `self + other`.
    pub fn add(&self, other: &Money) -> Result<Money> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or(Error::Overflow {
                operation: "addition",
                lhs: self.amount,
                rhs: other.amount,
            })?;
        Ok(self.with_amount(sum))
    }

    /// `self - other`.
    pub fn subtract(&self, other: &Money) -> Result<Money> {
        self.ensure_same_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or(Error::Overflow {
                operation: "subtraction",
                lhs: self.amount,
                rhs: other.amount,
            })?;
        Ok(self.with_amount(difference))
    }

    /// Scale by `factor`, rounding with the settings' default mode.
    pub fn multiply(&self, factor: Real, settings: &Settings) -> Money {
        self.multiply_with(factor, settings.rounding())
    }

    /// Scale by `factor`, rounding with `mode`.
    ///
    /// Never fails: results beyond the `i64` range saturate, and a negative
    /// factor flips the sign.  Cash-rounded currencies get their settlement
    /// pass applied to the result.
    pub fn multiply_with(&self, factor: Real, mode: RoundingMode) -> Money {
        let scaled = requantize(scale_to_i64(self.amount as Real * factor * 10.0), mode);
        self.with_amount(self.currency.settle(scaled))
    }

    /// Subtract `percentage` percent of the amount.
    ///
    /// `percentage` must lie in `0..=100`.  The discount is computed with
    /// [`multiply`](Self::multiply) and then subtracted; cash-rounded
    /// currencies have the settlement pass applied to the result.
    pub fn apply_percentage_discount(&self, percentage: Real, settings: &Settings) -> Result<Money> {
        ensure!(
            (0.0..=100.0).contains(&percentage),
            "percentage",
            "percentage must be between 0 and 100"
        );
        let discount = self.multiply(percentage / 100.0, settings);
        Ok(self.subtract(&discount)?.settled())
    }

    /// Apply the currency's settlement rounding (a no-op for currencies
    /// without cash rounding): `R$1,23` settles to `R$1,25`.
    pub fn settled(&self) -> Money {
        self.with_amount(self.currency.settle(self.amount))
    }

    // ── Comparison ───────────────────────────────────────────────────────

    /// Order two amounts of the same currency.
    pub fn compare(&self, other: &Money) -> Result<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// `self == other`.
    pub fn equals(&self, other: &Money) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// `self > other`.
    pub fn greater_than(&self, other: &Money) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self < other`.
    pub fn less_than(&self, other: &Money) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    // ── Sign ─────────────────────────────────────────────────────────────

    /// Absolute value (`i64::MIN` saturates to `i64::MAX`).
    pub fn abs(&self) -> Money {
        self.with_amount(self.amount.saturating_abs())
    }

    /// Negated value (`i64::MIN` saturates to `i64::MAX`).
    pub fn negate(&self) -> Money {
        self.with_amount(self.amount.saturating_neg())
    }

    /// `-1`, `0` or `1`.
    pub fn sign(&self) -> i32 {
        self.amount.signum() as i32
    }

    /// `true` if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// `true` if the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// `true` if the amount is less than zero.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    // ── Internals ────────────────────────────────────────────────────────

    pub(crate) fn ensure_same_currency(&self, other: &Money) -> Result<()> {
        if self.currency.same_as(other.currency) {
            Ok(())
        } else {
            Err(Error::mismatch(self.currency.code, other.currency.code))
        }
    }

    fn with_amount(&self, amount: Amount) -> Money {
        Money::with_currency(amount, self.currency)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency.same_as(other.currency) && self.amount == other.amount
    }
}

impl Eq for Money {}

/// Amounts in different currencies are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash(state);
        self.currency.hash(state);
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct MoneyRepr<'a> {
        amount: Amount,
        #[serde(borrow)]
        currency: std::borrow::Cow<'a, str>,
    }

    impl Serialize for Money {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            MoneyRepr {
                amount: self.amount,
                currency: self.currency.code.into(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            let repr = MoneyRepr::deserialize(deserializer)?;
            Money::new(repr.amount, &repr.currency).map_err(serde::de::Error::custom)
        }
    }
}
