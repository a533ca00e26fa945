//! Fixed-point rounding engine.
//!
//! Amounts are integers in a currency's smallest unit.  Operations that
//! produce a finer result (multiplication, conversion, float construction)
//! compute it with **one extra decimal digit**, i.e. scaled by a further 10,
//! and hand that value to [`round`] which resolves the extra digit and scales
//! back down.  For example, to round 1.234 at two decimals pass `12340 / 10 =
//! 1234` and get `123` back.
//!
//! Two separate "nearest five cents" passes live here as well:
//!
//! * [`RoundingMode::NearestFiveCents`]: the coarse band pass reachable
//!   through [`round`]; it snaps the last two digits of an amount that is
//!   already at normal precision into the bands `20 / 50 / carry`.
//! * [`settle_nearest_five_cents`]: the settlement pass applied to settled
//!   amounts of a cash-rounded currency, snapping cents to the nearest
//!   multiple of five.
//!
//! All modes are sign-aware: a negative input rounds to the mirror image of
//! its positive counterpart.

use centum_core::{Amount, Precision, Real};
use num_traits::ToPrimitive;

/// Rounding discipline applied when resolving the extra digit of a scaled
/// intermediate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Ties away from zero (`1.25 → 1.3`, `-1.25 → -1.3`).
    #[default]
    HalfUp,
    /// Ties towards zero (`1.25 → 1.2`, `1.26 → 1.3`).
    HalfDown,
    /// Ties to the even neighbour (`1.25 → 1.2`, `1.35 → 1.4`).
    HalfEven,
    /// Away from zero whenever anything is discarded (`1.21 → 1.3`).
    Up,
    /// Truncation towards zero (`1.29 → 1.2`).
    Down,
    /// Coarse cash banding of the last two digits; operates on a value at
    /// normal precision rather than on an extra-scaled one.
    NearestFiveCents,
}

impl RoundingMode {
    /// All modes, in declaration order.
    pub const ALL: [RoundingMode; 6] = [
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::NearestFiveCents,
    ];

    /// `true` for the modes whose input carries an extra decimal digit.
    pub fn consumes_extra_digit(self) -> bool {
        !matches!(self, RoundingMode::NearestFiveCents)
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::Up => "up",
            RoundingMode::Down => "down",
            RoundingMode::NearestFiveCents => "nearest-five-cents",
        };
        f.write_str(name)
    }
}

/// Resolve the last digit of `value` according to `mode`.
///
/// For every mode except [`RoundingMode::NearestFiveCents`], `value` is the
/// amount scaled by an extra factor of 10 and the result is scaled back
/// down: `round(125, HalfUp) == 13`, `round(125, HalfEven) == 12`.
///
/// [`RoundingMode::NearestFiveCents`] works on a value that is already at
/// normal precision and returns it at that same precision (see
/// [`snap_cash_band`]).
pub fn round(value: Amount, mode: RoundingMode) -> Amount {
    let quotient = value / 10;
    let remainder = value % 10;
    let digit = remainder.abs();
    let away = match mode {
        RoundingMode::HalfUp => digit >= 5,
        RoundingMode::HalfDown => digit > 5,
        RoundingMode::HalfEven => digit > 5 || (digit == 5 && quotient % 2 != 0),
        RoundingMode::Up => digit != 0,
        RoundingMode::Down => false,
        RoundingMode::NearestFiveCents => return snap_cash_band(value),
    };
    if away {
        // |quotient| <= i64::MAX / 10, so stepping away from zero cannot overflow.
        quotient + remainder.signum()
    } else {
        quotient
    }
}

/// Reduce an extra-scaled intermediate to normal precision with `mode`.
///
/// Identical to [`round`] for the ordinary modes.  For
/// [`RoundingMode::NearestFiveCents`] the extra digit is first resolved
/// half-up and the coarse band pass is applied to the result, so every mode
/// can be used wherever an extra-scaled value is re-quantized.
pub fn requantize(value_x10: Amount, mode: RoundingMode) -> Amount {
    if mode.consumes_extra_digit() {
        round(value_x10, mode)
    } else {
        round(round(value_x10, RoundingMode::HalfUp), mode)
    }
}

/// Coarse cash banding on the last two digits `v` of `|amount|`.
///
/// | `v`         | result                              |
/// |-------------|-------------------------------------|
/// | `0..25`     | `20`                                |
/// | `25..75`    | `50`                                |
/// | `75..100`   | `00`, carrying one whole unit       |
///
/// The sign of `amount` is reapplied to the banded magnitude.
pub fn snap_cash_band(amount: Amount) -> Amount {
    let magnitude = amount.unsigned_abs();
    let whole = magnitude - magnitude % 100;
    let banded = match magnitude % 100 {
        0..=24 => whole + 20,
        25..=74 => whole + 50,
        _ => whole.saturating_add(100),
    };
    with_sign_of(banded, amount)
}

/// Snap a settled amount to the nearest multiple of five smallest units.
///
/// Bands on the last two digits: `0-2 → 0`, `3-7 → 5`, `8-12 → 10`, …,
/// `93-97 → 95`, `98-99 → 100` (carry into the whole unit).  Symmetric in
/// sign: `-123 → -125`.
pub fn settle_nearest_five_cents(amount: Amount) -> Amount {
    let magnitude = amount.unsigned_abs();
    let cents = magnitude % 100;
    let whole = magnitude - cents;
    // Adding 2 before flooring to a multiple of 5 yields the 3/8/13/... band edges.
    let settled = whole.saturating_add((cents + 2) / 5 * 5);
    with_sign_of(settled, amount)
}

/// `10^precision` as an integer scale factor.
///
/// Saturates at `i64::MAX` for precisions beyond what `i64` can hold.
pub fn pow10(precision: Precision) -> Amount {
    10_i64.checked_pow(u32::from(precision)).unwrap_or(i64::MAX)
}

/// Relative distance within which a scaled intermediate counts as an integer.
const SNAP_TOLERANCE: Real = 1e-12;

/// Convert a floating intermediate to an integer, truncating towards zero.
///
/// A value within [`SNAP_TOLERANCE`] (relative) of an integer is taken to be
/// that integer, so binary representation error such as
/// `100.0 * 0.29 * 10.0 == 289.99999999999994` does not cost a whole unit.
/// Values beyond the `i64` range saturate at the nearest bound; `NaN`
/// becomes `0`.
pub fn scale_to_i64(value: Real) -> Amount {
    if value.is_nan() {
        return 0;
    }
    let nearest = value.round();
    let value = if (value - nearest).abs() <= value.abs() * SNAP_TOLERANCE {
        nearest
    } else {
        value
    };
    value.trunc().to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

fn with_sign_of(magnitude: u64, reference: Amount) -> Amount {
    let clamped = i64::try_from(magnitude).unwrap_or(i64::MAX);
    if reference < 0 {
        -clamped
    } else {
        clamped
    }
}
