//! Library settings.
//!
//! [`Settings`] bundles the configuration that money operations fall back on
//! when a call does not say otherwise: the default [`RoundingMode`], the
//! injected [`ExchangeRateSource`], and whether constructing money from a
//! float emits an advisory.  It is an ordinary immutable value built once and
//! passed by reference, so there is no process-wide state to synchronise and
//! concurrent callers can hold different configurations side by side.

use std::sync::Arc;

use centum_math::RoundingMode;

use crate::exchange_rate::ExchangeRateSource;

/// Configuration consulted by money operations.
///
/// ```
/// use centum_currencies::Settings;
/// use centum_math::RoundingMode;
///
/// let settings = Settings::default().with_rounding(RoundingMode::HalfEven);
/// assert_eq!(settings.rounding(), RoundingMode::HalfEven);
/// assert!(settings.rate_source().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    rounding: RoundingMode,
    rate_source: Option<Arc<dyn ExchangeRateSource>>,
    warn_on_float: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::default(),
            rate_source: None,
            warn_on_float: true,
        }
    }
}

impl Settings {
    /// Default settings: half-up rounding, no rate source, float advisory on.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy using `mode` as the default rounding mode.
    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Return a copy that looks exchange rates up in `source`.
    pub fn with_rate_source(mut self, source: Arc<dyn ExchangeRateSource>) -> Self {
        self.rate_source = Some(source);
        self
    }

    /// Return a copy with the float-constructor advisory switched on or off.
    pub fn with_float_warning(mut self, enabled: bool) -> Self {
        self.warn_on_float = enabled;
        self
    }

    /// The default rounding mode.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// The injected exchange-rate source, if any.
    pub fn rate_source(&self) -> Option<&dyn ExchangeRateSource> {
        self.rate_source.as_deref()
    }

    /// Whether [`Money::from_f64`](crate::Money::from_f64) emits an advisory.
    pub fn warn_on_float(&self) -> bool {
        self.warn_on_float
    }
}
