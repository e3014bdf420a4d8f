//! Money helpers using rust_decimal for precision
//!
//! Prices travel as `f64` on the wire; totals are accumulated as `Decimal`
//! and rounded to 2 decimal places.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// NaN/Infinity is logged and treated as zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in price calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a monetary value to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum a sequence of f64 prices exactly
pub fn sum_prices(prices: impl IntoIterator<Item = f64>) -> Decimal {
    round_money(prices.into_iter().map(to_decimal).sum())
}

/// Format a monetary value as a pound string
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::money::format_pounds;
///
/// assert_eq!(format_pounds(Decimal::new(567, 2)), "£5.67");
/// assert_eq!(format_pounds(Decimal::ZERO), "£0.00");
/// ```
pub fn format_pounds(value: Decimal) -> String {
    format!("£{:.2}", round_money(value))
}
