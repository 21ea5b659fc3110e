//! Unit formatter
//!
//! Renders canonical quantities as human-readable strings. Formatting is
//! lossy by design (canonical storage is not): each renderer picks the
//! largest unit that keeps the coefficient readable, and once a
//! coefficient outgrows the configured threshold the output switches to
//! scientific notation instead of printing a visually meaningless integer.

mod imperial;
mod metric;
mod place_value;

pub use place_value::place_value;

use bigdecimal::{BigDecimal, One, RoundingMode, Zero};

use crate::config::EngineConfig;
use crate::core_types::{Length, Precision, UnitSystem, Weight};

/// Render a canonical length in the requested display system.
pub fn format_length(
    value: &Length,
    system: UnitSystem,
    precision: Precision,
    config: &EngineConfig,
) -> String {
    match system {
        UnitSystem::Metric => metric::length(value, precision, config),
        UnitSystem::Imperial => imperial::length(value, precision, config),
    }
}

/// Render a canonical weight in the requested display system.
pub fn format_weight(
    value: &Weight,
    system: UnitSystem,
    precision: Precision,
    config: &EngineConfig,
) -> String {
    match system {
        UnitSystem::Metric => metric::weight(value, precision, config),
        UnitSystem::Imperial => imperial::weight(value, precision, config),
    }
}

/// Round half-up to a fixed number of decimal places.
pub(crate) fn round_to(value: &BigDecimal, places: i64) -> BigDecimal {
    value.with_scale_round(places, RoundingMode::HalfUp)
}

/// Plain rendering with trailing zeros dropped.
pub(crate) fn plain_number(value: &BigDecimal) -> String {
    value.normalized().to_string()
}

/// Scientific notation with two digits after the decimal, e.g. `1.00e+16`.
/// Only called for strictly positive values.
pub(crate) fn scientific(value: &BigDecimal) -> String {
    debug_assert!(*value > BigDecimal::zero());
    let (digits, exponent) = value.normalized().as_bigint_and_exponent();
    let width = digits.to_string().trim_start_matches('-').len() as i64;
    let mut magnitude = width - 1 - exponent;
    let mut coefficient =
        (value * BigDecimal::new(1.into(), magnitude)).with_scale_round(2, RoundingMode::HalfUp);
    // Rounding can push the coefficient to 10.00; renormalize.
    if coefficient >= BigDecimal::from(10) {
        coefficient = BigDecimal::one().with_scale(2);
        magnitude += 1;
    }
    let sign = if magnitude < 0 { '-' } else { '+' };
    format!("{coefficient}e{sign}{:02}", magnitude.abs())
}
