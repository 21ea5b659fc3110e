//! Imperial rendering
//!
//! Composes feet-and-inches for the human range, miles above it, and
//! decimal inches below it, all from the same canonical value.

use bigdecimal::{BigDecimal, One, RoundingMode, Zero};

use super::{plain_number, round_to, scientific};
use crate::config::EngineConfig;
use crate::core_types::{Length, LengthUnit, Precision, Weight, WeightUnit};

pub(super) fn length(value: &Length, precision: Precision, config: &EngineConfig) -> String {
    if value.is_zero() {
        return "0\"".to_string();
    }

    let miles = value.in_unit(LengthUnit::Miles);
    if miles >= BigDecimal::one() {
        if miles > config.scientific_threshold {
            return format!("{} mi", scientific(&miles));
        }
        return format!("{} mi", round_to(&miles, precision.decimals()));
    }

    let total_inches = value.in_unit(LengthUnit::Inches);
    if total_inches >= BigDecimal::from(12) {
        let twelve = BigDecimal::from(12);
        let mut feet = (&total_inches / &twelve).with_scale_round(0, RoundingMode::Down);
        let mut inches = round_to(&(&total_inches - &feet * &twelve), precision.decimals());
        // Rounding the inch part can carry into the next foot.
        if inches >= twelve {
            feet += BigDecimal::one();
            inches = BigDecimal::zero();
        }
        return format!("{}'{}\"", plain_number(&feet), plain_number(&inches));
    }

    if total_inches >= BigDecimal::one() {
        return format!("{}\"", round_to(&total_inches, precision.decimals()));
    }

    // Sub-inch: keep thousandths, then give up on positional digits.
    let thousandths = round_to(&total_inches, 3);
    if thousandths.is_zero() {
        return format!("{}\"", scientific(&total_inches));
    }
    format!("{thousandths}\"")
}

pub(super) fn weight(value: &Weight, precision: Precision, config: &EngineConfig) -> String {
    if value.is_zero() {
        return "0 lb".to_string();
    }

    let tons = value.in_unit(WeightUnit::ShortTons);
    if tons >= BigDecimal::one() {
        if tons > config.scientific_threshold {
            return format!("{} tons", scientific(&tons));
        }
        return format!("{} tons", round_to(&tons, precision.decimals()));
    }

    let pounds = value.in_unit(WeightUnit::Pounds);
    if pounds >= BigDecimal::one() {
        return format!("{} lb", round_to(&pounds, precision.decimals()));
    }

    let ounces = value.in_unit(WeightUnit::Ounces);
    let thousandths = round_to(&ounces, 3);
    if thousandths.is_zero() {
        return format!("{} oz", scientific(&ounces));
    }
    format!("{thousandths} oz")
}
