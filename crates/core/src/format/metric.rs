//! Metric rendering ladders

use super::{round_to, scientific};
use crate::config::EngineConfig;
use crate::core_types::{Length, LengthUnit, Precision, Weight, WeightUnit};

/// Largest-first ladder of metric length units.
const LENGTH_LADDER: [LengthUnit; 19] = [
    LengthUnit::Universes,
    LengthUnit::Yottameters,
    LengthUnit::Zettameters,
    LengthUnit::Exameters,
    LengthUnit::Petameters,
    LengthUnit::Terameters,
    LengthUnit::Gigameters,
    LengthUnit::Megameters,
    LengthUnit::Kilometers,
    LengthUnit::Meters,
    LengthUnit::Centimeters,
    LengthUnit::Millimeters,
    LengthUnit::Micrometers,
    LengthUnit::Nanometers,
    LengthUnit::Picometers,
    LengthUnit::Femtometers,
    LengthUnit::Attometers,
    LengthUnit::Zeptometers,
    LengthUnit::Yoctometers,
];

/// Largest-first ladder of metric weight units.
const WEIGHT_LADDER: [WeightUnit; 9] = [
    WeightUnit::Teratonnes,
    WeightUnit::Gigatonnes,
    WeightUnit::Megatonnes,
    WeightUnit::Kilotonnes,
    WeightUnit::Tonnes,
    WeightUnit::Kilograms,
    WeightUnit::Grams,
    WeightUnit::Milligrams,
    WeightUnit::Micrograms,
];

pub(super) fn length(value: &Length, precision: Precision, config: &EngineConfig) -> String {
    if value.is_zero() {
        return "0 m".to_string();
    }
    let meters = value.meters();
    for unit in LENGTH_LADDER {
        let factor = unit.meters();
        if *meters >= factor {
            let coefficient = meters / factor;
            // Only the top rung can outgrow the readable range.
            if coefficient > config.scientific_threshold {
                return format!("{} m", scientific(meters));
            }
            return format!(
                "{} {}",
                round_to(&coefficient, precision.decimals()),
                unit.symbol()
            );
        }
    }
    // Below one yoctometer there is no named unit left.
    format!("{} m", scientific(meters))
}

pub(super) fn weight(value: &Weight, precision: Precision, config: &EngineConfig) -> String {
    if value.is_zero() {
        return "0 kg".to_string();
    }
    let kilograms = value.kilograms();
    for unit in WEIGHT_LADDER {
        let factor = unit.kilograms();
        if *kilograms >= factor {
            let coefficient = kilograms / factor;
            if coefficient > config.scientific_threshold {
                return format!("{} kg", scientific(kilograms));
            }
            return format!(
                "{} {}",
                round_to(&coefficient, precision.decimals()),
                unit.symbol()
            );
        }
    }
    format!("{} kg", scientific(kilograms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn len(s: &str) -> Length {
        Length::from_meters(s.parse::<BigDecimal>().unwrap()).unwrap()
    }

    fn kg(s: &str) -> Weight {
        Weight::from_kilograms(s.parse::<BigDecimal>().unwrap()).unwrap()
    }

    #[test]
    fn picks_the_largest_unit_that_keeps_the_coefficient_readable() {
        let config = EngineConfig::default();
        assert_eq!(length(&len("1.8"), Precision::Standard, &config), "1.8 m");
        assert_eq!(length(&len("0.25"), Precision::Standard, &config), "25.0 cm");
        assert_eq!(length(&len("1800"), Precision::Standard, &config), "1.8 km");
        assert_eq!(
            length(&len("0.000007"), Precision::Accurate, &config),
            "7.000 µm"
        );
    }

    #[test]
    fn weight_climbs_to_tonnes() {
        let config = EngineConfig::default();
        assert_eq!(weight(&kg("70"), Precision::Standard, &config), "70.0 kg");
        assert_eq!(weight(&kg("70000"), Precision::Standard, &config), "70.0 t");
        assert_eq!(weight(&kg("0.02"), Precision::Standard, &config), "20.0 g");
    }

    #[test]
    fn extreme_magnitudes_fall_back_to_scientific_notation() {
        let config = EngineConfig::default();
        // Far beyond 10^15 universes.
        let vast = len("1e45");
        assert_eq!(length(&vast, Precision::Standard, &config), "1.00e+45 m");
        let tiny = len("1e-30");
        assert_eq!(length(&tiny, Precision::Standard, &config), "1.00e-30 m");
    }

    #[test]
    fn zero_renders_in_the_base_unit() {
        let config = EngineConfig::default();
        assert_eq!(length(&len("0"), Precision::Standard, &config), "0 m");
        assert_eq!(weight(&kg("0"), Precision::Standard, &config), "0 kg");
    }
}
