//! Formatter output stays re-parseable at display precision

use bigdecimal::BigDecimal;
use size_engine_core::{
    format_length, format_weight, place_value, EngineConfig, Length, Precision, UnitSystem, Weight,
};

fn num(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

/// Split a metric rendering like `25.0 cm` back into a canonical length.
fn reparse_length(rendered: &str) -> Length {
    let (value, symbol) = rendered.rsplit_once(' ').unwrap();
    Length::parse(&num(value), symbol).unwrap()
}

fn reparse_weight(rendered: &str) -> Weight {
    let (value, symbol) = rendered.rsplit_once(' ').unwrap();
    Weight::parse(&num(value), symbol).unwrap()
}

#[test]
fn metric_lengths_round_trip_exactly_on_tidy_values() {
    let config = EngineConfig::default();
    for (meters, expected) in [
        ("1.8", "1.8 m"),
        ("0.25", "25.0 cm"),
        ("1800", "1.8 km"),
    ] {
        let length = Length::from_meters(num(meters)).unwrap();
        let rendered = format_length(&length, UnitSystem::Metric, Precision::Standard, &config);
        assert_eq!(rendered, expected);
        assert_eq!(reparse_length(&rendered), length);
    }
}

#[test]
fn metric_weights_round_trip_exactly_on_tidy_values() {
    let config = EngineConfig::default();
    for (kilograms, expected) in [("70", "70.0 kg"), ("70000", "70.0 t"), ("0.005", "5.0 g")] {
        let weight = Weight::from_kilograms(num(kilograms)).unwrap();
        let rendered = format_weight(&weight, UnitSystem::Metric, Precision::Standard, &config);
        assert_eq!(rendered, expected);
        assert_eq!(reparse_weight(&rendered), weight);
    }
}

#[test]
fn untidy_values_stay_within_display_tolerance() {
    let config = EngineConfig::default();
    // 1.7321 m renders at one decimal of a metre, so the re-parsed
    // value may drift by at most half of that last place.
    let length = Length::from_meters(num("1.7321")).unwrap();
    let rendered = format_length(&length, UnitSystem::Metric, Precision::Standard, &config);
    let drift = (reparse_length(&rendered).meters() - length.meters()).abs();
    assert!(drift <= num("0.05"));

    // Accurate precision tightens the bound by two orders of magnitude.
    let rendered = format_length(&length, UnitSystem::Metric, Precision::Accurate, &config);
    let drift = (reparse_length(&rendered).meters() - length.meters()).abs();
    assert!(drift <= num("0.0005"));
}

#[test]
fn imperial_feet_and_inches_round_trip() {
    let config = EngineConfig::default();
    let length = Length::from_feet_inches(&num("5"), &num("6")).unwrap();
    let rendered = format_length(&length, UnitSystem::Imperial, Precision::Standard, &config);
    assert_eq!(rendered, "5'6\"");

    let (feet, inches) = rendered
        .trim_end_matches('"')
        .split_once('\'')
        .unwrap();
    let reparsed = Length::from_feet_inches(&num(feet), &num(inches)).unwrap();
    assert_eq!(reparsed, length);
}

#[test]
fn imperial_miles_round_trip_exactly() {
    let config = EngineConfig::default();
    let length = Length::from_meters(num("160934.4")).unwrap();
    let rendered = format_length(&length, UnitSystem::Imperial, Precision::Standard, &config);
    assert_eq!(rendered, "100.0 mi");
    assert_eq!(reparse_length(&rendered), length);
}

#[test]
fn extreme_magnitudes_fall_back_to_scientific_notation() {
    let config = EngineConfig::default();
    let huge = Length::from_meters(num("1e45")).unwrap();
    assert_eq!(
        format_length(&huge, UnitSystem::Metric, Precision::Standard, &config),
        "1.00e+45 m"
    );

    let tiny = Length::from_meters(num("1e-30")).unwrap();
    assert_eq!(
        format_length(&tiny, UnitSystem::Metric, Precision::Standard, &config),
        "1.00e-30 m"
    );
}

#[test]
fn place_values_name_tidy_ratios_and_escape_to_scientific() {
    let config = EngineConfig::default();
    assert_eq!(place_value(&num("1000"), &config), "1 thousand");
    assert_eq!(place_value(&num("2500000"), &config), "2.5 million");
    assert_eq!(place_value(&num("58.824"), &config), "58.824");
    assert_eq!(place_value(&num("1e16"), &config), "1.00e+16");
}
