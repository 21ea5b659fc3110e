//! Scale names for multiplier magnitudes

use bigdecimal::BigDecimal;

use super::{plain_number, round_to, scientific};
use crate::config::EngineConfig;

/// Name a dimensionless ratio in human terms.
///
/// Picks the largest threshold in the configured table not exceeding the
/// ratio and renders `"<coefficient> <name>"` ("58.824 thousand"). Ratios
/// below the table render as a plain number; ratios beyond the
/// extreme-magnitude threshold fall back to scientific notation.
pub fn place_value(ratio: &BigDecimal, config: &EngineConfig) -> String {
    if *ratio > config.scientific_threshold {
        return scientific(ratio);
    }
    let mut chosen = None;
    for entry in &config.place_values {
        if *ratio >= entry.threshold {
            chosen = Some(entry);
        }
    }
    match chosen {
        Some(entry) => {
            let coefficient = ratio / &entry.threshold;
            format!("{} {}", plain_number(&round_to(&coefficient, 3)), entry.name)
        }
        None => plain_number(&round_to(ratio, 3)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn exactly_one_thousand_names_the_thousand_rung() {
        let config = EngineConfig::default();
        assert_eq!(place_value(&num("1000"), &config), "1 thousand");
    }

    #[test]
    fn small_ratios_stay_plain() {
        let config = EngineConfig::default();
        assert_eq!(place_value(&num("58.824"), &config), "58.824");
        assert_eq!(place_value(&num("1"), &config), "1");
    }

    #[test]
    fn each_rung_names_itself() {
        let config = EngineConfig::default();
        assert_eq!(place_value(&num("2500000"), &config), "2.5 million");
        assert_eq!(place_value(&num("3000000000"), &config), "3 billion");
        assert_eq!(place_value(&num("1e12"), &config), "1 trillion");
        assert_eq!(place_value(&num("1e15"), &config), "1 quadrillion");
    }

    #[test]
    fn beyond_the_table_falls_back_to_scientific_notation() {
        let config = EngineConfig::default();
        assert_eq!(place_value(&num("1e16"), &config), "1.00e+16");
    }
}
