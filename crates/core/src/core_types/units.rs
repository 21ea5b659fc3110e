//! Unit symbols accepted at the engine boundary
//!
//! The caller hands the engine a pre-split numeric magnitude and a unit
//! symbol string (`"180"` + `"cm"`, `"5.5"` + `"ft"`). This module defines
//! the accepted symbol set and the exact conversion factor from each unit
//! to the canonical base unit (meters for length, kilograms for weight).
//!
//! Factors are stored as integer digits plus a decimal scale so they stay
//! exact; no factor ever passes through a binary float.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// Build an exact decimal as `digits * 10^(-scale)`.
pub(crate) fn dec(digits: i128, scale: i64) -> BigDecimal {
    BigDecimal::new(digits.into(), scale)
}

/// Which display system a value should be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI units, yoctometers through yottameters and beyond.
    #[default]
    Metric,
    /// Inches, feet-and-inches composites, and miles.
    Imperial,
}

/// How many decimal places a rendered coefficient keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Precision {
    /// One decimal place, for compact chat output.
    #[default]
    Standard,
    /// Three decimal places, for the accurate renderers.
    Accurate,
}

impl Precision {
    /// Decimal places kept after rounding.
    pub fn decimals(self) -> i64 {
        match self {
            Self::Standard => 1,
            Self::Accurate => 3,
        }
    }
}

/// A recognized length unit symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Yoctometers,
    Zeptometers,
    Attometers,
    Femtometers,
    Picometers,
    Nanometers,
    Micrometers,
    Millimeters,
    Centimeters,
    Meters,
    Kilometers,
    Megameters,
    Gigameters,
    Terameters,
    Petameters,
    Exameters,
    Zettameters,
    Yottameters,
    /// Diameter of the observable universe, the traditional top of the
    /// ladder in this game.
    Universes,
    Inches,
    Feet,
    Miles,
}

impl LengthUnit {
    /// The canonical symbol for this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Yoctometers => "ym",
            Self::Zeptometers => "zm",
            Self::Attometers => "am",
            Self::Femtometers => "fm",
            Self::Picometers => "pm",
            Self::Nanometers => "nm",
            Self::Micrometers => "µm",
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::Megameters => "Mm",
            Self::Gigameters => "Gm",
            Self::Terameters => "Tm",
            Self::Petameters => "Pm",
            Self::Exameters => "Em",
            Self::Zettameters => "Zm",
            Self::Yottameters => "Ym",
            Self::Universes => "uni",
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Miles => "mi",
        }
    }

    /// Exact size of one of this unit, in meters.
    pub fn meters(self) -> BigDecimal {
        match self {
            Self::Yoctometers => dec(1, 24),
            Self::Zeptometers => dec(1, 21),
            Self::Attometers => dec(1, 18),
            Self::Femtometers => dec(1, 15),
            Self::Picometers => dec(1, 12),
            Self::Nanometers => dec(1, 9),
            Self::Micrometers => dec(1, 6),
            Self::Millimeters => dec(1, 3),
            Self::Centimeters => dec(1, 2),
            Self::Meters => dec(1, 0),
            Self::Kilometers => dec(1, -3),
            Self::Megameters => dec(1, -6),
            Self::Gigameters => dec(1, -9),
            Self::Terameters => dec(1, -12),
            Self::Petameters => dec(1, -15),
            Self::Exameters => dec(1, -18),
            Self::Zettameters => dec(1, -21),
            Self::Yottameters => dec(1, -24),
            // 8.79848e26 m
            Self::Universes => dec(879848, -21),
            // 1 in = 0.0254 m, 1 ft = 0.3048 m, 1 mi = 1609.344 m
            Self::Inches => dec(254, 4),
            Self::Feet => dec(3048, 4),
            Self::Miles => dec(1609344, 3),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ym" => Self::Yoctometers,
            "zm" => Self::Zeptometers,
            "am" => Self::Attometers,
            "fm" => Self::Femtometers,
            "pm" => Self::Picometers,
            "nm" => Self::Nanometers,
            "um" | "µm" => Self::Micrometers,
            "mm" => Self::Millimeters,
            "cm" => Self::Centimeters,
            "m" => Self::Meters,
            "km" => Self::Kilometers,
            "Mm" => Self::Megameters,
            "Gm" => Self::Gigameters,
            "Tm" => Self::Terameters,
            "Pm" => Self::Petameters,
            "Em" => Self::Exameters,
            "Zm" => Self::Zettameters,
            "Ym" => Self::Yottameters,
            "uni" => Self::Universes,
            "in" | "\"" => Self::Inches,
            "ft" | "'" => Self::Feet,
            "mi" => Self::Miles,
            other => {
                return Err(EngineError::InvalidUnit {
                    symbol: other.to_string(),
                })
            }
        })
    }
}

/// A recognized weight unit symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Micrograms,
    Milligrams,
    Grams,
    Kilograms,
    /// Metric tonne, 1000 kg.
    Tonnes,
    Kilotonnes,
    Megatonnes,
    Gigatonnes,
    Teratonnes,
    Ounces,
    Pounds,
    /// US short ton, 2000 lb.
    ShortTons,
}

impl WeightUnit {
    /// The canonical symbol for this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Micrograms => "µg",
            Self::Milligrams => "mg",
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Tonnes => "t",
            Self::Kilotonnes => "kt",
            Self::Megatonnes => "Mt",
            Self::Gigatonnes => "Gt",
            Self::Teratonnes => "Tt",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
            Self::ShortTons => "tons",
        }
    }

    /// Exact size of one of this unit, in kilograms.
    pub fn kilograms(self) -> BigDecimal {
        match self {
            Self::Micrograms => dec(1, 9),
            Self::Milligrams => dec(1, 6),
            Self::Grams => dec(1, 3),
            Self::Kilograms => dec(1, 0),
            Self::Tonnes => dec(1, -3),
            Self::Kilotonnes => dec(1, -6),
            Self::Megatonnes => dec(1, -9),
            Self::Gigatonnes => dec(1, -12),
            Self::Teratonnes => dec(1, -15),
            // 1 lb = 0.45359237 kg exactly; 1 oz = 1/16 lb
            Self::Ounces => dec(28349523125, 12),
            Self::Pounds => dec(45359237, 8),
            Self::ShortTons => dec(90718474, 5),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ug" | "µg" => Self::Micrograms,
            "mg" => Self::Milligrams,
            "g" => Self::Grams,
            "kg" => Self::Kilograms,
            "t" => Self::Tonnes,
            "kt" => Self::Kilotonnes,
            "Mt" => Self::Megatonnes,
            "Gt" => Self::Gigatonnes,
            "Tt" => Self::Teratonnes,
            "oz" => Self::Ounces,
            "lb" | "lbs" => Self::Pounds,
            "ton" | "tons" => Self::ShortTons,
            other => {
                return Err(EngineError::InvalidUnit {
                    symbol: other.to_string(),
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_symbols_round_trip() {
        for unit in [
            LengthUnit::Millimeters,
            LengthUnit::Centimeters,
            LengthUnit::Meters,
            LengthUnit::Kilometers,
            LengthUnit::Inches,
            LengthUnit::Feet,
            LengthUnit::Miles,
            LengthUnit::Universes,
        ] {
            assert_eq!(unit.symbol().parse::<LengthUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn imperial_factors_are_exact() {
        assert_eq!(LengthUnit::Inches.meters(), "0.0254".parse::<BigDecimal>().unwrap());
        assert_eq!(LengthUnit::Feet.meters(), "0.3048".parse::<BigDecimal>().unwrap());
        assert_eq!(LengthUnit::Miles.meters(), "1609.344".parse::<BigDecimal>().unwrap());
        assert_eq!(
            WeightUnit::Pounds.kilograms(),
            "0.45359237".parse::<BigDecimal>().unwrap()
        );
    }

    #[test]
    fn unknown_symbol_is_rejected_with_context() {
        let err = "parsec".parse::<LengthUnit>().unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidUnit {
                symbol: "parsec".to_string()
            }
        );
    }

    #[test]
    fn micro_aliases_accept_both_spellings() {
        assert_eq!("um".parse::<LengthUnit>().unwrap(), LengthUnit::Micrometers);
        assert_eq!("µm".parse::<LengthUnit>().unwrap(), LengthUnit::Micrometers);
        assert_eq!("ug".parse::<WeightUnit>().unwrap(), WeightUnit::Micrograms);
    }
}
