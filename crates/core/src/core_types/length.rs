//! Canonical length
//!
//! All internal length arithmetic happens on [`Length`], an unbounded
//! decimal count of meters. Multipliers in this game legitimately range
//! from well below 10^-6 to beyond 10^15 and get cubed along the way, so a
//! fixed-width float would make near-equal heights compare unreliably;
//! every operation here stays in decimal.

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::units::LengthUnit;
use crate::error::{EngineError, EngineResult};

/// A canonical length in meters. Always non-negative.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "BigDecimal")]
pub struct Length(BigDecimal);

impl TryFrom<BigDecimal> for Length {
    type Error = EngineError;

    /// Deserialization takes this path, so stored data cannot smuggle a
    /// negative value past [`Length::from_meters`].
    fn try_from(meters: BigDecimal) -> Result<Self, Self::Error> {
        Self::from_meters(meters)
    }
}

impl Length {
    /// Create from a meter count. Rejects negative values.
    pub fn from_meters(meters: BigDecimal) -> EngineResult<Self> {
        if meters < BigDecimal::zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "length",
                value: meters.to_string(),
            });
        }
        Ok(Self(meters))
    }

    /// Create from a value already proven non-negative.
    pub(crate) fn from_meters_unchecked(meters: BigDecimal) -> Self {
        debug_assert!(meters >= BigDecimal::zero());
        Self(meters)
    }

    /// Parse a pre-split magnitude and unit symbol into a canonical length.
    ///
    /// Fails with [`EngineError::InvalidUnit`] on an unrecognized symbol
    /// and [`EngineError::InvalidMagnitude`] on a non-positive magnitude.
    pub fn parse(value: &BigDecimal, symbol: &str) -> EngineResult<Self> {
        let unit: LengthUnit = symbol.parse()?;
        Self::from_unit(value, unit)
    }

    /// Convert a positive magnitude in `unit` to a canonical length.
    pub fn from_unit(value: &BigDecimal, unit: LengthUnit) -> EngineResult<Self> {
        if *value <= BigDecimal::zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "length",
                value: value.to_string(),
            });
        }
        Ok(Self(value * unit.meters()))
    }

    /// Build a length from a composite `X'Y"` input, pre-split by the
    /// caller into its feet and inches parts. Inches may be zero; the
    /// total must be positive.
    pub fn from_feet_inches(feet: &BigDecimal, inches: &BigDecimal) -> EngineResult<Self> {
        let total_inches = feet * BigDecimal::from(12) + inches;
        if total_inches <= BigDecimal::zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "feet and inches",
                value: format!("{feet}'{inches}\""),
            });
        }
        Ok(Self(total_inches * LengthUnit::Inches.meters()))
    }

    /// The canonical meter count.
    pub fn meters(&self) -> &BigDecimal {
        &self.0
    }

    /// This length expressed as a coefficient of `unit`.
    pub fn in_unit(&self, unit: LengthUnit) -> BigDecimal {
        &self.0 / unit.meters()
    }

    /// Whether the length is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Scale by a non-negative dimensionless ratio.
    pub fn scale_by(&self, ratio: &BigDecimal) -> Self {
        Self(&self.0 * ratio)
    }

    /// Divide by a dimensionless ratio, guarding against zero.
    pub fn div_by(&self, ratio: &BigDecimal, context: &'static str) -> EngineResult<Self> {
        if ratio.is_zero() {
            return Err(EngineError::DivisionByZero { context });
        }
        Ok(Self(&self.0 / ratio))
    }

    /// The dimensionless ratio `self / other`, guarding against zero.
    pub fn ratio_to(&self, other: &Self, context: &'static str) -> EngineResult<BigDecimal> {
        if other.0.is_zero() {
            return Err(EngineError::DivisionByZero { context });
        }
        Ok(&self.0 / &other.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m", self.0.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn parse_converts_to_meters_exactly() {
        let height = Length::parse(&num("180"), "cm").unwrap();
        assert_eq!(height.meters(), &num("1.8"));

        let height = Length::parse(&num("5.5"), "ft").unwrap();
        assert_eq!(height.meters(), &num("1.6764"));
    }

    #[test]
    fn parse_rejects_non_positive_magnitudes() {
        for raw in ["0", "-1.7"] {
            let err = Length::parse(&num(raw), "m").unwrap_err();
            assert!(matches!(err, EngineError::InvalidMagnitude { .. }));
        }
    }

    #[test]
    fn feet_and_inches_composite() {
        // 5'9" = 69 in = 1.7526 m
        let height = Length::from_feet_inches(&num("5"), &num("9")).unwrap();
        assert_eq!(height.meters(), &num("1.7526"));
    }

    #[test]
    fn ordering_uses_canonical_values() {
        let a = Length::parse(&num("1"), "m").unwrap();
        let b = Length::parse(&num("100"), "cm").unwrap();
        let c = Length::parse(&num("1.000001"), "m").unwrap();
        assert_eq!(a, b);
        assert!(c > a);
    }

    #[test]
    fn deserialization_rejects_negative_values() {
        let err = serde_json::from_str::<Length>("\"-1.7\"").unwrap_err();
        assert!(err.to_string().contains("invalid length"));
        // Zero is a legal length, just never a divisor.
        let zero: Length = serde_json::from_str("\"0\"").unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn ratio_of_zero_base_is_division_by_zero() {
        let top = Length::from_meters(num("1.7")).unwrap();
        let zero = Length::from_meters(num("0")).unwrap();
        let err = top.ratio_to(&zero, "self multiplier").unwrap_err();
        assert_eq!(
            err,
            EngineError::DivisionByZero {
                context: "self multiplier"
            }
        );
    }
}
