//! Canonical weight
//!
//! Same precision model as [`super::length`]: an unbounded decimal count
//! of kilograms, fine enough for sub-gram detail and for the cubic blowup
//! of astronomically scaled entities.

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::units::WeightUnit;
use crate::error::{EngineError, EngineResult};

/// A canonical weight in kilograms. Always non-negative.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "BigDecimal")]
pub struct Weight(BigDecimal);

impl TryFrom<BigDecimal> for Weight {
    type Error = EngineError;

    /// Deserialization takes this path, so stored data cannot smuggle a
    /// negative value past [`Weight::from_kilograms`].
    fn try_from(kilograms: BigDecimal) -> Result<Self, Self::Error> {
        Self::from_kilograms(kilograms)
    }
}

impl Weight {
    /// Create from a kilogram count. Rejects negative values.
    pub fn from_kilograms(kilograms: BigDecimal) -> EngineResult<Self> {
        if kilograms < BigDecimal::zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "weight",
                value: kilograms.to_string(),
            });
        }
        Ok(Self(kilograms))
    }

    /// Create from a value already proven non-negative.
    pub(crate) fn from_kilograms_unchecked(kilograms: BigDecimal) -> Self {
        debug_assert!(kilograms >= BigDecimal::zero());
        Self(kilograms)
    }

    /// Parse a pre-split magnitude and unit symbol into a canonical weight.
    ///
    /// Fails with [`EngineError::InvalidUnit`] on an unrecognized symbol
    /// and [`EngineError::InvalidMagnitude`] on a non-positive magnitude.
    pub fn parse(value: &BigDecimal, symbol: &str) -> EngineResult<Self> {
        let unit: WeightUnit = symbol.parse()?;
        Self::from_unit(value, unit)
    }

    /// Convert a positive magnitude in `unit` to a canonical weight.
    pub fn from_unit(value: &BigDecimal, unit: WeightUnit) -> EngineResult<Self> {
        if *value <= BigDecimal::zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "weight",
                value: value.to_string(),
            });
        }
        Ok(Self(value * unit.kilograms()))
    }

    /// The canonical kilogram count.
    pub fn kilograms(&self) -> &BigDecimal {
        &self.0
    }

    /// This weight expressed as a coefficient of `unit`.
    pub fn in_unit(&self, unit: WeightUnit) -> BigDecimal {
        &self.0 / unit.kilograms()
    }

    /// Whether the weight is exactly zero.
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
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0.normalized())
    }
}
