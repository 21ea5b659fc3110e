//! Engine configuration
//!
//! Every tunable the engine exposes lives in one immutable value that
//! callers pass into each deriving and formatting operation. Nothing here
//! is ambient process state; tests and alternate deployments construct
//! their own [`EngineConfig`] with different reference figures or tables.

use bigdecimal::{BigDecimal, One};
use serde::{Deserialize, Serialize};

use crate::core_types::units::dec;
use crate::core_types::{Length, Weight};
use crate::proportions::{ProportionTable, ShoeFormula};

/// The normal-sized person every profile is measured against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFigure {
    /// Average human height, 1.754 m.
    pub height: Length,
    /// Average human weight, 66.76 kg.
    pub weight: Weight,
    /// Baseline density factor, 1.0.
    pub density: BigDecimal,
}

impl Default for ReferenceFigure {
    fn default() -> Self {
        Self {
            height: Length::from_meters_unchecked(dec(1754, 3)),
            weight: Weight::from_kilograms_unchecked(dec(6676, 2)),
            density: BigDecimal::one(),
        }
    }
}

/// One rung of the place-value naming table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceValueEntry {
    /// Smallest ratio this name applies to.
    pub threshold: BigDecimal,
    /// The name, e.g. "thousand".
    pub name: String,
}

impl PlaceValueEntry {
    fn new(threshold: BigDecimal, name: &str) -> Self {
        Self {
            threshold,
            name: name.to_string(),
        }
    }
}

/// Immutable configuration for every engine operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Global reference figure for the "times normal" multiplier.
    pub reference: ReferenceFigure,
    /// Height-to-body-part ratio table.
    pub proportions: ProportionTable,
    /// Foot-length-to-shoe-size mapping.
    pub shoe_formula: ShoeFormula,
    /// Place-value naming table, ordered ascending by threshold.
    pub place_values: Vec<PlaceValueEntry>,
    /// Coefficients beyond this render in scientific notation.
    pub scientific_threshold: BigDecimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference: ReferenceFigure::default(),
            proportions: ProportionTable::default(),
            shoe_formula: ShoeFormula::default(),
            place_values: vec![
                PlaceValueEntry::new(dec(1, -3), "thousand"),
                PlaceValueEntry::new(dec(1, -6), "million"),
                PlaceValueEntry::new(dec(1, -9), "billion"),
                PlaceValueEntry::new(dec(1, -12), "trillion"),
                PlaceValueEntry::new(dec(1, -15), "quadrillion"),
            ],
            scientific_threshold: dec(1, -15),
        }
    }
}
