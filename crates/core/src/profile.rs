//! Scale profiles and their derived measurements
//!
//! A profile stores the four facts the engine needs about an entity and
//! nothing else; every other number is a pure function of those fields
//! plus the [`EngineConfig`]. Profiles are immutable after construction,
//! so derivation is safe to run concurrently without locking.

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::core_types::{Length, LengthUnit, UnitSystem, Weight};
use crate::error::{EngineError, EngineResult};
use crate::format::round_to;
use crate::proportions::{BodyPart, ProportionTable, ShoeFormula};

/// Per-entity scale state: present height plus the natural baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleProfile {
    current_height: Length,
    base_height: Length,
    base_weight: Weight,
    density: BigDecimal,
    unit_preference: UnitSystem,
}

impl ScaleProfile {
    /// Construct a profile, enforcing the positivity invariants: every
    /// stored magnitude must be strictly positive.
    pub fn new(
        current_height: Length,
        base_height: Length,
        base_weight: Weight,
        density: BigDecimal,
        unit_preference: UnitSystem,
    ) -> EngineResult<Self> {
        if current_height.is_zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "current height",
                value: current_height.meters().to_string(),
            });
        }
        if base_height.is_zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "base height",
                value: base_height.meters().to_string(),
            });
        }
        if base_weight.is_zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "base weight",
                value: base_weight.kilograms().to_string(),
            });
        }
        if density <= BigDecimal::zero() {
            return Err(EngineError::InvalidMagnitude {
                field: "density",
                value: density.to_string(),
            });
        }
        Ok(Self {
            current_height,
            base_height,
            base_weight,
            density,
            unit_preference,
        })
    }

    /// The entity's present height.
    pub fn current_height(&self) -> &Length {
        &self.current_height
    }

    /// The entity's natural height.
    pub fn base_height(&self) -> &Length {
        &self.base_height
    }

    /// The entity's weight at its natural height.
    pub fn base_weight(&self) -> &Weight {
        &self.base_weight
    }

    /// Multiplicative density factor, 1.0 for normal human density.
    pub fn density(&self) -> &BigDecimal {
        &self.density
    }

    /// Which system this entity prefers for display. Never affects math.
    pub fn unit_preference(&self) -> UnitSystem {
        self.unit_preference
    }

    /// `current_height / base_height`.
    pub fn self_multiplier(&self) -> EngineResult<BigDecimal> {
        self.current_height
            .ratio_to(&self.base_height, "self multiplier")
    }

    /// `current_height / reference height`.
    pub fn global_multiplier(&self, config: &EngineConfig) -> EngineResult<BigDecimal> {
        self.current_height
            .ratio_to(&config.reference.height, "global multiplier")
    }

    /// The cubic scaling law: `base_weight * self_multiplier³ * density`.
    pub fn current_weight(&self) -> EngineResult<Weight> {
        let multiplier = self.self_multiplier()?;
        Ok(self
            .base_weight
            .scale_by(&(multiplier.cube() * &self.density)))
    }

    /// Re-check the construction invariants before any code path that
    /// divides by a stored field. Deserialized profiles bypass [`Self::new`],
    /// and every magnitude must be strictly positive here, not merely
    /// non-zero.
    pub(crate) fn ensure_valid(&self) -> EngineResult<()> {
        if *self.current_height.meters() <= BigDecimal::zero() {
            return Err(EngineError::InvalidProfile {
                field: "current height",
                value: self.current_height.meters().to_string(),
            });
        }
        if *self.base_height.meters() <= BigDecimal::zero() {
            return Err(EngineError::InvalidProfile {
                field: "base height",
                value: self.base_height.meters().to_string(),
            });
        }
        if *self.base_weight.kilograms() <= BigDecimal::zero() {
            return Err(EngineError::InvalidProfile {
                field: "base weight",
                value: self.base_weight.kilograms().to_string(),
            });
        }
        if self.density <= BigDecimal::zero() {
            return Err(EngineError::InvalidProfile {
                field: "density",
                value: self.density.to_string(),
            });
        }
        Ok(())
    }

    /// Derive every on-demand measurement from the stored fields.
    pub fn derive(&self, config: &EngineConfig) -> EngineResult<DerivedStats> {
        self.ensure_valid()?;
        let self_multiplier = self.self_multiplier()?;
        let global_multiplier = self.global_multiplier(config)?;
        let current_weight = self
            .base_weight
            .scale_by(&(self_multiplier.cube() * &self.density));
        let dimensions = config.proportions.dimensions(&self.current_height);
        let shoe_size = shoe_size_for(
            &self.current_height,
            &config.proportions,
            &config.shoe_formula,
        );
        // What a normal-sized person looks like from this entity's frame.
        let normal_height_scaled = config
            .reference
            .height
            .div_by(&global_multiplier, "comparative normal height")?;
        let normal_weight_scaled = config
            .reference
            .weight
            .div_by(&global_multiplier.cube(), "comparative normal weight")?;
        debug!(
            self_multiplier = %self_multiplier,
            global_multiplier = %global_multiplier,
            "derived profile stats"
        );
        Ok(DerivedStats {
            self_multiplier,
            global_multiplier,
            current_weight,
            dimensions,
            shoe_size,
            normal_height_scaled,
            normal_weight_scaled,
        })
    }
}

/// Everything computable from one profile, on demand and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStats {
    /// Ratio of current height to the entity's own baseline.
    pub self_multiplier: BigDecimal,
    /// Ratio of current height to the configured reference height.
    pub global_multiplier: BigDecimal,
    /// Present weight under the cubic scaling law.
    pub current_weight: Weight,
    /// Every proportional body-part dimension, in table order.
    pub dimensions: Vec<(BodyPart, Length)>,
    /// Shoe-size label, when the table defines a foot length.
    pub shoe_size: Option<String>,
    /// A normal-sized person's height, seen from this entity's frame.
    pub normal_height_scaled: Length,
    /// A normal-sized person's weight, seen from this entity's frame.
    pub normal_weight_scaled: Weight,
}

impl DerivedStats {
    /// The derived dimension for one body part, if present.
    pub fn dimension(&self, part: BodyPart) -> Option<&Length> {
        self.dimensions
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, length)| length)
    }
}

/// Shoe size for the foot belonging to `height`: foot length in inches,
/// rounded to thousandths, pushed through the configured formula.
pub(crate) fn shoe_size_for(
    height: &Length,
    proportions: &ProportionTable,
    formula: &ShoeFormula,
) -> Option<String> {
    proportions
        .dimension(height, BodyPart::FootLength)
        .map(|foot| {
            let inches = round_to(&foot.in_unit(LengthUnit::Inches), 3);
            formula.size_label(&inches)
        })
}

/// Read-only source of profiles, owned by the surrounding system.
///
/// The engine fetches at most two profiles per comparison and never
/// writes back. A miss is surfaced as [`EngineError::ProfileNotFound`];
/// the engine does not retry and never invents defaults.
pub trait ProfileStore {
    /// Fetch the profile registered under `id`.
    fn lookup(&self, id: &str) -> EngineResult<ScaleProfile>;
}
