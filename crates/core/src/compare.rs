//! Two-entity comparison with mutual projection
//!
//! The comparator orders a pair of profiles by current height and
//! projects each one's baseline into the other's frame of reference
//! through the scale factor separating their self multipliers. Weight
//! projections follow the same cubic law as derivation. Results are
//! ephemeral; they exist for one response and are never stored.

use bigdecimal::{BigDecimal, Zero};
use tracing::debug;

use crate::config::EngineConfig;
use crate::core_types::{Length, UnitSystem, Weight};
use crate::error::{EngineError, EngineResult};
use crate::format::round_to;
use crate::profile::{shoe_size_for, ProfileStore, ScaleProfile};
use crate::proportions::BodyPart;

/// One side of a comparison: an entity's true size plus every
/// measurement of it as perceived from the other entity's frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedFigure {
    /// The entity's true current height.
    pub actual_height: Length,
    /// The entity's true current weight, cubic law applied.
    pub actual_weight: Weight,
    /// Height as perceived from the other frame.
    pub height: Length,
    /// Weight as perceived from the other frame.
    pub weight: Weight,
    /// Body-part dimensions recomputed from the projected height.
    pub dimensions: Vec<(BodyPart, Length)>,
    /// Shoe size recomputed from the projected height.
    pub shoe_size: Option<String>,
    /// The entity's display preference, for the rendering layer.
    pub unit_preference: UnitSystem,
}

/// Symmetric outcome of comparing the larger entity against the smaller.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    /// `big.current_height / small.current_height`, rounded to 3 places.
    pub times_taller: BigDecimal,
    /// The larger entity as the smaller one perceives it.
    pub big_seen_by_small: ProjectedFigure,
    /// The smaller entity as the larger one perceives it.
    pub small_seen_by_big: ProjectedFigure,
}

/// Result of comparing two profiles.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    /// Both current heights are identical; nothing to project.
    EqualMatch,
    /// The entities differ in scale.
    Report(Box<ComparisonReport>),
}

/// Compare two valid profiles and project each into the other's frame.
pub fn compare(
    a: &ScaleProfile,
    b: &ScaleProfile,
    config: &EngineConfig,
) -> EngineResult<Comparison> {
    a.ensure_valid()?;
    b.ensure_valid()?;

    // Identical heights short-circuit before any difference is divided by.
    if a.current_height() == b.current_height() {
        return Ok(Comparison::EqualMatch);
    }
    let (big, small) = if a.current_height() > b.current_height() {
        (a, b)
    } else {
        (b, a)
    };

    let big_multiplier = big.self_multiplier()?;
    let small_multiplier = small.self_multiplier()?;
    if small_multiplier.is_zero() {
        return Err(EngineError::DivisionByZero {
            context: "scale difference",
        });
    }
    // The scale factor separating the two entities' own reference frames.
    let diff_multiplier = &big_multiplier / &small_multiplier;
    let diff_cubed = diff_multiplier.cube();

    let height_seen_by_small = small.base_height().scale_by(&diff_multiplier);
    let height_seen_by_big = big
        .base_height()
        .div_by(&diff_multiplier, "projected height")?;
    let weight_seen_by_small = small.base_weight().scale_by(&diff_cubed);
    let weight_seen_by_big = big.base_weight().div_by(&diff_cubed, "projected weight")?;

    let times_taller = round_to(
        &big.current_height()
            .ratio_to(small.current_height(), "times taller")?,
        3,
    );
    debug!(times_taller = %times_taller, "compared profiles");

    Ok(Comparison::Report(Box::new(ComparisonReport {
        times_taller,
        big_seen_by_small: project(big, height_seen_by_small, weight_seen_by_small, config)?,
        small_seen_by_big: project(small, height_seen_by_big, weight_seen_by_big, config)?,
    })))
}

/// Fetch both profiles from the upstream store, then compare.
pub fn compare_by_id(
    store: &dyn ProfileStore,
    a: &str,
    b: &str,
    config: &EngineConfig,
) -> EngineResult<Comparison> {
    let a = store.lookup(a)?;
    let b = store.lookup(b)?;
    compare(&a, &b, config)
}

fn project(
    profile: &ScaleProfile,
    height: Length,
    weight: Weight,
    config: &EngineConfig,
) -> EngineResult<ProjectedFigure> {
    let dimensions = config.proportions.dimensions(&height);
    let shoe_size = shoe_size_for(&height, &config.proportions, &config.shoe_formula);
    Ok(ProjectedFigure {
        actual_height: profile.current_height().clone(),
        actual_weight: profile.current_weight()?,
        height,
        weight,
        dimensions,
        shoe_size,
        unit_preference: profile.unit_preference(),
    })
}
