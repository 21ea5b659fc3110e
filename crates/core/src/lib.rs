//! Scale Conversion & Comparison Engine
//!
//! The numeric core of a fictional scale-play chat game: entities
//! register a natural height/weight baseline and a current height, and
//! the engine derives everything else.
//!
//! - Canonical quantities keep all arithmetic in unbounded decimal, so
//!   sub-millimeter detail and astronomical magnitudes coexist without
//!   precision loss.
//! - The formatter renders those values as metric or imperial strings,
//!   switching to scientific notation at extreme magnitudes.
//! - A proportion table derives body-part dimensions (and a shoe size)
//!   from a single height.
//! - The comparator projects two entities into each other's frame of
//!   reference, with weight following the cube of the linear scale.
//!
//! Every operation is a pure function over immutable values; there is no
//! shared mutable state anywhere, so concurrent requests need no
//! coordination. All tunables (reference figure, ratio tables, notation
//! thresholds) travel in an explicit [`EngineConfig`] rather than ambient
//! globals.
//!
//! ```
//! use bigdecimal::BigDecimal;
//! use size_engine_core::{
//!     format_length, EngineConfig, Length, Precision, ScaleProfile, UnitSystem, Weight,
//! };
//!
//! let config = EngineConfig::default();
//! let profile = ScaleProfile::new(
//!     Length::parse(&BigDecimal::from(17), "m").unwrap(),
//!     Length::parse(&BigDecimal::from(170), "cm").unwrap(),
//!     Weight::parse(&BigDecimal::from(70), "kg").unwrap(),
//!     BigDecimal::from(1),
//!     UnitSystem::Metric,
//! )
//! .unwrap();
//!
//! let stats = profile.derive(&config).unwrap();
//! assert_eq!(stats.self_multiplier, BigDecimal::from(10));
//! assert_eq!(stats.current_weight.kilograms(), &BigDecimal::from(70000));
//! // To the giant, a normal person looks pocket-sized.
//! assert_eq!(
//!     format_length(&stats.normal_height_scaled, UnitSystem::Metric, Precision::Accurate, &config),
//!     "18.097 cm"
//! );
//! ```

pub mod compare;
pub mod config;
pub mod core_types;
pub mod error;
pub mod format;
pub mod profile;
pub mod proportions;

pub use compare::{compare, compare_by_id, Comparison, ComparisonReport, ProjectedFigure};
pub use config::{EngineConfig, PlaceValueEntry, ReferenceFigure};
pub use core_types::{Length, LengthUnit, Precision, UnitSystem, Weight, WeightUnit};
pub use error::{EngineError, EngineResult};
pub use format::{format_length, format_weight, place_value};
pub use profile::{DerivedStats, ProfileStore, ScaleProfile};
pub use proportions::{BodyPart, ProportionEntry, ProportionTable, ShoeFormula};
