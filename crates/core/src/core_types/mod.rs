//! Canonical quantities and the unit symbols that feed them

pub mod length;
pub mod units;
pub mod weight;

pub use length::Length;
pub use units::{LengthUnit, Precision, UnitSystem, WeightUnit};
pub use weight::Weight;
