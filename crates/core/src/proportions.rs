//! Proportional body measurements
//!
//! A fixed table of dimensionless ratios defines each body-part dimension
//! as a fraction of height (height itself is the 1:1 anchor). The ratios
//! are empirically chosen "fun" constants with no derivation to preserve,
//! so they live in data rather than logic and can be swapped wholesale
//! through [`crate::config::EngineConfig`]. The same goes for the shoe
//! size mapping, which is the one non-linear entry.

use bigdecimal::{BigDecimal, One, RoundingMode, Zero};
use serde::{Deserialize, Serialize};

use crate::core_types::units::dec;
use crate::core_types::Length;
use crate::format::plain_number;

/// The closed set of body parts derived from height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyPart {
    FootLength,
    FootWidth,
    ToeHeight,
    ThumbSize,
    FingerprintDepth,
    HairWidth,
}

impl BodyPart {
    /// Every derivable part, in display order.
    pub const ALL: [Self; 6] = [
        Self::FootLength,
        Self::FootWidth,
        Self::ToeHeight,
        Self::ThumbSize,
        Self::FingerprintDepth,
        Self::HairWidth,
    ];

    /// Human-readable label for chat output.
    pub fn label(self) -> &'static str {
        match self {
            Self::FootLength => "Foot Length",
            Self::FootWidth => "Foot Width",
            Self::ToeHeight => "Toe Height",
            Self::ThumbSize => "Thumb Size",
            Self::FingerprintDepth => "Fingerprint Depth",
            Self::HairWidth => "Hair Width",
        }
    }
}

/// One ratio in the proportion table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionEntry {
    /// Which body part this ratio produces.
    pub part: BodyPart,
    /// The part's size as a fraction of height.
    pub ratio: BigDecimal,
}

/// The full height-to-body-part ratio table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionTable {
    entries: Vec<ProportionEntry>,
}

impl ProportionTable {
    /// Build a table from explicit entries.
    pub fn new(entries: Vec<ProportionEntry>) -> Self {
        Self { entries }
    }

    /// The ratio for `part`, if the table defines one.
    pub fn ratio(&self, part: BodyPart) -> Option<&BigDecimal> {
        self.entries
            .iter()
            .find(|entry| entry.part == part)
            .map(|entry| &entry.ratio)
    }

    /// `height * ratio[part]`, if the table defines the part.
    pub fn dimension(&self, height: &Length, part: BodyPart) -> Option<Length> {
        self.ratio(part).map(|ratio| height.scale_by(ratio))
    }

    /// Every defined dimension for `height`, in table order.
    pub fn dimensions(&self, height: &Length) -> Vec<(BodyPart, Length)> {
        self.entries
            .iter()
            .map(|entry| (entry.part, height.scale_by(&entry.ratio)))
            .collect()
    }
}

impl Default for ProportionTable {
    fn default() -> Self {
        let foot_length = BigDecimal::one() / BigDecimal::from(7);
        // length / 2.5, written as an exact multiplication by 0.4
        let foot_width = &foot_length * dec(4, 1);
        Self::new(vec![
            ProportionEntry {
                part: BodyPart::FootLength,
                ratio: foot_length,
            },
            ProportionEntry {
                part: BodyPart::FootWidth,
                ratio: foot_width,
            },
            ProportionEntry {
                part: BodyPart::ToeHeight,
                ratio: BigDecimal::one() / BigDecimal::from(65),
            },
            ProportionEntry {
                part: BodyPart::ThumbSize,
                ratio: BigDecimal::one() / BigDecimal::from(26),
            },
            ProportionEntry {
                part: BodyPart::FingerprintDepth,
                ratio: BigDecimal::one() / BigDecimal::from(35080),
            },
            ProportionEntry {
                part: BodyPart::HairWidth,
                ratio: BigDecimal::one() / BigDecimal::from(23387),
            },
        ])
    }
}

/// Piecewise foot-length-to-shoe-size mapping.
///
/// `size = scale * foot_length_inches + offset`, with the adult offset
/// tried first and the children's offset as the fallback for feet too
/// small for an adult size 1. Everything is data so the mapping can be
/// versioned and replaced without touching the comparator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoeFormula {
    /// Sizes gained per inch of foot length (3 = one barleycorn per size).
    pub scale: BigDecimal,
    /// Offset for the adult US men's scale.
    pub adult_offset: BigDecimal,
    /// Offset for the children's US scale.
    pub child_offset: BigDecimal,
}

impl Default for ShoeFormula {
    fn default() -> Self {
        Self {
            scale: BigDecimal::from(3),
            adult_offset: BigDecimal::from(-22),
            child_offset: dec(-967, 2),
        }
    }
}

impl ShoeFormula {
    /// Convert a foot length in inches to a conventional shoe-size label.
    pub fn size_label(&self, foot_length_inches: &BigDecimal) -> String {
        let adult = &self.scale * foot_length_inches + &self.adult_offset;
        if adult >= BigDecimal::one() {
            return format!("Size US {}", plain_number(&nearest_half(&adult)));
        }
        let child = &self.scale * foot_length_inches + &self.child_offset;
        if child > BigDecimal::zero() {
            return format!("Size US {} (Children's)", plain_number(&nearest_half(&child)));
        }
        "Size US 0 (Too small!)".to_string()
    }
}

/// Round a size to the nearest half step, as shoe sizes are quoted.
fn nearest_half(size: &BigDecimal) -> BigDecimal {
    let doubled = size * BigDecimal::from(2);
    doubled.with_scale_round(0, RoundingMode::HalfUp) / BigDecimal::from(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn default_table_defines_every_part() {
        let table = ProportionTable::default();
        for part in BodyPart::ALL {
            assert!(table.ratio(part).is_some(), "missing ratio for {part:?}");
        }
    }

    #[test]
    fn foot_length_is_a_seventh_of_height() {
        let table = ProportionTable::default();
        let height = Length::from_meters(num("1.75")).unwrap();
        let foot = table.dimension(&height, BodyPart::FootLength).unwrap();
        // 1.75 / 7 = 0.25 m; the stored 1/7 carries division precision,
        // so compare well past any displayable place.
        assert_eq!(foot.meters().with_scale_round(50, RoundingMode::HalfUp), num("0.25"));
    }

    #[test]
    fn foot_width_is_foot_length_over_two_and_a_half() {
        let table = ProportionTable::default();
        let length = table.ratio(BodyPart::FootLength).unwrap();
        let width = table.ratio(BodyPart::FootWidth).unwrap();
        assert_eq!(width * num("2.5"), length.clone());
    }

    #[test]
    fn adult_shoe_sizes() {
        let formula = ShoeFormula::default();
        // 10.5 in foot: 3 * 10.5 - 22 = 9.5
        assert_eq!(formula.size_label(&num("10.5")), "Size US 9.5");
        // 11 in foot: size 11
        assert_eq!(formula.size_label(&num("11")), "Size US 11");
    }

    #[test]
    fn small_feet_fall_back_to_childrens_scale() {
        let formula = ShoeFormula::default();
        // 4 in foot: adult 12 - 22 < 1, child 12 - 9.67 = 2.33 -> 2.5
        assert_eq!(formula.size_label(&num("4")), "Size US 2.5 (Children's)");
        // 1 in foot: below even the children's scale
        assert_eq!(formula.size_label(&num("1")), "Size US 0 (Too small!)");
    }
}
