//! Entity level and entity kind
//!
//! Every budget formula is driven by the level. Levels arrive from live
//! editor state, so construction never fails: fractional values are floored,
//! anything below 1 (or non-finite) becomes 1.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest level the engine distinguishes. Larger inputs saturate here so
/// that every derived budget stays within `i32`.
pub const MAX_ENTITY_LEVEL: u32 = 65_535;

/// A normalized level, always `1..=MAX_ENTITY_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "u32")]
pub struct EntityLevel(u32);

impl EntityLevel {
    pub const ONE: EntityLevel = EntityLevel(1);

    /// Build a level from an integer, clamping into the valid range.
    pub fn new(level: i64) -> Self {
        Self(level.clamp(1, MAX_ENTITY_LEVEL as i64) as u32)
    }

    /// Build a level from a possibly fractional or non-finite number.
    pub fn from_f64(level: f64) -> Self {
        if !level.is_finite() {
            return Self::ONE;
        }
        let floored = level.floor();
        if floored >= MAX_ENTITY_LEVEL as f64 {
            Self(MAX_ENTITY_LEVEL)
        } else {
            Self::new(floored as i64)
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The level as a signed value for point arithmetic.
    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Levels gained beyond the first.
    pub fn levels_above_first(self) -> i32 {
        self.as_i32() - 1
    }
}

impl Default for EntityLevel {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<f64> for EntityLevel {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<i64> for EntityLevel {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<EntityLevel> for u32 {
    fn from(value: EntityLevel) -> Self {
        value.0
    }
}

impl fmt::Display for EntityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Characters and creatures follow different skill point progressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    #[default]
    Character,
    Creature,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Character => "character",
            EntityKind::Creature => "creature",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_clamps_to_one() {
        assert_eq!(EntityLevel::new(0).get(), 1);
        assert_eq!(EntityLevel::new(-7).get(), 1);
        assert_eq!(EntityLevel::new(4).get(), 4);
    }

    #[test]
    fn fractional_level_is_floored() {
        assert_eq!(EntityLevel::from_f64(3.9).get(), 3);
        assert_eq!(EntityLevel::from_f64(0.5).get(), 1);
        assert_eq!(EntityLevel::from_f64(-2.5).get(), 1);
    }

    #[test]
    fn non_finite_level_becomes_one() {
        assert_eq!(EntityLevel::from_f64(f64::NAN), EntityLevel::ONE);
        assert_eq!(EntityLevel::from_f64(f64::NEG_INFINITY), EntityLevel::ONE);
        assert_eq!(EntityLevel::from_f64(f64::INFINITY), EntityLevel::ONE);
    }

    #[test]
    fn huge_level_saturates() {
        assert_eq!(EntityLevel::new(i64::MAX).get(), MAX_ENTITY_LEVEL);
        assert_eq!(EntityLevel::from_f64(1e12).get(), MAX_ENTITY_LEVEL);
    }

    #[test]
    fn level_deserializes_from_json_numbers() {
        let level: EntityLevel = serde_json::from_str("4.7").unwrap();
        assert_eq!(level.get(), 4);
        let level: EntityLevel = serde_json::from_str("-3").unwrap();
        assert_eq!(level.get(), 1);
        assert_eq!(serde_json::to_string(&EntityLevel::new(6)).unwrap(), "6");
    }

    #[test]
    fn entity_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&EntityKind::Creature).unwrap(),
            "\"creature\""
        );
        assert_eq!(EntityKind::default(), EntityKind::Character);
    }
}
