//! Value objects - Immutable objects defined by their attributes

mod abilities;
mod defenses;
mod level;
mod skills;
mod validation_issue;

pub use abilities::{Ability, AbilityScores};
pub use defenses::{Defense, DefenseAllocation, MAX_PURCHASED_DEFENSE_BONUS};
pub use level::{EntityKind, EntityLevel, MAX_ENTITY_LEVEL};
pub use skills::{SkillAllocation, SpeciesSkillSet, SKILL_VALUE_SOFT_CAP};
pub use validation_issue::{CreatorStep, Severity, ValidationIssue};
