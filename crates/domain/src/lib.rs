//! Realms domain - character build economy and skill encounter rules.
//!
//! Pure rules over plain data. No I/O, no logging, no randomness of its own:
//! callers inject the ability progression and the dice.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use aggregates::{
    AncestryChoice, ArchetypeChoice, ArchetypeType, CharacterDraft, EncounterStatus,
    FeatSelection, FeatTag, HealthEnergySplit, SkillEncounter, SkillParticipant,
};
pub use entities::{CodexSnapshot, SkillEntry, SkillMeta, SpeciesEntry};
pub use error::DomainError;
pub use ids::{EncounterId, ParticipantId};
pub use value_objects::{
    Ability, AbilityScores, CreatorStep, Defense, DefenseAllocation, EntityKind, EntityLevel,
    Severity, SkillAllocation, SpeciesSkillSet, ValidationIssue,
};
