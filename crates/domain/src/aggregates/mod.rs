//! Aggregates - the draft being built and the encounter being tracked

pub mod character_draft;
pub mod skill_encounter;

pub use character_draft::{
    AncestryChoice, ArchetypeChoice, ArchetypeType, CharacterDraft, FeatSelection, FeatTag,
    HealthEnergySplit,
};
pub use skill_encounter::{EncounterStatus, SkillEncounter, SkillParticipant};
