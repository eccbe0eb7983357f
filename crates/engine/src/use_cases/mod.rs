//! Use cases - User story orchestration.
//!
//! Each module wires the domain rules to the ports they need.

pub mod character_review;
pub mod skill_encounter;

pub use character_review::{DraftReview, ReviewDraft, ReviewError};
pub use skill_encounter::{
    parse_roll_entries, EncounterError, EncounterReport, EncounterRequest, RollEntry, RollInput,
    RunSkillEncounter,
};
