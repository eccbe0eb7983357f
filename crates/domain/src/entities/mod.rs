//! Entities - codex content the rules consult

mod codex;

pub use codex::{CodexSnapshot, SkillEntry, SkillMeta, SpeciesEntry};
