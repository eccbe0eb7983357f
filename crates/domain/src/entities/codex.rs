//! Codex snapshot - the shared content library the rules read from
//!
//! The codex is fetched by the caller and handed to the rules as an explicit,
//! already-loaded snapshot. Lookups never fail: an unknown skill id reads as a
//! base skill, an unknown species grants nothing.

use serde::{Deserialize, Serialize};

use crate::value_objects::SpeciesSkillSet;

/// A skill definition. Sub-skills name the base skill they derive from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub base_skill_id: Option<String>,
}

impl SkillEntry {
    pub fn base(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_skill_id: None,
        }
    }

    pub fn sub_skill(
        id: impl Into<String>,
        name: impl Into<String>,
        base_skill_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_skill_id: Some(base_skill_id.into()),
        }
    }

    pub fn is_sub_skill(&self) -> bool {
        self.base_skill_id.is_some()
    }
}

/// What the rules need to know about a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillMeta<'a> {
    pub base_skill_id: Option<&'a str>,
}

impl SkillMeta<'_> {
    pub fn is_sub_skill(&self) -> bool {
        self.base_skill_id.is_some()
    }
}

/// A playable species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesEntry {
    pub id: String,
    pub name: String,
    /// Skills granted for free; may contain the free-point sentinel id
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub ancestry_traits: Vec<String>,
}

impl SpeciesEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skills: Vec::new(),
            ancestry_traits: Vec::new(),
        }
    }

    pub fn with_skill(mut self, skill_id: impl Into<String>) -> Self {
        self.skills.push(skill_id.into());
        self
    }

    pub fn with_ancestry_trait(mut self, trait_id: impl Into<String>) -> Self {
        self.ancestry_traits.push(trait_id.into());
        self
    }

    pub fn skill_set(&self) -> SpeciesSkillSet {
        self.skills.iter().cloned().collect()
    }
}

/// Immutable snapshot of codex content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodexSnapshot {
    pub species: Vec<SpeciesEntry>,
    pub skills: Vec<SkillEntry>,
}

impl CodexSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species(mut self, species: SpeciesEntry) -> Self {
        self.species.push(species);
        self
    }

    pub fn with_skill(mut self, skill: SkillEntry) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn species(&self, species_id: &str) -> Option<&SpeciesEntry> {
        self.species.iter().find(|s| s.id == species_id)
    }

    pub fn skill(&self, skill_id: &str) -> Option<&SkillEntry> {
        self.skills.iter().find(|s| s.id == skill_id)
    }

    pub fn skill_meta(&self, skill_id: &str) -> SkillMeta<'_> {
        SkillMeta {
            base_skill_id: self.skill(skill_id).and_then(|s| s.base_skill_id.as_deref()),
        }
    }

    /// Free skills for a species; empty when unset or unknown.
    pub fn species_skill_set(&self, species_id: Option<&str>) -> SpeciesSkillSet {
        species_id
            .and_then(|id| self.species(id))
            .map(SpeciesEntry::skill_set)
            .unwrap_or_default()
    }

    /// Display name for a skill, falling back to its id.
    pub fn skill_name<'a>(&'a self, skill_id: &'a str) -> &'a str {
        self.skill(skill_id).map(|s| s.name.as_str()).unwrap_or(skill_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codex() -> CodexSnapshot {
        CodexSnapshot::new()
            .with_skill(SkillEntry::base("athletics", "Athletics"))
            .with_skill(SkillEntry::sub_skill("climbing", "Climbing", "athletics"))
            .with_species(
                SpeciesEntry::new("sylvan", "Sylvan")
                    .with_skill("stealth")
                    .with_ancestry_trait("night-eyes"),
            )
    }

    #[test]
    fn sub_skill_meta_names_its_base() {
        let codex = codex();
        let meta = codex.skill_meta("climbing");
        assert!(meta.is_sub_skill());
        assert_eq!(meta.base_skill_id, Some("athletics"));
        assert!(!codex.skill_meta("athletics").is_sub_skill());
    }

    #[test]
    fn unknown_skill_reads_as_base_skill() {
        assert!(!codex().skill_meta("basket-weaving").is_sub_skill());
        assert_eq!(codex().skill_name("basket-weaving"), "basket-weaving");
    }

    #[test]
    fn species_skill_set_is_empty_without_species() {
        let codex = codex();
        assert!(codex.species_skill_set(None).is_empty());
        assert!(codex.species_skill_set(Some("unknown")).is_empty());
        assert!(codex.species_skill_set(Some("sylvan")).contains("stealth"));
    }

    #[test]
    fn codex_reads_from_json() {
        let json = r#"{
            "species": [{
                "id": "dwarf",
                "name": "Dwarf",
                "skills": ["crafting"],
                "ancestryTraits": ["stonecunning"]
            }],
            "skills": [{"id": "smithing", "name": "Smithing", "baseSkillId": "crafting"}]
        }"#;
        let codex: CodexSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(codex.species("dwarf").map(|s| s.ancestry_traits.len()), Some(1));
        assert!(codex.skill_meta("smithing").is_sub_skill());
    }
}
