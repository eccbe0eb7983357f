//! CharacterDraft aggregate - a character being built in the creator
//!
//! # Design Decision
//!
//! Public fields: the draft is mutated step by step by the editor and may sit
//! in any intermediate (even illegal) state. The rules report on that state,
//! they never refuse to hold it.

use serde::{Deserialize, Serialize};

use crate::value_objects::{
    AbilityScores, DefenseAllocation, EntityKind, EntityLevel, SkillAllocation,
};

/// Archetype families, which set how many archetype feats a build expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeType {
    Power,
    PoweredMartial,
    Martial,
}

impl ArchetypeType {
    pub fn archetype_feat_quota(&self) -> usize {
        match self {
            ArchetypeType::Power => 1,
            ArchetypeType::PoweredMartial => 2,
            ArchetypeType::Martial => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArchetypeType::Power => "Power",
            ArchetypeType::PoweredMartial => "Powered-Martial",
            ArchetypeType::Martial => "Martial",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeChoice {
    pub id: String,
    pub archetype_type: ArchetypeType,
}

/// Chosen ancestry and the traits picked from the species' list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncestryChoice {
    pub id: String,
    #[serde(default)]
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatTag {
    Archetype,
    Character,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatSelection {
    pub id: String,
    pub tag: FeatTag,
}

impl FeatSelection {
    pub fn archetype(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: FeatTag::Archetype,
        }
    }

    pub fn character(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: FeatTag::Character,
        }
    }
}

/// How the health-energy pool was split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthEnergySplit {
    pub health: i32,
    pub energy: i32,
}

impl HealthEnergySplit {
    pub fn new(health: i32, energy: i32) -> Self {
        Self { health, energy }
    }

    /// Points allocated; negative entries count as zero.
    pub fn allocated(&self) -> i32 {
        self.health.max(0).saturating_add(self.energy.max(0))
    }
}

/// A character in the creator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterDraft {
    pub name: String,
    pub level: EntityLevel,
    pub kind: EntityKind,
    pub archetype: Option<ArchetypeChoice>,
    pub species_id: Option<String>,
    pub ancestry: Option<AncestryChoice>,
    pub abilities: AbilityScores,
    pub skills: SkillAllocation,
    pub defenses: DefenseAllocation,
    pub feats: Vec<FeatSelection>,
    pub training_points_spent: i32,
    pub currency_spent: i32,
    pub health_energy: HealthEnergySplit,
}

impl CharacterDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = EntityLevel::new(level);
        self
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_archetype(mut self, id: impl Into<String>, archetype_type: ArchetypeType) -> Self {
        self.archetype = Some(ArchetypeChoice {
            id: id.into(),
            archetype_type,
        });
        self
    }

    pub fn with_species(mut self, species_id: impl Into<String>) -> Self {
        self.species_id = Some(species_id.into());
        self
    }

    pub fn with_ancestry(mut self, id: impl Into<String>) -> Self {
        let traits = self.ancestry.take().map(|a| a.traits).unwrap_or_default();
        self.ancestry = Some(AncestryChoice {
            id: id.into(),
            traits,
        });
        self
    }

    /// Adds a trait to the current ancestry, starting an unnamed one if none is set.
    pub fn with_ancestry_trait(mut self, trait_id: impl Into<String>) -> Self {
        self.ancestry
            .get_or_insert_with(AncestryChoice::default)
            .traits
            .push(trait_id.into());
        self
    }

    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_skills(mut self, skills: SkillAllocation) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_defenses(mut self, defenses: DefenseAllocation) -> Self {
        self.defenses = defenses;
        self
    }

    pub fn with_feat(mut self, feat: FeatSelection) -> Self {
        self.feats.push(feat);
        self
    }

    pub fn with_training_points_spent(mut self, spent: i32) -> Self {
        self.training_points_spent = spent;
        self
    }

    pub fn with_currency_spent(mut self, spent: i32) -> Self {
        self.currency_spent = spent;
        self
    }

    pub fn with_health_energy(mut self, health: i32, energy: i32) -> Self {
        self.health_energy = HealthEnergySplit::new(health, energy);
        self
    }

    pub fn feat_count(&self, tag: FeatTag) -> usize {
        self.feats.iter().filter(|f| f.tag == tag).count()
    }

    pub fn species_id(&self) -> Option<&str> {
        self.species_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// The ancestry, when one with a non-blank id is chosen.
    pub fn ancestry(&self) -> Option<&AncestryChoice> {
        self.ancestry.as_ref().filter(|a| !a.id.trim().is_empty())
    }

    pub fn ancestry_traits(&self) -> &[String] {
        self.ancestry
            .as_ref()
            .map(|a| a.traits.as_slice())
            .unwrap_or_default()
    }
}
