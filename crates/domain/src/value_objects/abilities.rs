//! The six character abilities

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six abilities a character distributes ability points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Vitality,
    Agility,
    Acuity,
    Intelligence,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Vitality,
        Ability::Agility,
        Ability::Acuity,
        Ability::Intelligence,
        Ability::Charisma,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Vitality => "Vitality",
            Ability::Agility => "Agility",
            Ability::Acuity => "Acuity",
            Ability::Intelligence => "Intelligence",
            Ability::Charisma => "Charisma",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ability scores as allocated on a draft. Scores may be negative.
///
/// Public fields: any combination of values is a representable draft state,
/// legality is judged by the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityScores {
    pub strength: i32,
    pub vitality: i32,
    pub agility: i32,
    pub acuity: i32,
    pub intelligence: i32,
    pub charisma: i32,
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Vitality => self.vitality,
            Ability::Agility => self.agility,
            Ability::Acuity => self.acuity,
            Ability::Intelligence => self.intelligence,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, value: i32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Vitality => &mut self.vitality,
            Ability::Agility => &mut self.agility,
            Ability::Acuity => &mut self.acuity,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = value;
    }

    pub fn with(mut self, ability: Ability, value: i32) -> Self {
        self.set(ability, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.iter().map(move |a| (*a, self.get(*a)))
    }

    /// The single highest score. Training points key off this value.
    pub fn highest(&self) -> i32 {
        self.iter().map(|(_, v)| v).max().unwrap_or(0)
    }
}
