//! Defenses and the skill-point bonuses purchased for them

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Ability;

/// Highest bonus that can be bought for a single defense with skill points.
pub const MAX_PURCHASED_DEFENSE_BONUS: i32 = 3;

/// The six defenses. Each one draws its base bonus from one ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Defense {
    Might,
    Fortitude,
    Reflex,
    Discernment,
    MentalFortitude,
    Resolve,
}

impl Defense {
    pub const ALL: [Defense; 6] = [
        Defense::Might,
        Defense::Fortitude,
        Defense::Reflex,
        Defense::Discernment,
        Defense::MentalFortitude,
        Defense::Resolve,
    ];

    /// The ability whose score is added to this defense.
    pub fn governing_ability(&self) -> Ability {
        match self {
            Defense::Might => Ability::Strength,
            Defense::Fortitude => Ability::Vitality,
            Defense::Reflex => Ability::Agility,
            Defense::Discernment => Ability::Acuity,
            Defense::MentalFortitude => Ability::Intelligence,
            Defense::Resolve => Ability::Charisma,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Defense::Might => "Might",
            Defense::Fortitude => "Fortitude",
            Defense::Reflex => "Reflex",
            Defense::Discernment => "Discernment",
            Defense::MentalFortitude => "Mental Fortitude",
            Defense::Resolve => "Resolve",
        }
    }
}

impl fmt::Display for Defense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Defense bonuses purchased with skill points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefenseAllocation {
    pub might: i32,
    pub fortitude: i32,
    pub reflex: i32,
    pub discernment: i32,
    pub mental_fortitude: i32,
    pub resolve: i32,
}

impl DefenseAllocation {
    /// Purchased bonus as stored; may be out of range on a draft.
    pub fn raw(&self, defense: Defense) -> i32 {
        match defense {
            Defense::Might => self.might,
            Defense::Fortitude => self.fortitude,
            Defense::Reflex => self.reflex,
            Defense::Discernment => self.discernment,
            Defense::MentalFortitude => self.mental_fortitude,
            Defense::Resolve => self.resolve,
        }
    }

    /// Purchased bonus with negative values read as zero.
    pub fn get(&self, defense: Defense) -> i32 {
        self.raw(defense).max(0)
    }

    pub fn set(&mut self, defense: Defense, value: i32) {
        let slot = match defense {
            Defense::Might => &mut self.might,
            Defense::Fortitude => &mut self.fortitude,
            Defense::Reflex => &mut self.reflex,
            Defense::Discernment => &mut self.discernment,
            Defense::MentalFortitude => &mut self.mental_fortitude,
            Defense::Resolve => &mut self.resolve,
        };
        *slot = value;
    }

    pub fn with(mut self, defense: Defense, value: i32) -> Self {
        self.set(defense, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Defense, i32)> + '_ {
        Defense::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    /// Sum of purchased bonuses across all six defenses.
    pub fn total_purchased(&self) -> i32 {
        self.iter().map(|(_, v)| v).fold(0, i32::saturating_add)
    }
}
