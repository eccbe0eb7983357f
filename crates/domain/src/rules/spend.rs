//! Spend Aggregator - points spent and remaining for a full allocation.
//!
//! One code path prices skills for every caller (wizard steps, the finalize
//! review, live sheet editing). All prices come from [`super::cost`]; this
//! module only decides which steps are paid for:
//!
//! - species skill: the first point is free, steps from value 1 upward are paid
//! - sub-skill: proficiency (which includes value 1), then steps from value 1
//! - base skill: proficiency at value 0, then every step from value 0
//!
//! Nothing here fails. Negative allocations contribute nothing and overspend
//! shows up as a negative remainder.

use serde::{Deserialize, Serialize};

use super::budget::{total_ability_points, total_skill_points, AbilityPointProgression};
use super::cost::{cost_to_grant_proficiency, cost_to_increase_defense, cost_to_raise_skill_value};
use crate::aggregates::CharacterDraft;
use crate::entities::CodexSnapshot;
use crate::value_objects::{
    AbilityScores, DefenseAllocation, EntityKind, EntityLevel, SkillAllocation, SpeciesSkillSet,
    SKILL_VALUE_SOFT_CAP,
};

/// Species skill id that grants one extra skill point instead of a skill.
pub const FREE_SKILL_POINT_ID: &str = "any";

/// Ability values above this cost double.
pub const ABILITY_DOUBLE_COST_THRESHOLD: i32 = 4;

/// Sum of `cost_to_raise_skill_value` for every step from `from` up to `to`.
fn raise_cost(from: i32, to: i32, is_sub_skill: bool) -> i32 {
    if to <= from {
        return 0;
    }
    let below_cap = (to.min(SKILL_VALUE_SOFT_CAP) - from).max(0);
    let past_cap = (to - from.max(SKILL_VALUE_SOFT_CAP)).max(0);
    let below_price = cost_to_raise_skill_value(SKILL_VALUE_SOFT_CAP - 1, is_sub_skill);
    let past_price = cost_to_raise_skill_value(SKILL_VALUE_SOFT_CAP, is_sub_skill);
    below_cap
        .saturating_mul(below_price)
        .saturating_add(past_cap.saturating_mul(past_price))
}

/// Skill points paid for one skill at `value`.
pub fn skill_cost(value: i32, is_sub_skill: bool, is_species_skill: bool) -> i32 {
    if value <= 0 {
        return 0;
    }
    if is_species_skill {
        raise_cost(1, value, is_sub_skill)
    } else if is_sub_skill {
        cost_to_grant_proficiency().saturating_add(raise_cost(1, value, true))
    } else {
        cost_to_grant_proficiency().saturating_add(raise_cost(0, value, false))
    }
}

/// Skill points paid for purchased defense bonuses.
pub fn defense_points_spent(defenses: &DefenseAllocation) -> i32 {
    defenses
        .iter()
        .map(|(_, bonus)| bonus.saturating_mul(cost_to_increase_defense()))
        .fold(0, i32::saturating_add)
}

/// Extra skill points granted by the species' free-point sentinel.
pub fn bonus_skill_points(species_skills: &SpeciesSkillSet) -> i32 {
    i32::from(species_skills.contains(FREE_SKILL_POINT_ID))
}

/// Priced entry for one allocated skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLineItem {
    pub skill_id: String,
    pub value: i32,
    pub is_sub_skill: bool,
    pub is_species_skill: bool,
    pub cost: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSpend {
    pub line_items: Vec<SkillLineItem>,
    pub skill_points: i32,
    pub defense_points: i32,
}

impl SkillSpend {
    pub fn total(&self) -> i32 {
        self.skill_points.saturating_add(self.defense_points)
    }
}

/// Price a full skill and defense allocation.
pub fn calculate_skill_spend(
    skills: &SkillAllocation,
    defenses: &DefenseAllocation,
    species_skills: &SpeciesSkillSet,
    codex: &CodexSnapshot,
) -> SkillSpend {
    let line_items: Vec<SkillLineItem> = skills
        .iter()
        .filter(|(_, value)| *value > 0)
        .map(|(skill_id, value)| {
            let is_sub_skill = codex.skill_meta(skill_id).is_sub_skill();
            let is_species_skill = species_skills.contains(skill_id);
            SkillLineItem {
                skill_id: skill_id.to_string(),
                value,
                is_sub_skill,
                is_species_skill,
                cost: skill_cost(value, is_sub_skill, is_species_skill),
            }
        })
        .collect();

    let skill_points = line_items.iter().map(|i| i.cost).fold(0, i32::saturating_add);

    SkillSpend {
        line_items,
        skill_points,
        defense_points: defense_points_spent(defenses),
    }
}

/// Skill point budget against spend. `remaining` may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBudget {
    pub total: i32,
    pub bonus: i32,
    pub spend: SkillSpend,
    pub remaining: i32,
}

pub fn skill_budget(
    level: EntityLevel,
    kind: EntityKind,
    skills: &SkillAllocation,
    defenses: &DefenseAllocation,
    species_skills: &SpeciesSkillSet,
    codex: &CodexSnapshot,
) -> SkillBudget {
    let total = total_skill_points(level, kind);
    let bonus = bonus_skill_points(species_skills);
    let spend = calculate_skill_spend(skills, defenses, species_skills, codex);
    let remaining = total.saturating_add(bonus).saturating_sub(spend.total());
    SkillBudget {
        total,
        bonus,
        spend,
        remaining,
    }
}

/// Skill budget for a draft, with species skills looked up in the codex.
pub fn draft_skill_budget(draft: &CharacterDraft, codex: &CodexSnapshot) -> SkillBudget {
    let species_skills = codex.species_skill_set(draft.species_id());
    skill_budget(
        draft.level,
        draft.kind,
        &draft.skills,
        &draft.defenses,
        &species_skills,
        codex,
    )
}

/// Ability points paid for one ability value. Negative values refund.
pub fn ability_point_cost(value: i32) -> i32 {
    if value <= ABILITY_DOUBLE_COST_THRESHOLD {
        value
    } else {
        ABILITY_DOUBLE_COST_THRESHOLD
            .saturating_add((value - ABILITY_DOUBLE_COST_THRESHOLD).saturating_mul(2))
    }
}

pub fn ability_points_spent(abilities: &AbilityScores) -> i32 {
    abilities
        .iter()
        .map(|(_, value)| ability_point_cost(value))
        .fold(0, i32::saturating_add)
}

/// Ability points left for a draft. May be negative.
pub fn remaining_ability_points(
    draft: &CharacterDraft,
    progression: &dyn AbilityPointProgression,
) -> i32 {
    total_ability_points(draft.level, progression)
        .saturating_sub(ability_points_spent(&draft.abilities))
}
