//! Budget Calculator - total points and pools available at a level.

use serde::{Deserialize, Serialize};

use crate::aggregates::CharacterDraft;
use crate::value_objects::{EntityKind, EntityLevel};

/// Skill points a character gains per level.
pub const CHARACTER_SKILL_POINTS_PER_LEVEL: i32 = 3;

/// Skill points a creature starts with at level 1.
pub const CREATURE_SKILL_POINTS: i32 = 5;

/// Health-energy pool at level 1 and its per-level growth.
pub const BASE_HEALTH_ENERGY_POOL: i32 = 18;
pub const HEALTH_ENERGY_PER_LEVEL: i32 = 2;

/// Training points at level 1, before the highest ability is added.
pub const BASE_TRAINING_POINTS: i32 = 22;
pub const TRAINING_POINTS_PER_LEVEL: i32 = 2;

/// Ability point progression, supplied by the caller.
///
/// Implementations must be monotonically non-decreasing in level. Any
/// `Fn(EntityLevel) -> i32` closure can be used directly.
pub trait AbilityPointProgression: Send + Sync {
    fn ability_points(&self, level: EntityLevel) -> i32;
}

impl<F> AbilityPointProgression for F
where
    F: Fn(EntityLevel) -> i32 + Send + Sync,
{
    fn ability_points(&self, level: EntityLevel) -> i32 {
        self(level)
    }
}

/// Seven points at level 1, one more every third level after that.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAbilityProgression;

impl AbilityPointProgression for StandardAbilityProgression {
    fn ability_points(&self, level: EntityLevel) -> i32 {
        7 + level.levels_above_first() / 3
    }
}

pub fn total_skill_points(level: EntityLevel, kind: EntityKind) -> i32 {
    match kind {
        EntityKind::Character => CHARACTER_SKILL_POINTS_PER_LEVEL * level.as_i32(),
        EntityKind::Creature => {
            CREATURE_SKILL_POINTS + CHARACTER_SKILL_POINTS_PER_LEVEL * level.levels_above_first()
        }
    }
}

pub fn total_ability_points(level: EntityLevel, progression: &dyn AbilityPointProgression) -> i32 {
    progression.ability_points(level)
}

/// Training points depend on the single highest ability score, so callers
/// must recompute whenever abilities change. Never negative.
pub fn total_training_points(level: EntityLevel, highest_ability_score: i32) -> i32 {
    let per_level = TRAINING_POINTS_PER_LEVEL.saturating_add(highest_ability_score);
    BASE_TRAINING_POINTS
        .saturating_add(highest_ability_score)
        .saturating_add(per_level.saturating_mul(level.levels_above_first()))
        .max(0)
}

/// Combined pool the player splits between health and energy.
pub fn total_health_energy_pool(level: EntityLevel) -> i32 {
    BASE_HEALTH_ENERGY_POOL + HEALTH_ENERGY_PER_LEVEL * level.levels_above_first()
}

/// Every budget for a draft, computed in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub ability_points: i32,
    pub skill_points: i32,
    pub training_points: i32,
    pub health_energy_pool: i32,
}

impl BudgetSummary {
    pub fn for_draft(draft: &CharacterDraft, progression: &dyn AbilityPointProgression) -> Self {
        Self {
            ability_points: total_ability_points(draft.level, progression),
            skill_points: total_skill_points(draft.level, draft.kind),
            training_points: total_training_points(draft.level, draft.abilities.highest()),
            health_energy_pool: total_health_energy_pool(draft.level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Ability, AbilityScores};

    fn level(n: i64) -> EntityLevel {
        EntityLevel::new(n)
    }

    #[test]
    fn character_skill_points_are_three_per_level() {
        for n in 1..=40 {
            assert_eq!(total_skill_points(level(n), EntityKind::Character), 3 * n as i32);
        }
    }

    #[test]
    fn creature_skill_points_start_at_five() {
        for n in 1..=40 {
            assert_eq!(
                total_skill_points(level(n), EntityKind::Creature),
                5 + 3 * (n as i32 - 1)
            );
        }
    }

    #[test]
    fn skill_points_strictly_increase() {
        for kind in [EntityKind::Character, EntityKind::Creature] {
            for n in 1..60 {
                assert!(
                    total_skill_points(level(n + 1), kind) > total_skill_points(level(n), kind)
                );
            }
        }
    }

    #[test]
    fn fractional_and_invalid_levels_normalize_first() {
        assert_eq!(
            total_skill_points(EntityLevel::from_f64(2.9), EntityKind::Character),
            6
        );
        assert_eq!(total_skill_points(level(0), EntityKind::Creature), 5);
        assert_eq!(
            total_skill_points(EntityLevel::from_f64(f64::NAN), EntityKind::Character),
            3
        );
    }

    #[test]
    fn standard_ability_progression_is_monotonic() {
        let progression = StandardAbilityProgression;
        assert_eq!(total_ability_points(level(1), &progression), 7);
        assert_eq!(total_ability_points(level(3), &progression), 7);
        assert_eq!(total_ability_points(level(4), &progression), 8);
        assert_eq!(total_ability_points(level(7), &progression), 9);
        for n in 1..100 {
            assert!(
                total_ability_points(level(n + 1), &progression)
                    >= total_ability_points(level(n), &progression)
            );
        }
    }

    #[test]
    fn closures_can_be_injected_as_progression() {
        let flat = |lvl: EntityLevel| 4 + lvl.as_i32();
        assert_eq!(total_ability_points(level(3), &flat), 7);
    }

    #[test]
    fn training_points_follow_highest_ability() {
        assert_eq!(total_training_points(level(1), 3), 25);
        assert_eq!(total_training_points(level(2), 3), 30);
        assert_eq!(total_training_points(level(5), 0), 22 + 2 * 4);
        assert_eq!(total_training_points(level(1), -30), 0);
    }

    #[test]
    fn health_energy_pool_grows_two_per_level() {
        assert_eq!(total_health_energy_pool(level(1)), 18);
        assert_eq!(total_health_energy_pool(level(2)), 20);
        assert_eq!(total_health_energy_pool(level(10)), 36);
    }

    #[test]
    fn summary_recomputes_training_points_from_abilities() {
        let draft = CharacterDraft::new("Ilsa").with_level(3);
        let before = BudgetSummary::for_draft(&draft, &StandardAbilityProgression);

        let draft = draft.with_abilities(AbilityScores::default().with(Ability::Acuity, 2));
        let after = BudgetSummary::for_draft(&draft, &StandardAbilityProgression);

        assert_eq!(before.training_points, 22 + 2 * 2);
        assert_eq!(after.training_points, 24 + 4 * 2);
        assert_eq!(after.skill_points, 9);
        assert_eq!(after.health_energy_pool, 22);
    }
}
