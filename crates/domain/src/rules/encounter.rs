//! Encounter Resolution - one roll against a difficulty score.
//!
//! A roll that meets the DS scores one success plus one per full 5 points of
//! margin. A roll below the DS scores failures the same way. Total over all
//! integers.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Margin width that earns one additional success or failure.
pub const MARGIN_BAND: i64 = 5;

/// Die rolled by encounter participants.
pub const ENCOUNTER_DIE: i32 = 20;

/// A roll's contribution to the encounter totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    pub successes: u32,
    pub failures: u32,
}

impl RollOutcome {
    pub fn new(successes: u32, failures: u32) -> Self {
        Self {
            successes,
            failures,
        }
    }

    pub fn is_success(&self) -> bool {
        self.successes > 0
    }
}

impl Add for RollOutcome {
    type Output = RollOutcome;

    fn add(self, rhs: Self) -> Self::Output {
        RollOutcome {
            successes: self.successes.saturating_add(rhs.successes),
            failures: self.failures.saturating_add(rhs.failures),
        }
    }
}

impl AddAssign for RollOutcome {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

fn banded_count(margin: i64) -> u32 {
    let count = 1 + margin / MARGIN_BAND;
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Convert one roll and the encounter's DS into successes or failures.
pub fn resolve_roll(roll: i32, difficulty_score: i32) -> RollOutcome {
    // Widened so that extreme inputs cannot overflow the margin.
    let margin = i64::from(roll) - i64::from(difficulty_score);
    if margin >= 0 {
        RollOutcome::new(banded_count(margin), 0)
    } else {
        RollOutcome::new(0, banded_count(-margin))
    }
}

/// A participant's d20 roll plus their bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRoll {
    pub die: i32,
    pub bonus: i32,
    pub total: i32,
}

impl SkillRoll {
    /// Roll with an injected random source, `rng(min, max)` inclusive.
    pub fn roll_with(bonus: i32, mut rng: impl FnMut(i32, i32) -> i32) -> Self {
        let die = rng(1, ENCOUNTER_DIE).clamp(1, ENCOUNTER_DIE);
        Self::from_die(die, bonus)
    }

    /// Build from a physical die result entered by the player.
    pub fn from_die(die: i32, bonus: i32) -> Self {
        Self {
            die,
            bonus,
            total: die.saturating_add(bonus),
        }
    }

    pub fn resolve(&self, difficulty_score: i32) -> RollOutcome {
        resolve_roll(self.total, difficulty_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_around_the_ds() {
        for ds in [-10, 0, 7, 15, 30] {
            assert_eq!(resolve_roll(ds, ds), RollOutcome::new(1, 0));
            assert_eq!(resolve_roll(ds + 4, ds), RollOutcome::new(1, 0));
            assert_eq!(resolve_roll(ds + 5, ds), RollOutcome::new(2, 0));
            assert_eq!(resolve_roll(ds - 1, ds), RollOutcome::new(0, 1));
            assert_eq!(resolve_roll(ds - 5, ds), RollOutcome::new(0, 2));
            assert_eq!(resolve_roll(ds - 6, ds), RollOutcome::new(0, 2));
            assert_eq!(resolve_roll(ds - 10, ds), RollOutcome::new(0, 3));
        }
    }

    #[test]
    fn large_margins() {
        assert_eq!(resolve_roll(37, 12), RollOutcome::new(6, 0));
        assert_eq!(resolve_roll(-8, 12), RollOutcome::new(0, 5));
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let outcome = resolve_roll(i32::MAX, i32::MIN);
        assert!(outcome.successes > 0);
        assert_eq!(outcome.failures, 0);
        let outcome = resolve_roll(i32::MIN, i32::MAX);
        assert_eq!(outcome.successes, 0);
        assert!(outcome.failures > 0);
    }

    #[test]
    fn outcomes_sum() {
        let mut total = RollOutcome::default();
        total += resolve_roll(15, 10);
        total += resolve_roll(3, 10);
        assert_eq!(total, RollOutcome::new(2, 2));
    }

    #[test]
    fn skill_roll_uses_injected_rng() {
        let roll = SkillRoll::roll_with(3, |min, max| {
            assert_eq!((min, max), (1, 20));
            14
        });
        assert_eq!(roll.total, 17);
        assert_eq!(roll.resolve(12), RollOutcome::new(2, 0));
    }

    #[test]
    fn out_of_range_rng_is_clamped_to_the_die() {
        assert_eq!(SkillRoll::roll_with(0, |_, _| 40).die, 20);
        assert_eq!(SkillRoll::roll_with(0, |_, _| -3).die, 1);
    }
}
