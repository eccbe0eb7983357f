//! Cost Model - the price of a single allocation step, in skill points.
//!
//! This is a species-agnostic price table. The free first point a species
//! grants is applied by the spend aggregator, never here.

use crate::value_objects::SKILL_VALUE_SOFT_CAP;

/// Price per step once a base skill is at or above the soft cap.
pub const BASE_SKILL_COST_PAST_CAP: i32 = 3;

/// Price per step once a sub-skill is at or above the soft cap.
pub const SUB_SKILL_COST_PAST_CAP: i32 = 2;

/// Price of one point of purchased defense bonus.
pub const DEFENSE_POINT_COST: i32 = 2;

/// Cost to raise a skill from `current_value` to `current_value + 1`.
///
/// One point below the soft cap. At or past it, base skills cost 3 and
/// sub-skills cost 2.
pub fn cost_to_raise_skill_value(current_value: i32, is_sub_skill: bool) -> i32 {
    if current_value < SKILL_VALUE_SOFT_CAP {
        1
    } else if is_sub_skill {
        SUB_SKILL_COST_PAST_CAP
    } else {
        BASE_SKILL_COST_PAST_CAP
    }
}

/// Flat cost to become proficient. For a sub-skill this also grants value 1.
pub fn cost_to_grant_proficiency() -> i32 {
    1
}

/// Refund for lowering a skill by one step, including the step that removes
/// proficiency. Flat for base skills and sub-skills alike.
pub fn refund_for_lowering_skill_value(_current_value: i32, _is_sub_skill: bool) -> i32 {
    1
}

/// Flat cost of one defense point. The level cap is enforced by validation.
pub fn cost_to_increase_defense() -> i32 {
    DEFENSE_POINT_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raising_below_cap_costs_one() {
        for value in -2..SKILL_VALUE_SOFT_CAP {
            assert_eq!(cost_to_raise_skill_value(value, false), 1);
            assert_eq!(cost_to_raise_skill_value(value, true), 1);
        }
    }

    #[test]
    fn boundary_at_exactly_the_cap() {
        assert_eq!(cost_to_raise_skill_value(2, false), 1);
        assert_eq!(cost_to_raise_skill_value(3, false), 3);
        assert_eq!(cost_to_raise_skill_value(2, true), 1);
        assert_eq!(cost_to_raise_skill_value(3, true), 2);
    }

    #[test]
    fn past_cap_prices_stay_flat() {
        assert_eq!(cost_to_raise_skill_value(7, false), 3);
        assert_eq!(cost_to_raise_skill_value(7, true), 2);
    }

    #[test]
    fn raise_then_lower_round_trips_below_cap() {
        for value in 0..SKILL_VALUE_SOFT_CAP {
            for is_sub_skill in [false, true] {
                let mut spent = 10;
                spent += cost_to_raise_skill_value(value, is_sub_skill);
                spent -= refund_for_lowering_skill_value(value + 1, is_sub_skill);
                assert_eq!(spent, 10);
            }
        }
    }

    #[test]
    fn raise_then_lower_does_not_round_trip_past_cap() {
        // Raising past the cap costs more than lowering refunds.
        let mut spent = 10;
        spent += cost_to_raise_skill_value(3, false);
        spent -= refund_for_lowering_skill_value(4, false);
        assert_eq!(spent, 12);

        let mut spent = 10;
        spent += cost_to_raise_skill_value(3, true);
        spent -= refund_for_lowering_skill_value(4, true);
        assert_eq!(spent, 11);
    }

    #[test]
    fn flat_prices() {
        assert_eq!(cost_to_grant_proficiency(), 1);
        assert_eq!(refund_for_lowering_skill_value(1, false), 1);
        assert_eq!(refund_for_lowering_skill_value(5, true), 1);
        assert_eq!(cost_to_increase_defense(), 2);
    }
}
