//! Rules - pure functions over drafts and allocations
//!
//! Every function here is deterministic and side-effect free. Budgets and
//! spend are recomputed on demand; nothing is cached on the draft.

pub mod budget;
pub mod cost;
pub mod encounter;
pub mod spend;
pub mod validation;

pub use budget::{
    total_ability_points, total_health_energy_pool, total_skill_points, total_training_points,
    AbilityPointProgression, BudgetSummary, StandardAbilityProgression,
};
pub use cost::{
    cost_to_grant_proficiency, cost_to_increase_defense, cost_to_raise_skill_value,
    refund_for_lowering_skill_value,
};
pub use encounter::{resolve_roll, RollOutcome, SkillRoll};
pub use spend::{
    ability_point_cost, ability_points_spent, calculate_skill_spend, draft_skill_budget,
    remaining_ability_points, skill_budget, skill_cost, SkillBudget, SkillLineItem, SkillSpend,
    FREE_SKILL_POINT_ID,
};
pub use validation::{
    all_issues, has_blocking_errors, issues_for_step, ValidationContext, STARTING_CURRENCY,
};
