//! Validation Engine - the issues a draft shows at each creator step.
//!
//! Issues are recomputed from scratch on every call; nothing is cached and
//! nothing is blocked here. Callers decide whether error-severity issues
//! gate a save or publish.
//!
//! Each step's checks live in their own function. A new step only needs a new
//! arm in [`issues_for_step`].

use super::budget::{
    total_health_energy_pool, total_training_points, AbilityPointProgression,
    StandardAbilityProgression,
};
use super::spend::{draft_skill_budget, remaining_ability_points};
use crate::aggregates::{CharacterDraft, FeatTag};
use crate::entities::CodexSnapshot;
use crate::value_objects::{CreatorStep, Defense, ValidationIssue, MAX_PURCHASED_DEFENSE_BONUS};

/// Currency every new character starts with.
pub const STARTING_CURRENCY: i32 = 200;

static STANDARD_PROGRESSION: StandardAbilityProgression = StandardAbilityProgression;

/// Everything the rules need besides the draft itself.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub codex: &'a CodexSnapshot,
    pub ability_progression: &'a dyn AbilityPointProgression,
    pub starting_currency: i32,
}

impl<'a> ValidationContext<'a> {
    pub fn new(codex: &'a CodexSnapshot) -> Self {
        Self {
            codex,
            ability_progression: &STANDARD_PROGRESSION,
            starting_currency: STARTING_CURRENCY,
        }
    }

    pub fn with_ability_progression(
        mut self,
        progression: &'a dyn AbilityPointProgression,
    ) -> Self {
        self.ability_progression = progression;
        self
    }

    pub fn with_starting_currency(mut self, starting_currency: i32) -> Self {
        self.starting_currency = starting_currency;
        self
    }
}

/// Issues for a single step. `Powers` and `Finalize` contribute none here;
/// the finalize checks only run from [`all_issues`].
pub fn issues_for_step(
    step: CreatorStep,
    draft: &CharacterDraft,
    ctx: &ValidationContext<'_>,
) -> Vec<ValidationIssue> {
    match step {
        CreatorStep::Archetype => archetype_issues(draft),
        CreatorStep::Species => species_issues(draft),
        CreatorStep::Ancestry => ancestry_issues(draft, ctx),
        CreatorStep::Abilities => ability_issues(draft, ctx),
        CreatorStep::Skills => skill_issues(draft, ctx),
        CreatorStep::Feats => feat_issues(draft),
        CreatorStep::Equipment => equipment_issues(draft, ctx),
        CreatorStep::Powers | CreatorStep::Finalize => Vec::new(),
    }
}

/// Every step's issues in wizard order, then the finalize-only checks.
pub fn all_issues(draft: &CharacterDraft, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = CreatorStep::ALL
        .iter()
        .flat_map(|step| issues_for_step(*step, draft, ctx))
        .collect();
    issues.extend(finalize_issues(draft));
    issues
}

pub fn has_blocking_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(ValidationIssue::is_error)
}

fn archetype_issues(draft: &CharacterDraft) -> Vec<ValidationIssue> {
    match &draft.archetype {
        Some(archetype) if !archetype.id.trim().is_empty() => Vec::new(),
        _ => vec![ValidationIssue::error(
            CreatorStep::Archetype,
            "🎭",
            "Choose an archetype",
        )],
    }
}

fn species_issues(draft: &CharacterDraft) -> Vec<ValidationIssue> {
    if draft.species_id().is_some() {
        Vec::new()
    } else {
        vec![ValidationIssue::error(
            CreatorStep::Species,
            "🧬",
            "Choose a species",
        )]
    }
}

fn ancestry_issues(draft: &CharacterDraft, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
    if draft.ancestry().is_none() {
        return vec![ValidationIssue::error(
            CreatorStep::Ancestry,
            "🌳",
            "Choose an ancestry",
        )];
    }

    let species = draft.species_id().and_then(|id| ctx.codex.species(id));
    match species {
        Some(species)
            if !species.ancestry_traits.is_empty() && draft.ancestry_traits().is_empty() =>
        {
            vec![ValidationIssue::error(
                CreatorStep::Ancestry,
                "🌳",
                format!("Select at least one {} ancestry trait", species.name),
            )]
        }
        _ => Vec::new(),
    }
}

fn ability_issues(draft: &CharacterDraft, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
    let remaining = remaining_ability_points(draft, ctx.ability_progression);
    remaining_points_issue(CreatorStep::Abilities, "💪", "ability", remaining)
        .into_iter()
        .collect()
}

fn skill_issues(draft: &CharacterDraft, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
    let budget = draft_skill_budget(draft, ctx.codex);
    let mut issues: Vec<ValidationIssue> =
        remaining_points_issue(CreatorStep::Skills, "📚", "skill", budget.remaining)
            .into_iter()
            .collect();

    let level = draft.level.as_i32();
    for defense in Defense::ALL {
        let purchased = draft.defenses.get(defense);
        if purchased > MAX_PURCHASED_DEFENSE_BONUS {
            issues.push(ValidationIssue::error(
                CreatorStep::Skills,
                "🛡️",
                format!(
                    "{} can only be raised by {} with skill points (currently +{})",
                    defense, MAX_PURCHASED_DEFENSE_BONUS, purchased
                ),
            ));
        }
        let total_bonus =
            purchased.saturating_add(draft.abilities.get(defense.governing_ability()));
        if purchased > 0 && total_bonus > level {
            issues.push(ValidationIssue::error(
                CreatorStep::Skills,
                "🛡️",
                format!(
                    "{} bonus +{} exceeds character level {}",
                    defense, total_bonus, level
                ),
            ));
        }
    }

    // A species skill reads as value 1 even without an allocation entry.
    let species_skills = ctx.codex.species_skill_set(draft.species_id());
    for (skill_id, value) in draft.skills.iter() {
        if value < 2 {
            continue;
        }
        let Some(base_id) = ctx.codex.skill_meta(skill_id).base_skill_id else {
            continue;
        };
        if !draft.skills.is_proficient(base_id) && !species_skills.contains(base_id) {
            issues.push(ValidationIssue::error(
                CreatorStep::Skills,
                "🔗",
                format!(
                    "{} needs proficiency in {} before it can be raised",
                    ctx.codex.skill_name(skill_id),
                    ctx.codex.skill_name(base_id)
                ),
            ));
        }
    }

    issues
}

fn feat_issues(draft: &CharacterDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(archetype) = &draft.archetype {
        let quota = archetype.archetype_type.archetype_feat_quota();
        let chosen = draft.feat_count(FeatTag::Archetype);
        if chosen < quota {
            issues.push(ValidationIssue::warning(
                CreatorStep::Feats,
                "⭐",
                format!(
                    "{} archetypes choose {} archetype feat(s); {} selected",
                    archetype.archetype_type.display_name(),
                    quota,
                    chosen
                ),
            ));
        }
    }

    if draft.feat_count(FeatTag::Character) == 0 {
        issues.push(ValidationIssue::warning(
            CreatorStep::Feats,
            "⭐",
            "Choose at least one character feat",
        ));
    }

    issues
}

fn equipment_issues(draft: &CharacterDraft, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let training_points = total_training_points(draft.level, draft.abilities.highest());
    if draft.training_points_spent > training_points {
        issues.push(ValidationIssue::error(
            CreatorStep::Equipment,
            "🎒",
            format!(
                "Training points overspent by {} ({} of {})",
                draft.training_points_spent - training_points,
                draft.training_points_spent,
                training_points
            ),
        ));
    }

    if draft.currency_spent > ctx.starting_currency {
        issues.push(ValidationIssue::error(
            CreatorStep::Equipment,
            "💰",
            format!(
                "Currency overspent by {} ({} of {})",
                draft.currency_spent.saturating_sub(ctx.starting_currency),
                draft.currency_spent,
                ctx.starting_currency
            ),
        ));
    }

    issues
}

fn finalize_issues(draft: &CharacterDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if draft.name.trim().is_empty() {
        issues.push(ValidationIssue::error(
            CreatorStep::Finalize,
            "📝",
            "Give your character a name",
        ));
    }

    let pool = total_health_energy_pool(draft.level);
    let allocated = draft.health_energy.allocated();
    if allocated > pool {
        issues.push(ValidationIssue::error(
            CreatorStep::Finalize,
            "❤️",
            format!(
                "Health and energy use {} points but the pool is {}",
                allocated, pool
            ),
        ));
    }

    issues
}

/// Unspent points warn, overspent points are an error, exact spend is clean.
fn remaining_points_issue(
    step: CreatorStep,
    emoji: &str,
    label: &str,
    remaining: i32,
) -> Option<ValidationIssue> {
    match remaining {
        r if r > 0 => Some(ValidationIssue::warning(
            step,
            emoji,
            format!("{} {} point(s) left to spend", r, label),
        )),
        r if r < 0 => Some(ValidationIssue::error(
            step,
            emoji,
            format!("{} points overspent by {}", capitalize(label), r.unsigned_abs()),
        )),
        _ => None,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
