//! Character review use case.
//!
//! Loads the codex and runs the rules over a draft: every budget, the skill
//! spend breakdown and the validation issues for one step or the whole draft.
//! Issues never fail the review; callers check `has_blocking_errors`.

use std::sync::Arc;

use realms_domain::rules::{
    self, draft_skill_budget, remaining_ability_points, AbilityPointProgression, BudgetSummary,
    SkillBudget, StandardAbilityProgression, ValidationContext,
};
use realms_domain::{CharacterDraft, CreatorStep, ValidationIssue};
use serde::Serialize;

use crate::infrastructure::ports::{CodexSource, CodexSourceError};

/// Everything the creator shows about a draft at one point in time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftReview {
    pub name: String,
    pub step: Option<CreatorStep>,
    pub budgets: BudgetSummary,
    pub remaining_ability_points: i32,
    pub skills: SkillBudget,
    pub issues: Vec<ValidationIssue>,
    pub has_blocking_errors: bool,
}

impl DraftReview {
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| !i.is_error())
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.is_error())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("Codex unavailable: {0}")]
    Codex(#[from] CodexSourceError),
}

/// Review a draft against the current codex.
pub struct ReviewDraft {
    codex: Arc<dyn CodexSource>,
    progression: Arc<dyn AbilityPointProgression>,
    starting_currency: i32,
}

impl ReviewDraft {
    pub fn new(codex: Arc<dyn CodexSource>) -> Self {
        Self {
            codex,
            progression: Arc::new(StandardAbilityProgression),
            starting_currency: rules::STARTING_CURRENCY,
        }
    }

    pub fn with_progression(mut self, progression: Arc<dyn AbilityPointProgression>) -> Self {
        self.progression = progression;
        self
    }

    pub fn with_starting_currency(mut self, starting_currency: i32) -> Self {
        self.starting_currency = starting_currency;
        self
    }

    /// Review one step, or the whole draft including the finalize checks
    /// when `step` is `None`.
    pub async fn execute(
        &self,
        draft: &CharacterDraft,
        step: Option<CreatorStep>,
    ) -> Result<DraftReview, ReviewError> {
        let codex = self.codex.load().await?;
        let ctx = ValidationContext::new(&codex)
            .with_ability_progression(self.progression.as_ref())
            .with_starting_currency(self.starting_currency);

        let issues = match step {
            Some(step) => rules::issues_for_step(step, draft, &ctx),
            None => rules::all_issues(draft, &ctx),
        };
        let has_blocking_errors = rules::has_blocking_errors(&issues);

        let review = DraftReview {
            name: draft.name.clone(),
            step,
            budgets: BudgetSummary::for_draft(draft, self.progression.as_ref()),
            remaining_ability_points: remaining_ability_points(draft, self.progression.as_ref()),
            skills: draft_skill_budget(draft, &codex),
            issues,
            has_blocking_errors,
        };

        tracing::debug!(
            draft = %review.name,
            step = ?step,
            issues = review.issues.len(),
            blocking = review.has_blocking_errors,
            skill_points_remaining = review.skills.remaining,
            "Reviewed draft"
        );

        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use realms_domain::{
        Ability, AbilityScores, ArchetypeType, CodexSnapshot, EntityLevel, FeatSelection,
        Severity, SkillAllocation, SkillEntry, SpeciesEntry,
    };

    use super::*;
    use crate::infrastructure::ports::MockCodexSource;

    fn codex() -> Arc<CodexSnapshot> {
        Arc::new(
            CodexSnapshot::new()
                .with_skill(SkillEntry::base("athletics", "Athletics"))
                .with_skill(SkillEntry::sub_skill("climbing", "Climbing", "athletics"))
                .with_species(SpeciesEntry::new("human", "Human").with_skill("any")),
        )
    }

    fn source_returning(codex: Arc<CodexSnapshot>) -> Arc<dyn CodexSource> {
        let mut source = MockCodexSource::new();
        source
            .expect_load()
            .times(1)
            .returning(move || Ok(codex.clone()));
        Arc::new(source)
    }

    fn finished_draft() -> CharacterDraft {
        CharacterDraft::new("Brannoc")
            .with_archetype("bulwark", ArchetypeType::Power)
            .with_species("human")
            .with_ancestry("highlander")
            .with_abilities(
                AbilityScores::default()
                    .with(Ability::Strength, 3)
                    .with(Ability::Vitality, 2)
                    .with(Ability::Charisma, 2),
            )
            .with_skills(SkillAllocation::new().with("athletics", 1).with("climbing", 2))
            .with_feat(FeatSelection::archetype("shield-wall"))
            .with_feat(FeatSelection::character("tough"))
            .with_health_energy(12, 6)
    }

    #[tokio::test]
    async fn clean_draft_has_no_issues() {
        let review = ReviewDraft::new(source_returning(codex()))
            .execute(&finished_draft(), None)
            .await
            .expect("review");

        assert!(review.issues.is_empty(), "{:?}", review.issues);
        assert!(!review.has_blocking_errors);
        assert_eq!(review.remaining_ability_points, 0);
        // 3 at level 1 plus the free point; athletics and climbing cost 2 each.
        assert_eq!(review.skills.total, 3);
        assert_eq!(review.skills.bonus, 1);
        assert_eq!(review.skills.remaining, 0);
        assert_eq!(review.budgets.health_energy_pool, 18);
        assert_eq!(review.budgets.training_points, 25);
    }

    #[tokio::test]
    async fn single_step_review_only_reports_that_step() {
        let draft = CharacterDraft::new("").with_level(5);
        let review = ReviewDraft::new(source_returning(codex()))
            .execute(&draft, Some(CreatorStep::Skills))
            .await
            .expect("review");

        assert_eq!(review.issues.len(), 1);
        assert_eq!(review.issues[0].step, CreatorStep::Skills);
        assert_eq!(review.issues[0].severity, Severity::Warning);
        assert!(!review.has_blocking_errors);
    }

    #[tokio::test]
    async fn blocking_errors_are_flagged() {
        let draft = finished_draft().with_currency_spent(250);
        let review = ReviewDraft::new(source_returning(codex()))
            .execute(&draft, None)
            .await
            .expect("review");

        assert!(review.has_blocking_errors);
        assert_eq!(review.errors().count(), 1);
        assert_eq!(review.warnings().count(), 0);
    }

    #[tokio::test]
    async fn configured_currency_and_progression_are_used() {
        let draft = finished_draft().with_currency_spent(250);
        let review = ReviewDraft::new(source_returning(codex()))
            .with_starting_currency(300)
            .with_progression(Arc::new(|_: EntityLevel| 8))
            .execute(&draft, None)
            .await
            .expect("review");

        assert!(!review.has_blocking_errors);
        assert_eq!(review.budgets.ability_points, 8);
        assert_eq!(review.remaining_ability_points, 1);
        assert_eq!(review.warnings().count(), 1);
    }

    #[tokio::test]
    async fn codex_failure_is_surfaced() {
        let mut source = MockCodexSource::new();
        source
            .expect_load()
            .returning(|| Err(CodexSourceError::invalid("broken")));

        let err = ReviewDraft::new(Arc::new(source))
            .execute(&finished_draft(), None)
            .await
            .expect_err("should fail");
        assert!(matches!(err, ReviewError::Codex(CodexSourceError::Invalid(_))));
    }
}
