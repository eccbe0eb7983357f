//! Application composition.

use std::sync::Arc;

use crate::infrastructure::{
    codex_file::JsonFileCodex,
    config::EngineConfig,
    ports::{CodexSource, RandomPort},
    random::SystemRandom,
};
use crate::use_cases::{ReviewDraft, RunSkillEncounter};

/// Main application state.
pub struct App {
    pub codex: Arc<dyn CodexSource>,
    pub use_cases: UseCases,
}

pub struct UseCases {
    pub review: Arc<ReviewDraft>,
    pub encounter: Arc<RunSkillEncounter>,
}

impl App {
    pub fn new(
        config: &EngineConfig,
        codex: Arc<dyn CodexSource>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let review = Arc::new(
            ReviewDraft::new(codex.clone()).with_starting_currency(config.starting_currency),
        );
        let encounter = Arc::new(RunSkillEncounter::new(random));

        Self {
            codex,
            use_cases: UseCases { review, encounter },
        }
    }

    /// Production wiring: codex from the configured JSON file, system dice.
    pub fn from_config(config: &EngineConfig) -> Self {
        let codex: Arc<dyn CodexSource> = Arc::new(JsonFileCodex::new(&config.codex_path));
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());
        Self::new(config, codex, random)
    }
}
