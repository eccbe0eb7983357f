//! JSON file codex adapter.
//!
//! Reads a single camelCase JSON document with `species` and `skills` arrays.
//! The file is read once; later loads share the same snapshot.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use realms_domain::CodexSnapshot;
use tokio::fs;
use tokio::sync::OnceCell;

use crate::infrastructure::ports::{CodexSource, CodexSourceError};

pub struct JsonFileCodex {
    path: PathBuf,
    snapshot: OnceCell<Arc<CodexSnapshot>>,
}

impl JsonFileCodex {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Arc<CodexSnapshot>, CodexSourceError> {
        if !fs::try_exists(&self.path).await? {
            return Err(CodexSourceError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).await?;
        let codex: CodexSnapshot = serde_json::from_str(&content)?;
        check_references(&codex)?;

        tracing::info!(
            path = %self.path.display(),
            species = codex.species.len(),
            skills = codex.skills.len(),
            "Loaded codex"
        );
        Ok(Arc::new(codex))
    }
}

#[async_trait]
impl CodexSource for JsonFileCodex {
    async fn load(&self) -> Result<Arc<CodexSnapshot>, CodexSourceError> {
        self.snapshot
            .get_or_try_init(|| self.read())
            .await
            .map(Arc::clone)
    }
}

/// Sub-skills must name a base skill that exists and is not itself a sub-skill.
fn check_references(codex: &CodexSnapshot) -> Result<(), CodexSourceError> {
    let mut seen = HashSet::new();
    for skill in &codex.skills {
        if !seen.insert(skill.id.as_str()) {
            tracing::warn!(skill_id = %skill.id, "Duplicate skill id in codex, first entry wins");
        }
    }

    for skill in &codex.skills {
        let Some(base_id) = skill.base_skill_id.as_deref() else {
            continue;
        };
        match codex.skill(base_id) {
            Some(base) if !base.is_sub_skill() => {}
            Some(_) => {
                return Err(CodexSourceError::invalid(format!(
                    "sub-skill {} derives from another sub-skill {}",
                    skill.id, base_id
                )))
            }
            None => {
                return Err(CodexSourceError::invalid(format!(
                    "sub-skill {} names unknown base skill {}",
                    skill.id, base_id
                )))
            }
        }
    }
    Ok(())
}
