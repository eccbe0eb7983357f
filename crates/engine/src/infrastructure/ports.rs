//! Port traits for the engine's external dependencies.
//!
//! Use cases depend on these traits only; adapters live next door in
//! `infrastructure`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use realms_domain::CodexSnapshot;

// =============================================================================
// Codex
// =============================================================================

/// Errors raised while fetching codex content.
#[derive(Debug, thiserror::Error)]
pub enum CodexSourceError {
    /// The codex file does not exist.
    #[error("Codex file not found at {0}")]
    NotFound(PathBuf),

    #[error("IO error reading codex: {0}")]
    Io(#[from] std::io::Error),

    #[error("Codex JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content parsed but is not usable, e.g. a sub-skill naming a missing base.
    #[error("Invalid codex content: {0}")]
    Invalid(String),
}

impl CodexSourceError {
    pub fn invalid(message: impl ToString) -> Self {
        Self::Invalid(message.to_string())
    }
}

/// Source of the shared content library.
///
/// The returned snapshot is read-only and may be shared between callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodexSource: Send + Sync {
    async fn load(&self) -> Result<Arc<CodexSnapshot>, CodexSourceError>;
}

// =============================================================================
// Testability Ports
// =============================================================================

/// Inclusive integer range source, used for dice.
pub trait RandomPort: Send + Sync {
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
