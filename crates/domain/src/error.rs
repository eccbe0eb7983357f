//! Unified error types for the domain layer
//!
//! The rule functions in [`crate::rules`] are total and never fail. This error
//! type covers the operations that can legitimately be refused: aggregate
//! mutations on a skill encounter and parsing of step names.

use thiserror::Error;

use crate::ids::ParticipantId;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Participant is not part of the encounter
    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    /// A participant with this name already takes part in the encounter
    #[error("Participant already in encounter: {0}")]
    DuplicateParticipant(String),

    /// A roll was already recorded and must be replaced explicitly
    #[error("Roll already recorded for participant {0}")]
    RollAlreadyRecorded(ParticipantId),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for CreatorStep {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "skills" => Ok(Self::Skills),
    ///             _ => Err(DomainError::parse(format!("Unknown creator step: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a participant not found error
    pub fn participant_not_found(id: ParticipantId) -> Self {
        Self::ParticipantNotFound(id)
    }
}
