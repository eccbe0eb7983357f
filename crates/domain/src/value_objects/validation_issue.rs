//! Character creator steps and the issues reported against them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The character creator's steps, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatorStep {
    Archetype,
    Species,
    Ancestry,
    Abilities,
    Skills,
    Feats,
    Equipment,
    Powers,
    Finalize,
}

impl CreatorStep {
    pub const ALL: [CreatorStep; 9] = [
        CreatorStep::Archetype,
        CreatorStep::Species,
        CreatorStep::Ancestry,
        CreatorStep::Abilities,
        CreatorStep::Skills,
        CreatorStep::Feats,
        CreatorStep::Equipment,
        CreatorStep::Powers,
        CreatorStep::Finalize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatorStep::Archetype => "archetype",
            CreatorStep::Species => "species",
            CreatorStep::Ancestry => "ancestry",
            CreatorStep::Abilities => "abilities",
            CreatorStep::Skills => "skills",
            CreatorStep::Feats => "feats",
            CreatorStep::Equipment => "equipment",
            CreatorStep::Powers => "powers",
            CreatorStep::Finalize => "finalize",
        }
    }
}

impl fmt::Display for CreatorStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreatorStep {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CreatorStep::ALL
            .into_iter()
            .find(|step| step.as_str() == wanted)
            .ok_or_else(|| DomainError::parse(format!("Unknown creator step: {}", s)))
    }
}

/// Warnings mark an incomplete draft, errors an illegal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A single finding shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub step: CreatorStep,
    pub emoji: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn warning(step: CreatorStep, emoji: &str, message: impl Into<String>) -> Self {
        Self {
            step,
            emoji: emoji.to_string(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(step: CreatorStep, emoji: &str, message: impl Into<String>) -> Self {
        Self {
            step,
            emoji: emoji.to_string(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.emoji, self.severity, self.step, self.message
        )
    }
}
