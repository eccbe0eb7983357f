//! SkillEncounter aggregate - the live skill-encounter tracker
//!
//! Participants each get at most one recorded roll. A recorded roll is only
//! replaced through [`SkillEncounter::reroll`]. Running totals are derived
//! from the recorded rolls on every read, so they cannot drift from them.
//!
//! # Example
//!
//! ```
//! use realms_domain::aggregates::SkillEncounter;
//!
//! let mut encounter = SkillEncounter::new(12);
//! let kestrel = encounter.add_participant("Kestrel").unwrap();
//! encounter.record_roll(kestrel, 17).unwrap();
//!
//! let totals = encounter.totals();
//! assert_eq!(totals.successes, 2);
//! assert_eq!(totals.failures, 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{EncounterId, ParticipantId};
use crate::rules::encounter::{resolve_roll, RollOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillParticipant {
    id: ParticipantId,
    name: String,
    roll: Option<i32>,
}

impl SkillParticipant {
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll(&self) -> Option<i32> {
        self.roll
    }

    pub fn has_rolled(&self) -> bool {
        self.roll.is_some()
    }
}

/// Where an encounter stands against its success and failure thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterStatus {
    InProgress,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEncounter {
    id: EncounterId,
    difficulty_score: i32,
    participants: Vec<SkillParticipant>,
}

impl SkillEncounter {
    pub fn new(difficulty_score: i32) -> Self {
        Self {
            id: EncounterId::new(),
            difficulty_score,
            participants: Vec::new(),
        }
    }

    pub fn id(&self) -> EncounterId {
        self.id
    }

    pub fn difficulty_score(&self) -> i32 {
        self.difficulty_score
    }

    /// Changing the DS re-scores every roll already recorded.
    pub fn set_difficulty_score(&mut self, difficulty_score: i32) {
        self.difficulty_score = difficulty_score;
    }

    pub fn participants(&self) -> &[SkillParticipant] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&SkillParticipant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn add_participant(
        &mut self,
        name: impl Into<String>,
    ) -> Result<ParticipantId, DomainError> {
        let name = name.into();
        if self
            .participants
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&name))
        {
            return Err(DomainError::DuplicateParticipant(name));
        }
        let id = ParticipantId::new();
        self.participants.push(SkillParticipant {
            id,
            name,
            roll: None,
        });
        Ok(id)
    }

    pub fn remove_participant(
        &mut self,
        id: ParticipantId,
    ) -> Result<SkillParticipant, DomainError> {
        let index = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DomainError::participant_not_found(id))?;
        Ok(self.participants.remove(index))
    }

    /// Record a first roll. Returns the roll's contribution.
    pub fn record_roll(
        &mut self,
        id: ParticipantId,
        roll: i32,
    ) -> Result<RollOutcome, DomainError> {
        let difficulty_score = self.difficulty_score;
        let participant = self.participant_mut(id)?;
        if participant.roll.is_some() {
            return Err(DomainError::RollAlreadyRecorded(id));
        }
        participant.roll = Some(roll);
        Ok(resolve_roll(roll, difficulty_score))
    }

    /// Replace a participant's roll, whether or not one was recorded.
    pub fn reroll(&mut self, id: ParticipantId, roll: i32) -> Result<RollOutcome, DomainError> {
        let difficulty_score = self.difficulty_score;
        let participant = self.participant_mut(id)?;
        participant.roll = Some(roll);
        Ok(resolve_roll(roll, difficulty_score))
    }

    pub fn clear_roll(&mut self, id: ParticipantId) -> Result<Option<i32>, DomainError> {
        Ok(self.participant_mut(id)?.roll.take())
    }

    /// Contribution of one participant's roll, if recorded.
    pub fn outcome_for(&self, id: ParticipantId) -> Option<RollOutcome> {
        self.participant(id)
            .and_then(|p| p.roll)
            .map(|roll| resolve_roll(roll, self.difficulty_score))
    }

    /// Running totals over all recorded rolls.
    pub fn totals(&self) -> RollOutcome {
        self.participants
            .iter()
            .filter_map(|p| p.roll)
            .map(|roll| resolve_roll(roll, self.difficulty_score))
            .fold(RollOutcome::default(), |acc, outcome| acc + outcome)
    }

    pub fn pending_participants(&self) -> impl Iterator<Item = &SkillParticipant> {
        self.participants.iter().filter(|p| !p.has_rolled())
    }

    pub fn all_rolled(&self) -> bool {
        self.pending_participants().next().is_none()
    }

    /// Classify the encounter against the thresholds the table agreed on.
    ///
    /// Failure is checked first: going past the allowed failures ends the
    /// encounter even when the success target was also reached.
    pub fn status(&self, required_successes: u32, allowed_failures: u32) -> EncounterStatus {
        let totals = self.totals();
        if totals.failures > allowed_failures {
            EncounterStatus::Failed
        } else if totals.successes >= required_successes {
            EncounterStatus::Succeeded
        } else {
            EncounterStatus::InProgress
        }
    }

    fn participant_mut(&mut self, id: ParticipantId) -> Result<&mut SkillParticipant, DomainError> {
        self.participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::participant_not_found(id))
    }
}
