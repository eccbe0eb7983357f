//! Skill encounter use case.
//!
//! Runs a whole encounter from a list of participant entries. Each entry
//! either carries the total the player rolled at the table, asks the engine
//! to roll a d20 plus a bonus, or leaves the participant pending.

use std::str::FromStr;
use std::sync::Arc;

use realms_domain::rules::{RollOutcome, SkillRoll};
use realms_domain::{DomainError, EncounterId, EncounterStatus, SkillEncounter};
use serde::Serialize;

use crate::infrastructure::ports::RandomPort;

#[derive(Debug, thiserror::Error)]
pub enum EncounterError {
    #[error("Invalid roll entry {entry:?}: {reason}")]
    InvalidEntry { entry: String, reason: String },

    #[error("Encounter has no participants")]
    NoParticipants,

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl EncounterError {
    fn invalid(entry: &str, reason: impl ToString) -> Self {
        Self::InvalidEntry {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// How a participant's roll is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollInput {
    /// Total already rolled at the table.
    Total(i32),
    /// Engine rolls a d20 and adds the bonus.
    Die { bonus: i32 },
    Pending,
}

/// One participant in `name`, `name=17` or `name=d20+3` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollEntry {
    pub name: String,
    pub roll: RollInput,
}

impl FromStr for RollEntry {
    type Err = EncounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, roll) = match s.split_once('=') {
            Some((name, roll)) => (name.trim(), Some(roll.trim())),
            None => (s.trim(), None),
        };
        if name.is_empty() {
            return Err(EncounterError::invalid(s, "missing participant name"));
        }

        let roll = match roll {
            None => RollInput::Pending,
            Some(roll) => parse_roll(roll).ok_or_else(|| {
                EncounterError::invalid(s, "expected a number or d20 with an optional bonus")
            })?,
        };

        Ok(Self {
            name: name.to_string(),
            roll,
        })
    }
}

fn parse_roll(roll: &str) -> Option<RollInput> {
    let lower = roll.to_ascii_lowercase();
    let Some(rest) = lower.strip_prefix("d20") else {
        return roll.parse().ok().map(RollInput::Total);
    };
    let rest: String = rest.chars().filter(|c| !c.is_whitespace()).collect();
    let bonus = if rest.is_empty() {
        0
    } else if let Some(plus) = rest.strip_prefix('+') {
        plus.parse().ok()?
    } else if rest.starts_with('-') {
        rest.parse().ok()?
    } else {
        return None;
    };
    Some(RollInput::Die { bonus })
}

/// Parse a comma separated entry list. Blank items are skipped.
pub fn parse_roll_entries(list: &str) -> Result<Vec<RollEntry>, EncounterError> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(RollEntry::from_str)
        .collect()
}

#[derive(Debug, Clone)]
pub struct EncounterRequest {
    pub difficulty_score: i32,
    pub entries: Vec<RollEntry>,
    /// Success and failure thresholds, when the table set them.
    pub thresholds: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResult {
    pub name: String,
    pub roll: Option<SkillRoll>,
    pub outcome: Option<RollOutcome>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterReport {
    pub encounter_id: EncounterId,
    pub difficulty_score: i32,
    pub participants: Vec<ParticipantResult>,
    pub totals: RollOutcome,
    pub pending: Vec<String>,
    pub status: Option<EncounterStatus>,
}

/// Run an encounter tracker over a batch of entries.
pub struct RunSkillEncounter {
    random: Arc<dyn RandomPort>,
}

impl RunSkillEncounter {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn execute(&self, request: EncounterRequest) -> Result<EncounterReport, EncounterError> {
        if request.entries.is_empty() {
            return Err(EncounterError::NoParticipants);
        }

        let mut encounter = SkillEncounter::new(request.difficulty_score);
        let mut participants = Vec::with_capacity(request.entries.len());

        for entry in request.entries {
            let id = encounter.add_participant(entry.name.clone())?;
            let roll = match entry.roll {
                RollInput::Total(total) => Some(SkillRoll::from_die(total, 0)),
                RollInput::Die { bonus } => Some(SkillRoll::roll_with(bonus, |min, max| {
                    self.random.gen_range(min, max)
                })),
                RollInput::Pending => None,
            };

            let outcome = match roll {
                Some(roll) => Some(encounter.record_roll(id, roll.total)?),
                None => None,
            };

            tracing::debug!(
                encounter_id = %encounter.id(),
                participant = %entry.name,
                roll = ?roll.map(|r| r.total),
                "Recorded encounter roll"
            );

            participants.push(ParticipantResult {
                name: entry.name,
                roll,
                outcome,
            });
        }

        let totals = encounter.totals();
        let status = request
            .thresholds
            .map(|(required, allowed)| encounter.status(required, allowed));

        tracing::info!(
            encounter_id = %encounter.id(),
            difficulty_score = encounter.difficulty_score(),
            successes = totals.successes,
            failures = totals.failures,
            status = ?status,
            "Skill encounter resolved"
        );

        Ok(EncounterReport {
            encounter_id: encounter.id(),
            difficulty_score: encounter.difficulty_score(),
            pending: encounter
                .pending_participants()
                .map(|p| p.name().to_string())
                .collect(),
            participants,
            totals,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::random::FixedRandom;

    fn run(difficulty_score: i32, list: &str, thresholds: Option<(u32, u32)>) -> EncounterReport {
        RunSkillEncounter::new(Arc::new(FixedRandom(11)))
            .execute(EncounterRequest {
                difficulty_score,
                entries: parse_roll_entries(list).expect("entries"),
                thresholds,
            })
            .expect("encounter")
    }

    #[test]
    fn parses_entry_forms() {
        let entries = parse_roll_entries("Kestrel=17, Mott = d20+3 ,Vey=d20-2,Oda=D20,Pell,")
            .expect("entries");
        let entry = |name: &str, roll| RollEntry {
            name: name.to_string(),
            roll,
        };
        assert_eq!(
            entries,
            vec![
                entry("Kestrel", RollInput::Total(17)),
                entry("Mott", RollInput::Die { bonus: 3 }),
                entry("Vey", RollInput::Die { bonus: -2 }),
                entry("Oda", RollInput::Die { bonus: 0 }),
                entry("Pell", RollInput::Pending),
            ]
        );
    }

    #[test]
    fn rejects_malformed_entries() {
        for bad in ["=12", "Kestrel=high", "Kestrel=d20*2", "Kestrel=d6"] {
            let err = parse_roll_entries(bad).expect_err(bad);
            assert!(matches!(err, EncounterError::InvalidEntry { .. }), "{bad}");
        }
    }

    #[test]
    fn totals_sum_every_recorded_roll() {
        let report = run(12, "Kestrel=17,Mott=3,Vey=12", None);
        assert_eq!(report.totals, RollOutcome::new(3, 2));
        assert_eq!(report.participants[0].outcome, Some(RollOutcome::new(2, 0)));
        assert_eq!(report.participants[1].outcome, Some(RollOutcome::new(0, 2)));
        assert!(report.pending.is_empty());
        assert_eq!(report.status, None);
    }

    #[test]
    fn engine_rolls_use_the_random_port() {
        let report = run(12, "Mott=d20+3", None);
        let roll = report.participants[0].roll.expect("rolled");
        assert_eq!((roll.die, roll.bonus, roll.total), (11, 3, 14));
        assert_eq!(report.totals, RollOutcome::new(1, 0));
    }

    #[test]
    fn pending_participants_do_not_count() {
        let report = run(10, "Kestrel=10,Pell", Some((2, 1)));
        assert_eq!(report.pending, vec!["Pell".to_string()]);
        assert_eq!(report.totals, RollOutcome::new(1, 0));
        assert_eq!(report.status, Some(EncounterStatus::InProgress));
    }

    #[test]
    fn thresholds_decide_status() {
        assert_eq!(
            run(10, "A=20,B=15", Some((4, 1))).status,
            Some(EncounterStatus::Succeeded)
        );
        assert_eq!(
            run(10, "A=20,B=1", Some((2, 1))).status,
            Some(EncounterStatus::Failed)
        );
    }

    #[test]
    fn duplicate_names_are_refused() {
        let err = RunSkillEncounter::new(Arc::new(FixedRandom(10)))
            .execute(EncounterRequest {
                difficulty_score: 10,
                entries: parse_roll_entries("Kestrel=10,kestrel=12").expect("entries"),
                thresholds: None,
            })
            .expect_err("should fail");
        assert!(matches!(
            err,
            EncounterError::Domain(DomainError::DuplicateParticipant(_))
        ));
    }

    #[test]
    fn empty_encounter_is_refused() {
        let err = RunSkillEncounter::new(Arc::new(FixedRandom(10)))
            .execute(EncounterRequest {
                difficulty_score: 10,
                entries: Vec::new(),
                thresholds: None,
            })
            .expect_err("should fail");
        assert!(matches!(err, EncounterError::NoParticipants));
    }
}
