//! Game state types for one patient encounter.
//!
//! A `GameState` is created fresh per encounter by the case factory and
//! replaced by value on every transition; once `result` is set the state
//! is terminal and every mutator becomes a no-op.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::cases::{InterviewChoice, StarterCase};

/// Sex assigned at birth, used only for demographic case weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    F,
    M,
}

impl Sex {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::F => "F",
            Self::M => "M",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Difficult,
}

impl Difficulty {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Difficult => "difficult",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "difficult" => Ok(Self::Difficult),
            _ => Err(()),
        }
    }
}

/// Speaker of a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Doctor,
    Patient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: u32,
    pub role: Role,
    pub text: String,
}

/// Final outcome of an encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub win: bool,
    pub message: String,
}

/// Sampled demographics that drive weighted case selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: i32,
    pub sex: Sex,
}

/// A case patient template expanded with sampled age, generated name,
/// identity label and complaint. Frozen after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub identity: String,
    pub age: i32,
    pub height_cm: i32,
    pub weight_kg: i32,
    pub complaint: String,
    pub bp: String,
    pub bpm: i32,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub active_case: StarterCase,
    pub patient: PatientProfile,
    pub discovered_symptoms: BTreeSet<String>,
    pub question_counts: BTreeMap<String, u32>,
    pub newly_revealed: Vec<InterviewChoice>,
    pub anxiety: i32,
    pub pain: i32,
    pub result: Option<GameResult>,
    pub transcript: Vec<TranscriptEntry>,
    #[serde(default)]
    next_entry_id: u32,
}

impl GameState {
    #[must_use]
    pub fn new(active_case: StarterCase, patient: PatientProfile) -> Self {
        let anxiety = active_case.starting_anxiety;
        let pain = active_case.starting_pain;
        Self {
            active_case,
            patient,
            discovered_symptoms: BTreeSet::new(),
            question_counts: BTreeMap::new(),
            newly_revealed: Vec::new(),
            anxiety,
            pain,
            result: None,
            transcript: Vec::new(),
            next_entry_id: 0,
        }
    }

    /// A state with a non-null result accepts no further mutation.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Single lookup over the canonical choice list and the choices
    /// promoted mid-game; makes the "choice exists" contract explicit.
    #[must_use]
    pub fn find_choice(&self, choice_id: &str) -> Option<&InterviewChoice> {
        self.active_case
            .interview_choices
            .iter()
            .chain(self.newly_revealed.iter())
            .find(|choice| choice.id == choice_id)
    }

    /// Times a choice has already been asked.
    #[must_use]
    pub fn repeat_count(&self, choice_id: &str) -> u32 {
        self.question_counts.get(choice_id).copied().unwrap_or(0)
    }

    pub(crate) fn push_entry(&mut self, role: Role, text: impl Into<String>) {
        let id = self.next_entry_id;
        self.next_entry_id = self.next_entry_id.wrapping_add(1);
        self.transcript.push(TranscriptEntry {
            id,
            role,
            text: text.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::CasePatientTemplate;

    fn sample_state() -> GameState {
        let case = StarterCase {
            id: "case".into(),
            patient: CasePatientTemplate {
                age: 30,
                height_cm: 170,
                weight_kg: 70,
                complaint: "Test".into(),
                bp: "120/80".into(),
                bpm: 80,
                temperature_c: 36.9,
            },
            diagnosis_id: "common-cold".into(),
            complaint_categories: vec![],
            starting_anxiety: 12,
            starting_pain: 7,
            interview_choices: vec![InterviewChoice {
                id: "q1".into(),
                text: "How are you?".into(),
                reveal: vec![],
                anxiety_delta: 1,
                pain_delta: 0,
                responses: vec!["Fine.".into()],
                repeat_responses: vec![],
                requires_any: vec![],
                requires_all: vec![],
                note: None,
            }],
        };
        let patient = PatientProfile {
            name: "Pat Doe".into(),
            identity: "barista".into(),
            age: 30,
            height_cm: 170,
            weight_kg: 70,
            complaint: "Test".into(),
            bp: "120/80".into(),
            bpm: 80,
            temperature_c: 36.9,
        };
        GameState::new(case, patient)
    }

    #[test]
    fn new_state_takes_starting_meters() {
        let state = sample_state();
        assert_eq!(state.anxiety, 12);
        assert_eq!(state.pain, 7);
        assert!(!state.is_terminal());
        assert!(state.transcript.is_empty());
    }

    #[test]
    fn find_choice_covers_revealed_list() {
        let mut state = sample_state();
        assert!(state.find_choice("q1").is_some());
        assert!(state.find_choice("ghost").is_none());

        state.newly_revealed.push(InterviewChoice {
            id: "late".into(),
            text: "Anything else?".into(),
            reveal: vec![],
            anxiety_delta: 0,
            pain_delta: 0,
            responses: vec![],
            repeat_responses: vec![],
            requires_any: vec![],
            requires_all: vec![],
            note: None,
        });
        assert!(state.find_choice("late").is_some());
    }

    #[test]
    fn transcript_ids_are_sequential() {
        let mut state = sample_state();
        state.push_entry(Role::System, "one");
        state.push_entry(Role::Patient, "two");
        let ids: Vec<u32> = state.transcript.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn state_roundtrips_through_serde() {
        let mut state = sample_state();
        state.push_entry(Role::System, "hello");
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
