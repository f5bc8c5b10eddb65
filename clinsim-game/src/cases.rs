//! Starter-case templates and the interview choices they carry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;

const DEFAULT_CASE_DATA: &str = include_str!("../data/cases.json");

/// One question the doctor can ask, with its availability gates and the
/// state deltas its answer applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewChoice {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub reveal: Vec<String>,
    #[serde(default)]
    pub anxiety_delta: i32,
    #[serde(default)]
    pub pain_delta: i32,
    #[serde(default)]
    pub responses: Vec<String>,
    #[serde(default)]
    pub repeat_responses: Vec<String>,
    #[serde(default)]
    pub requires_any: Vec<String>,
    #[serde(default)]
    pub requires_all: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl InterviewChoice {
    /// Gate check against the discovered-symptom set. Empty gates pass.
    #[must_use]
    pub fn is_available(&self, discovered: &BTreeSet<String>) -> bool {
        let any_pass = self.requires_any.is_empty()
            || self
                .requires_any
                .iter()
                .any(|symptom| discovered.contains(symptom));
        let all_pass = self
            .requires_all
            .iter()
            .all(|symptom| discovered.contains(symptom));
        any_pass && all_pass
    }
}

/// Baseline patient values a case starts from before synthesis jitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasePatientTemplate {
    pub age: i32,
    pub height_cm: i32,
    pub weight_kg: i32,
    pub complaint: String,
    pub bp: String,
    pub bpm: i32,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarterCase {
    pub id: String,
    pub patient: CasePatientTemplate,
    pub diagnosis_id: String,
    #[serde(default)]
    pub complaint_categories: Vec<String>,
    #[serde(default)]
    pub starting_anxiety: i32,
    #[serde(default)]
    pub starting_pain: i32,
    #[serde(default)]
    pub interview_choices: Vec<InterviewChoice>,
}

/// Container for all starter-case templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CaseBook {
    #[serde(default)]
    pub cases: Vec<StarterCase>,
}

impl CaseBook {
    /// Create an empty case book (useful for tests).
    #[must_use]
    pub const fn empty() -> Self {
        Self { cases: Vec::new() }
    }

    /// Load starter cases from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid case data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a case book from pre-parsed cases.
    #[must_use]
    pub fn from_cases(cases: Vec<StarterCase>) -> Self {
        Self { cases }
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_CASE_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_book() -> &'static Self {
        static BOOK: OnceLock<CaseBook> = OnceLock::new();
        BOOK.get_or_init(Self::load_from_static)
    }
}
