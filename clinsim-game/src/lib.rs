//! Clinsim Game Engine
//!
//! Platform-agnostic core game logic for the Clinsim diagnostic interview
//! game. This crate provides case generation, the interview state machine,
//! diagnosis resolution and the research lookup, without UI or
//! platform-specific dependencies.

pub mod case_factory;
pub mod cases;
pub mod catalog;
pub(crate) mod constants;
pub mod diagnosis;
pub mod interview;
pub mod numbers;
pub mod persona;
pub mod research;
pub mod rng;
pub mod state;

// Re-export commonly used types
pub use case_factory::create_initial_state;
pub use cases::{CaseBook, CasePatientTemplate, InterviewChoice, StarterCase};
pub use catalog::{
    DemographicsProfile, Disease, DiseaseCatalog, DiseaseProfile, SexBias, VitalsProfile,
};
pub use diagnosis::{check_terminal_state, diagnose};
pub use interview::{apply_doctor_choice, apply_patient_reply, available_choices, plan_patient_reply};
pub use persona::{NamePool, PersonaBank};
pub use research::research_diseases;
pub use rng::RngStreams;
pub use state::{
    Demographics, Difficulty, GameResult, GameState, PatientProfile, Role, Sex, TranscriptEntry,
};

use std::sync::OnceLock;
use thiserror::Error;

/// Errors surfaced while loading content tables from JSON.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The static collaborator tables the core consumes: disease catalog,
/// starter cases and persona pools. Built once and shared by reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentLibrary {
    pub diseases: DiseaseCatalog,
    pub cases: CaseBook,
    pub persona: PersonaBank,
}

impl ContentLibrary {
    /// An empty library (useful for tests).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            diseases: DiseaseCatalog::empty(),
            cases: CaseBook::empty(),
            persona: PersonaBank::empty(),
        }
    }

    /// Build a library from three JSON documents.
    ///
    /// # Errors
    ///
    /// Returns an error if any document fails to parse.
    pub fn from_json(
        diseases_json: &str,
        cases_json: &str,
        persona_json: &str,
    ) -> Result<Self, ContentError> {
        Ok(Self {
            diseases: DiseaseCatalog::from_json(diseases_json)?,
            cases: CaseBook::from_json(cases_json)?,
            persona: PersonaBank::from_json(persona_json)?,
        })
    }

    /// Library built from the embedded content tables.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self {
            diseases: DiseaseCatalog::load_from_static(),
            cases: CaseBook::load_from_static(),
            persona: PersonaBank::load_from_static(),
        }
    }

    #[must_use]
    pub fn default_library() -> &'static Self {
        static LIBRARY: OnceLock<ContentLibrary> = OnceLock::new();
        LIBRARY.get_or_init(Self::load_from_static)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_library_holds_all_tables() {
        let library = ContentLibrary::default_library();
        assert!(!library.diseases.diseases.is_empty());
        assert!(!library.cases.cases.is_empty());
        assert!(!library.persona.identities.is_empty());
    }

    #[test]
    fn every_case_diagnosis_resolves_in_the_catalog() {
        let library = ContentLibrary::default_library();
        for case in &library.cases.cases {
            assert!(
                library.diseases.find_by_id(&case.diagnosis_id).is_some(),
                "case {} references unknown diagnosis {}",
                case.id,
                case.diagnosis_id
            );
        }
    }

    #[test]
    fn from_json_propagates_parse_errors() {
        let err = ContentLibrary::from_json("not json", "{}", "{}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
