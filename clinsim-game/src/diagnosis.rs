//! Loss thresholds and diagnosis resolution.

use crate::catalog::DiseaseCatalog;
use crate::constants::STAT_MAX;
use crate::state::{GameResult, GameState};

const UNKNOWN_DISEASE: &str = "Unknown";

/// Loss check for the pressure meters. Anxiety wins ties.
#[must_use]
pub fn check_terminal_state(anxiety: i32, pain: i32) -> Option<GameResult> {
    if anxiety >= STAT_MAX {
        return Some(GameResult {
            win: false,
            message: "Patient anxiety maxed out and they left the clinic.".to_string(),
        });
    }
    if pain >= STAT_MAX {
        return Some(GameResult {
            win: false,
            message: "Patient pain reached critical level and they passed out.".to_string(),
        });
    }
    None
}

/// Resolve a submitted diagnosis into a final result.
///
/// No-op when the state is already terminal or the id is empty. Meters
/// are re-checked first since they may have crossed threshold after the
/// last reply; a breach overrides the diagnosis attempt as a loss.
/// Only `result` changes; the transcript is left untouched.
#[must_use]
pub fn diagnose(mut state: GameState, catalog: &DiseaseCatalog, disease_id: &str) -> GameState {
    if disease_id.is_empty() || state.is_terminal() {
        return state;
    }

    if let Some(terminal) = check_terminal_state(state.anxiety, state.pain) {
        state.result = Some(terminal);
        return state;
    }

    let selected = catalog.find_by_id(disease_id);
    let selected_name = selected.map_or(UNKNOWN_DISEASE, |disease| disease.name.as_str());

    let result = if disease_id == state.active_case.diagnosis_id {
        let message = selected.and_then(|disease| disease.treatment.as_deref()).map_or_else(
            || format!("Correct diagnosis: {selected_name}. The patient can begin treatment."),
            |treatment| format!("Correct diagnosis: {selected_name}. Planned treatment: {treatment}"),
        );
        GameResult { win: true, message }
    } else {
        let actual_name = catalog
            .find_by_id(&state.active_case.diagnosis_id)
            .map_or(UNKNOWN_DISEASE, |disease| disease.name.as_str());
        GameResult {
            win: false,
            message: format!(
                "Incorrect diagnosis: {selected_name}. Actual illness was {actual_name}."
            ),
        }
    };

    log::info!(
        "diagnosis submitted | case:{} chosen:{} win:{}",
        state.active_case.id,
        disease_id,
        result.win
    );
    state.result = Some(result);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{CasePatientTemplate, StarterCase};
    use crate::state::PatientProfile;

    fn state_for(diagnosis_id: &str) -> GameState {
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
            diagnosis_id: diagnosis_id.into(),
            complaint_categories: vec![],
            starting_anxiety: 10,
            starting_pain: 10,
            interview_choices: vec![],
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
    fn anxiety_breach_outranks_pain() {
        let anxiety_loss = check_terminal_state(100, 100).unwrap();
        assert!(anxiety_loss.message.contains("anxiety"));
        let pain_loss = check_terminal_state(40, 100).unwrap();
        assert!(pain_loss.message.contains("pain"));
        assert!(check_terminal_state(99, 99).is_none());
    }

    #[test]
    fn correct_diagnosis_wins_with_treatment_text() {
        let catalog = DiseaseCatalog::default_catalog();
        let disease = catalog
            .diseases
            .iter()
            .find(|candidate| candidate.treatment.is_some())
            .expect("some disease has treatment text");
        let state = diagnose(state_for(&disease.id), catalog, &disease.id);
        let result = state.result.expect("resolved");
        assert!(result.win);
        assert!(result.message.to_lowercase().contains("treatment"));
        assert!(result.message.contains(&disease.name));
    }

    #[test]
    fn wrong_diagnosis_names_both_diseases() {
        let catalog = DiseaseCatalog::default_catalog();
        let state = diagnose(state_for("influenza"), catalog, "common-cold");
        let result = state.result.expect("resolved");
        assert!(!result.win);
        assert!(result.message.contains("Common Cold"));
        assert!(result.message.contains("Influenza"));
    }

    #[test]
    fn unknown_ids_fall_back_to_unknown_label() {
        let catalog = DiseaseCatalog::default_catalog();
        let state = diagnose(state_for("no-such-actual"), catalog, "no-such-pick");
        let result = state.result.expect("resolved");
        assert!(!result.win);
        assert_eq!(
            result.message,
            "Incorrect diagnosis: Unknown. Actual illness was Unknown."
        );
    }

    #[test]
    fn empty_id_and_terminal_states_are_no_ops() {
        let catalog = DiseaseCatalog::default_catalog();
        let state = diagnose(state_for("influenza"), catalog, "");
        assert!(state.result.is_none());

        let mut resolved = state_for("influenza");
        resolved.result = Some(GameResult {
            win: false,
            message: "done".into(),
        });
        let resolved = diagnose(resolved, catalog, "influenza");
        assert_eq!(resolved.result.unwrap().message, "done");
    }

    #[test]
    fn diagnose_only_sets_result_never_the_transcript() {
        let catalog = DiseaseCatalog::default_catalog();
        let before = state_for("influenza");
        let transcript = before.transcript.clone();

        let won = diagnose(before.clone(), catalog, "influenza");
        assert!(won.result.is_some());
        assert_eq!(won.transcript, transcript);

        let lost = diagnose(before.clone(), catalog, "common-cold");
        assert_eq!(lost.transcript, transcript);

        let mut breached = before;
        breached.anxiety = 100;
        let breached = diagnose(breached, catalog, "influenza");
        assert!(breached.result.is_some());
        assert_eq!(breached.transcript, transcript);
    }

    #[test]
    fn meter_breach_overrides_submission() {
        let catalog = DiseaseCatalog::default_catalog();
        let mut state = state_for("influenza");
        state.pain = 100;
        let state = diagnose(state, catalog, "influenza");
        let result = state.result.expect("resolved");
        assert!(!result.win);
        assert!(result.message.contains("pain"));
    }
}
