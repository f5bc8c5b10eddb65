//! Interview engine: choice availability, patient reply planning and the
//! per-reply state transition.
//!
//! Every transition takes the state by value and returns the next state;
//! a terminal state passes through every operation unchanged.

use rand::Rng;

use crate::cases::InterviewChoice;
use crate::constants::{
    DEFAULT_REPLY, GENERIC_REPLY_CHANCE_OPEN, GENERIC_REPLY_CHANCE_REPEAT,
    GENERIC_REPLY_CHANCE_YES_NO, PAIN_JITTER_MAX, PAIN_JITTER_MIN, REPEAT_PENALTY_CAP,
    REPEAT_PENALTY_PER_ASK,
};
use crate::diagnosis::check_terminal_state;
use crate::rng::{clamp_stat, random_from, random_int};
use crate::state::{GameState, Role};

const GENERIC_YES_NO_REPLIES: [&str; 10] = [
    "I think so.",
    "I can't remember.",
    "It's possible.",
    "Maybe, I guess.",
    "Kind of.",
    "Probably.",
    "Not really.",
    "I don't think so.",
    "More yes than no.",
    "Hard to say.",
];

const GENERIC_OPEN_REPLIES: [&str; 7] = [
    "Maybe, I guess.",
    "Kind of, sometimes.",
    "It's possible.",
    "I think so.",
    "I can't remember.",
    "Hard to pin down, honestly.",
    "Could go either way.",
];

const YES_NO_PREFIXES: [&str; 14] = [
    "are", "is", "do", "does", "did", "have", "has", "had", "can", "could", "would", "will",
    "was", "were",
];

/// Heuristic: a question opening with an auxiliary verb reads as yes/no.
fn is_likely_yes_no_question(text: &str) -> bool {
    let prompt = text.trim_start();
    let first_word: String = prompt
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    YES_NO_PREFIXES.contains(&first_word.as_str())
}

fn pick_patient_response<R: Rng + ?Sized>(
    choice: &InterviewChoice,
    repeat_count: u32,
    rng: &mut R,
) -> String {
    let yes_no_prompt = is_likely_yes_no_question(&choice.text);
    let generic_chance = if repeat_count > 0 {
        GENERIC_REPLY_CHANCE_REPEAT
    } else if yes_no_prompt {
        GENERIC_REPLY_CHANCE_YES_NO
    } else {
        GENERIC_REPLY_CHANCE_OPEN
    };
    if rng.gen_bool(generic_chance) {
        let pool: &[&str] = if yes_no_prompt {
            &GENERIC_YES_NO_REPLIES
        } else {
            &GENERIC_OPEN_REPLIES
        };
        if let Some(reply) = random_from(rng, pool) {
            return (*reply).to_string();
        }
    }

    if repeat_count > 0 {
        if let Some(reply) = random_from(rng, &choice.repeat_responses) {
            return reply.clone();
        }
    }
    if let Some(reply) = random_from(rng, &choice.responses) {
        return reply.clone();
    }
    choice
        .note
        .clone()
        .unwrap_or_else(|| DEFAULT_REPLY.to_string())
}

/// Choices the doctor may currently ask: canonical choices whose gates
/// pass, unioned by id with everything already promoted mid-game
/// (promoted choices stay listed regardless of their gates).
#[must_use]
pub fn available_choices(state: &GameState) -> Vec<&InterviewChoice> {
    let mut listed: Vec<&InterviewChoice> = state
        .active_case
        .interview_choices
        .iter()
        .filter(|choice| choice.is_available(&state.discovered_symptoms))
        .collect();
    for choice in &state.newly_revealed {
        if !listed.iter().any(|seen| seen.id == choice.id) {
            listed.push(choice);
        }
    }
    listed
}

/// Compute the reply the patient would give for a choice without touching
/// state. Unknown choice ids resolve to a default line, never an error.
pub fn plan_patient_reply<R: Rng + ?Sized>(
    state: &GameState,
    choice_id: &str,
    rng: &mut R,
) -> String {
    let Some(choice) = state.find_choice(choice_id) else {
        return DEFAULT_REPLY.to_string();
    };
    pick_patient_response(choice, state.repeat_count(choice_id), rng)
}

/// Append the doctor's question to the transcript. Meters, counts and
/// symptoms are deferred to the reply step so the caller can stage a
/// delay between question and answer.
#[must_use]
pub fn apply_doctor_choice(mut state: GameState, choice_id: &str) -> GameState {
    if state.is_terminal() {
        return state;
    }
    let Some(text) = state.find_choice(choice_id).map(|choice| choice.text.clone()) else {
        log::warn!("apply_doctor_choice: unknown choice id {choice_id}");
        return state;
    };
    state.push_entry(Role::Doctor, text);
    state
}

/// Resolve the patient's answer: applies meter deltas with the repeat
/// penalty and pain jitter, unions revealed symptoms, records the ask,
/// appends the patient's reply as the single new transcript entry, then
/// checks the loss thresholds. A breach only sets `result`; the caller
/// reads the outcome from there. When the state survives, one
/// still-locked canonical question may be promoted into the revealed
/// list.
#[must_use]
pub fn apply_patient_reply<R: Rng + ?Sized>(
    mut state: GameState,
    choice_id: &str,
    response_text: Option<&str>,
    rng: &mut R,
) -> GameState {
    if state.is_terminal() {
        return state;
    }
    let Some(choice) = state.find_choice(choice_id).cloned() else {
        log::warn!("apply_patient_reply: unknown choice id {choice_id}");
        return state;
    };

    let repeat_count = state.repeat_count(choice_id);
    let repeat_penalty = if repeat_count > 0 {
        REPEAT_PENALTY_CAP.min(
            i32::try_from(repeat_count).unwrap_or(REPEAT_PENALTY_CAP) * REPEAT_PENALTY_PER_ASK,
        )
    } else {
        0
    };
    let reply = response_text.map_or_else(
        || pick_patient_response(&choice, repeat_count, rng),
        str::to_string,
    );

    state.anxiety = clamp_stat(state.anxiety + choice.anxiety_delta + repeat_penalty);
    state.pain = clamp_stat(
        state.pain + choice.pain_delta + random_int(rng, PAIN_JITTER_MIN, PAIN_JITTER_MAX),
    );
    for symptom in &choice.reveal {
        state.discovered_symptoms.insert(symptom.clone());
    }
    *state.question_counts.entry(choice.id.clone()).or_insert(0) += 1;
    state.push_entry(Role::Patient, reply);

    if let Some(result) = check_terminal_state(state.anxiety, state.pain) {
        log::debug!("encounter ended mid-interview: {}", result.message);
        state.result = Some(result);
        return state;
    }

    promote_locked_choice(&mut state, rng);
    state
}

/// Promote one canonical choice that is neither available nor already
/// promoted, picked uniformly. This unlocks gated follow-ups on a pacing
/// channel independent of the symptom gates themselves.
fn promote_locked_choice<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    let locked: Vec<InterviewChoice> = state
        .active_case
        .interview_choices
        .iter()
        .filter(|choice| {
            !choice.is_available(&state.discovered_symptoms)
                && !state
                    .newly_revealed
                    .iter()
                    .any(|revealed| revealed.id == choice.id)
        })
        .cloned()
        .collect();
    if let Some(choice) = random_from(rng, &locked) {
        state.newly_revealed.push(choice.clone());
    }
}
