//! Case generation: weighted case selection, decoy-question expansion
//! and patient profile synthesis for a fresh encounter.

use rand::Rng;

use crate::ContentLibrary;
use crate::cases::{CasePatientTemplate, InterviewChoice, StarterCase};
use crate::constants::{
    BORROWED_ANXIETY_COST, BPM_BASELINE_MAX, BPM_BASELINE_MIN, CASE_WEIGHT_FLOOR,
    DEFAULT_COMPLAINT, DIASTOLIC_MAX, DIASTOLIC_MIN, DIASTOLIC_OFFSET_RATIO, ELDER_AGE_THRESHOLD,
    ELDER_SYSTOLIC_OFFSET, HEIGHT_MAX_CM, HEIGHT_MIN_CM, PATIENT_AGE_MAX, PATIENT_AGE_MIN,
    RED_HERRING_SHARE, SYSTOLIC_MAX, SYSTOLIC_MIN, TEMP_MAX_C, TEMP_MIN_C, WEIGHT_MAX_KG,
    WEIGHT_MIN_KG, YOUTH_AGE_THRESHOLD, YOUTH_SYSTOLIC_OFFSET,
};
use crate::numbers::{round_f64_to_i32, round_to_tenth};
use crate::rng::{random_float, random_from, random_int, sample_without_replacement, shuffle};
use crate::state::{Demographics, Difficulty, GameState, PatientProfile, Role, Sex};

/// Create the initial state for a new encounter, or `None` when the
/// library carries no starter cases.
pub fn create_initial_state<R: Rng + ?Sized>(
    library: &ContentLibrary,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<GameState> {
    let demographics = sample_demographics(rng);
    let base_case = choose_case(library, demographics, rng)?;
    let active_case = build_active_case(library, base_case, difficulty, rng);
    let patient = build_patient_profile(library, &active_case, demographics, rng);

    log::debug!(
        "new encounter | case:{} diagnosis:{} age:{} sex:{} choices:{}",
        active_case.id,
        active_case.diagnosis_id,
        demographics.age,
        demographics.sex,
        active_case.interview_choices.len()
    );

    let mut state = GameState::new(active_case, patient);
    state.push_entry(
        Role::System,
        format!(
            "New patient assigned: {}, {}, {}.",
            state.patient.name, state.patient.age, state.patient.identity
        ),
    );
    state.push_entry(Role::Patient, state.patient.complaint.clone());
    Some(state)
}

fn sample_demographics<R: Rng + ?Sized>(rng: &mut R) -> Demographics {
    Demographics {
        age: random_int(rng, PATIENT_AGE_MIN, PATIENT_AGE_MAX),
        sex: if rng.gen_bool(0.5) { Sex::F } else { Sex::M },
    }
}

fn gaussian_age_weight(age: f64, peak: f64, spread: f64) -> f64 {
    let z = (age - peak) / spread;
    (-0.5 * z * z).exp()
}

/// Weight of one candidate case for the sampled demographics. Cases whose
/// disease carries no demographic profile weigh 1; profiled cases are
/// floored so no case is ever excluded outright.
fn case_weight(library: &ContentLibrary, candidate: &StarterCase, demographics: Demographics) -> f64 {
    let Some(profile) = library
        .diseases
        .find_by_id(&candidate.diagnosis_id)
        .and_then(|disease| disease.profile.as_ref())
    else {
        return 1.0;
    };
    let demo = &profile.demographics;
    let age_weight = gaussian_age_weight(f64::from(demographics.age), demo.age_peak, demo.age_spread);
    let sex_weight = match demographics.sex {
        Sex::F => demo.sex_bias.f,
        Sex::M => demo.sex_bias.m,
    };
    (age_weight * sex_weight).max(CASE_WEIGHT_FLOOR)
}

/// Roulette-wheel draw over demographic weights. Falls back to the last
/// candidate if floating-point drift exhausts the wheel without a hit.
fn choose_case<'a, R: Rng + ?Sized>(
    library: &'a ContentLibrary,
    demographics: Demographics,
    rng: &mut R,
) -> Option<&'a StarterCase> {
    let cases = &library.cases.cases;
    if cases.is_empty() {
        return None;
    }

    let weights: Vec<f64> = cases
        .iter()
        .map(|candidate| case_weight(library, candidate, demographics))
        .collect();
    let total: f64 = weights.iter().sum();
    let mut roll = random_float(rng, 0.0, total);
    for (candidate, weight) in cases.iter().zip(&weights) {
        roll -= weight;
        if roll <= 0.0 {
            return Some(candidate);
        }
    }
    cases.last()
}

const fn wrong_question_range(difficulty: Difficulty) -> (i32, i32) {
    match difficulty {
        Difficulty::Easy => (1, 2),
        Difficulty::Medium => (4, 5),
        Difficulty::Difficult => (5, 6),
    }
}

/// Expand a base case with red herrings and borrowed questions, then
/// shuffle the combined list into presentation order.
fn build_active_case<R: Rng + ?Sized>(
    library: &ContentLibrary,
    base_case: &StarterCase,
    difficulty: Difficulty,
    rng: &mut R,
) -> StarterCase {
    let (min, max) = wrong_question_range(difficulty);
    let wrong_count = random_int(rng, min, max);
    let red_herring_count = library
        .persona
        .red_herrings
        .len()
        .min(usize::try_from(round_f64_to_i32(f64::from(wrong_count) * RED_HERRING_SHARE).max(1)).unwrap_or(1));
    let borrowed_count = usize::try_from(wrong_count).unwrap_or(0).saturating_sub(red_herring_count);

    // Re-key red herrings per case instance so repeat counts never
    // collide across encounters.
    let red_herrings: Vec<InterviewChoice> =
        sample_without_replacement(rng, &library.persona.red_herrings, red_herring_count)
            .into_iter()
            .enumerate()
            .map(|(index, mut choice)| {
                choice.id = format!("{}-{}-{}", choice.id, base_case.id, index);
                choice
            })
            .collect();
    let borrowed = build_borrowed_questions(library, base_case, borrowed_count, rng);

    log::debug!(
        "decoy expansion | case:{} difficulty:{} herrings:{} borrowed:{}",
        base_case.id,
        difficulty,
        red_herrings.len(),
        borrowed.len()
    );

    let mut combined = base_case.interview_choices.clone();
    combined.extend(red_herrings);
    combined.extend(borrowed);

    let mut active = base_case.clone();
    active.interview_choices = shuffle(rng, &combined);
    active
}

/// Borrowed questions carry another case's question text but reveal
/// nothing and answer from the ambiguous reply bank.
fn build_borrowed_questions<R: Rng + ?Sized>(
    library: &ContentLibrary,
    base_case: &StarterCase,
    count: usize,
    rng: &mut R,
) -> Vec<InterviewChoice> {
    let mut foreign_texts: Vec<String> = Vec::new();
    for candidate in &library.cases.cases {
        if candidate.diagnosis_id == base_case.diagnosis_id {
            continue;
        }
        for choice in &candidate.interview_choices {
            if !foreign_texts.contains(&choice.text) {
                foreign_texts.push(choice.text.clone());
            }
        }
    }

    sample_without_replacement(rng, &foreign_texts, count)
        .into_iter()
        .enumerate()
        .map(|(index, text)| InterviewChoice {
            id: format!("borrowed-{}-{}", base_case.id, index),
            text,
            reveal: Vec::new(),
            anxiety_delta: BORROWED_ANXIETY_COST,
            pain_delta: 0,
            responses: library.persona.ambiguous_replies.clone(),
            repeat_responses: library.persona.ambiguous_replies.clone(),
            requires_any: Vec::new(),
            requires_all: Vec::new(),
            note: None,
        })
        .collect()
}

struct Vitals {
    height_cm: i32,
    weight_kg: i32,
    bpm: i32,
    temperature_c: f64,
    bp: String,
}

fn build_vitals<R: Rng + ?Sized>(
    library: &ContentLibrary,
    template: &CasePatientTemplate,
    diagnosis_id: &str,
    demographics: Demographics,
    rng: &mut R,
) -> Vitals {
    let height_cm =
        (template.height_cm + random_int(rng, -4, 4)).clamp(HEIGHT_MIN_CM, HEIGHT_MAX_CM);
    let weight_kg =
        (template.weight_kg + random_int(rng, -7, 7)).clamp(WEIGHT_MIN_KG, WEIGHT_MAX_KG);

    let profile = library
        .diseases
        .find_by_id(diagnosis_id)
        .and_then(|disease| disease.profile.as_ref());

    let Some(profile) = profile else {
        // No vitals profile: jitter around the template baseline.
        return Vitals {
            height_cm,
            weight_kg,
            bpm: (template.bpm + random_int(rng, -5, 6)).clamp(BPM_BASELINE_MIN, BPM_BASELINE_MAX),
            temperature_c: (template.temperature_c + random_float(rng, -0.3, 0.35))
                .clamp(TEMP_MIN_C, TEMP_MAX_C),
            bp: template.bp.clone(),
        };
    };

    let vitals = &profile.vitals;
    let pressure_offset = if demographics.age >= ELDER_AGE_THRESHOLD {
        ELDER_SYSTOLIC_OFFSET
    } else if demographics.age <= YOUTH_AGE_THRESHOLD {
        YOUTH_SYSTOLIC_OFFSET
    } else {
        0.0
    };
    let systolic = round_f64_to_i32(
        random_float(rng, vitals.sys[0], vitals.sys[1]) + pressure_offset,
    )
    .clamp(SYSTOLIC_MIN, SYSTOLIC_MAX);
    let diastolic = round_f64_to_i32(
        random_float(rng, vitals.dia[0], vitals.dia[1]) + pressure_offset * DIASTOLIC_OFFSET_RATIO,
    )
    .clamp(DIASTOLIC_MIN, DIASTOLIC_MAX);

    Vitals {
        height_cm,
        weight_kg,
        bpm: round_f64_to_i32(random_float(rng, vitals.bpm[0], vitals.bpm[1])),
        temperature_c: round_to_tenth(
            random_float(rng, vitals.temp[0], vitals.temp[1]).clamp(TEMP_MIN_C, TEMP_MAX_C),
        ),
        bp: format!("{systolic}/{diastolic}"),
    }
}

fn build_patient_profile<R: Rng + ?Sized>(
    library: &ContentLibrary,
    active_case: &StarterCase,
    demographics: Demographics,
    rng: &mut R,
) -> PatientProfile {
    let bank = &library.persona;
    let first = random_from(rng, &bank.name_pool.first).map_or("Alex", String::as_str);
    let last = random_from(rng, &bank.name_pool.last).map_or("Doe", String::as_str);
    let identity = random_from(rng, &bank.identities)
        .map_or_else(|| "patient".to_string(), Clone::clone);

    let vitals = build_vitals(
        library,
        &active_case.patient,
        &active_case.diagnosis_id,
        demographics,
        rng,
    );

    let complaint_options = bank.complaints_for(&active_case.complaint_categories);
    let complaint = random_from(rng, &complaint_options).map_or_else(
        || {
            if active_case.patient.complaint.is_empty() {
                DEFAULT_COMPLAINT.to_string()
            } else {
                active_case.patient.complaint.clone()
            }
        },
        |text| (*text).to_string(),
    );

    PatientProfile {
        name: format!("{first} {last}"),
        identity,
        age: demographics.age,
        height_cm: vitals.height_cm,
        weight_kg: vitals.weight_kg,
        complaint,
        bp: vitals.bp,
        bpm: vitals.bpm,
        temperature_c: vitals.temperature_c,
    }
}
