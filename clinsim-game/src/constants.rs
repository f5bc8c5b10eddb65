//! Centralized balance and tuning constants for the interview core.
//!
//! Keeping them together ensures gameplay can only be adjusted via code
//! changes reviewed in version control, not through external assets.

// Meter range ---------------------------------------------------------------
pub(crate) const STAT_MIN: i32 = 0;
pub(crate) const STAT_MAX: i32 = 100;

// Demographics --------------------------------------------------------------
pub(crate) const PATIENT_AGE_MIN: i32 = 14;
pub(crate) const PATIENT_AGE_MAX: i32 = 84;
pub(crate) const CASE_WEIGHT_FLOOR: f64 = 0.03;

// Vitals synthesis ----------------------------------------------------------
pub(crate) const TEMP_MIN_C: f64 = 35.0;
pub(crate) const TEMP_MAX_C: f64 = 41.5;
pub(crate) const HEIGHT_MIN_CM: i32 = 145;
pub(crate) const HEIGHT_MAX_CM: i32 = 205;
pub(crate) const WEIGHT_MIN_KG: i32 = 42;
pub(crate) const WEIGHT_MAX_KG: i32 = 170;
pub(crate) const BPM_BASELINE_MIN: i32 = 55;
pub(crate) const BPM_BASELINE_MAX: i32 = 140;
pub(crate) const SYSTOLIC_MIN: i32 = 88;
pub(crate) const SYSTOLIC_MAX: i32 = 220;
pub(crate) const DIASTOLIC_MIN: i32 = 50;
pub(crate) const DIASTOLIC_MAX: i32 = 130;
pub(crate) const ELDER_AGE_THRESHOLD: i32 = 60;
pub(crate) const YOUTH_AGE_THRESHOLD: i32 = 20;
pub(crate) const ELDER_SYSTOLIC_OFFSET: f64 = 6.0;
pub(crate) const YOUTH_SYSTOLIC_OFFSET: f64 = -2.0;
pub(crate) const DIASTOLIC_OFFSET_RATIO: f64 = 0.4;

// Decoy expansion -----------------------------------------------------------
pub(crate) const RED_HERRING_SHARE: f64 = 0.4;
pub(crate) const BORROWED_ANXIETY_COST: i32 = 3;

// Dialogue ------------------------------------------------------------------
pub(crate) const GENERIC_REPLY_CHANCE_REPEAT: f64 = 0.5;
pub(crate) const GENERIC_REPLY_CHANCE_YES_NO: f64 = 0.35;
pub(crate) const GENERIC_REPLY_CHANCE_OPEN: f64 = 0.2;
pub(crate) const REPEAT_PENALTY_PER_ASK: i32 = 2;
pub(crate) const REPEAT_PENALTY_CAP: i32 = 10;
pub(crate) const PAIN_JITTER_MIN: i32 = -1;
pub(crate) const PAIN_JITTER_MAX: i32 = 2;
pub(crate) const DEFAULT_REPLY: &str = "Okay.";
pub(crate) const DEFAULT_COMPLAINT: &str = "I am not feeling well.";
