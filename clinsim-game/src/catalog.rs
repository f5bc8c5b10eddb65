//! Static disease catalog and symptom-label table.
//!
//! Built once from embedded JSON and shared by reference; never mutated
//! after construction, so it is safe to share across concurrent encounters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

const DEFAULT_DISEASE_DATA: &str = include_str!("../data/diseases.json");

/// Multipliers applied per sex assigned at birth when weighting cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SexBias {
    #[serde(default = "default_bias")]
    pub f: f64,
    #[serde(default = "default_bias")]
    pub m: f64,
}

impl Default for SexBias {
    fn default() -> Self {
        Self { f: 1.0, m: 1.0 }
    }
}

/// Gaussian age preference plus sex bias for a disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicsProfile {
    pub age_peak: f64,
    pub age_spread: f64,
    #[serde(default)]
    pub sex_bias: SexBias,
}

/// Plausible vitals ranges, each as an inclusive `[lo, hi]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsProfile {
    pub temp: [f64; 2],
    pub bpm: [f64; 2],
    pub sys: [f64; 2],
    pub dia: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseProfile {
    pub demographics: DemographicsProfile,
    pub vitals: VitalsProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: String,
    pub name: String,
    pub tier: u8,
    pub definition: String,
    pub description: String,
    #[serde(default)]
    pub treatment: Option<String>,
    #[serde(default)]
    pub symptom_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub profile: Option<DiseaseProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DiseaseCatalog {
    #[serde(default)]
    pub diseases: Vec<Disease>,
    #[serde(default)]
    pub symptom_labels: BTreeMap<String, String>,
}

impl DiseaseCatalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            diseases: Vec::new(),
            symptom_labels: BTreeMap::new(),
        }
    }

    /// Load the catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a disease catalog.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_DISEASE_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<DiseaseCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Disease> {
        self.diseases.iter().find(|disease| disease.id == id)
    }

    /// Human label for a symptom id, falling back to the raw id.
    #[must_use]
    pub fn symptom_label<'a>(&'a self, symptom_id: &'a str) -> &'a str {
        self.symptom_labels
            .get(symptom_id)
            .map_or(symptom_id, String::as_str)
    }
}

fn default_bias() -> f64 {
    1.0
}
