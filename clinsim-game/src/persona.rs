//! Persona pools: names, identities, decoy questions, ambiguous replies
//! and the complaint banks keyed by category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::cases::InterviewChoice;

const DEFAULT_PERSONA_DATA: &str = include_str!("../data/persona.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NamePool {
    #[serde(default)]
    pub first: Vec<String>,
    #[serde(default)]
    pub last: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonaBank {
    #[serde(default)]
    pub name_pool: NamePool,
    #[serde(default)]
    pub identities: Vec<String>,
    #[serde(default)]
    pub red_herrings: Vec<InterviewChoice>,
    #[serde(default)]
    pub ambiguous_replies: Vec<String>,
    #[serde(default)]
    pub complaint_pools: BTreeMap<String, Vec<String>>,
}

impl PersonaBank {
    /// Create an empty bank (useful for tests).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            name_pool: NamePool {
                first: Vec::new(),
                last: Vec::new(),
            },
            identities: Vec::new(),
            red_herrings: Vec::new(),
            ambiguous_replies: Vec::new(),
            complaint_pools: BTreeMap::new(),
        }
    }

    /// Load persona pools from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid persona data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_PERSONA_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_bank() -> &'static Self {
        static BANK: OnceLock<PersonaBank> = OnceLock::new();
        BANK.get_or_init(Self::load_from_static)
    }

    /// Pooled complaint texts for a set of categories, in category order.
    #[must_use]
    pub fn complaints_for(&self, categories: &[String]) -> Vec<&str> {
        categories
            .iter()
            .filter_map(|category| self.complaint_pools.get(category))
            .flatten()
            .map(String::as_str)
            .filter(|text| !text.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bank_parses_embedded_data() {
        let bank = PersonaBank::default_bank();
        assert!(!bank.name_pool.first.is_empty());
        assert!(!bank.name_pool.last.is_empty());
        assert!(!bank.identities.is_empty());
        assert!(bank.red_herrings.len() >= 4);
        assert!(!bank.ambiguous_replies.is_empty());
        // Decoys must never reveal symptoms.
        for herring in &bank.red_herrings {
            assert!(herring.reveal.is_empty(), "{} reveals symptoms", herring.id);
        }
    }

    #[test]
    fn complaints_for_pools_by_category() {
        let bank = PersonaBank::default_bank();
        let pooled = bank.complaints_for(&["chest".to_string(), "gi".to_string()]);
        assert!(!pooled.is_empty());

        let none = bank.complaints_for(&["no-such-category".to_string()]);
        assert!(none.is_empty());
    }

    #[test]
    fn empty_bank_has_no_pools() {
        let bank = PersonaBank::empty();
        assert!(bank.complaints_for(&["chest".to_string()]).is_empty());
    }
}
