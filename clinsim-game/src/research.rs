//! Research lookup: difficulty-scoped substring search over the disease
//! catalog. Pure and state-independent.

use crate::catalog::{Disease, DiseaseCatalog};
use crate::state::Difficulty;

/// Text up to and including the first sentence terminator, or the whole
/// string when none is present.
fn first_sentence(text: &str) -> &str {
    text.find(['.', '!', '?'])
        .map_or(text, |end| text[..=end].trim())
}

fn matches_query(catalog: &DiseaseCatalog, disease: &Disease, query: &str, difficulty: Difficulty) -> bool {
    if disease.name.to_lowercase().contains(query)
        || first_sentence(&disease.definition).to_lowercase().contains(query)
    {
        return true;
    }
    if matches!(difficulty, Difficulty::Easy | Difficulty::Medium)
        && disease.description.to_lowercase().contains(query)
    {
        return true;
    }
    if difficulty == Difficulty::Easy
        && disease
            .symptom_ids
            .iter()
            .any(|id| catalog.symptom_label(id).to_lowercase().contains(query))
    {
        return true;
    }
    false
}

/// Diseases whose difficulty-scoped searchable text contains the query,
/// sorted by name. Harder tiers search fewer fields; an empty or
/// whitespace-only query matches everything.
#[must_use]
pub fn research_diseases<'a>(
    catalog: &'a DiseaseCatalog,
    search_term: &str,
    difficulty: Difficulty,
) -> Vec<&'a Disease> {
    let query = search_term.trim().to_lowercase();
    let mut found: Vec<&Disease> = catalog
        .diseases
        .iter()
        .filter(|disease| query.is_empty() || matches_query(catalog, disease, &query, difficulty))
        .collect();
    found.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    found
}
