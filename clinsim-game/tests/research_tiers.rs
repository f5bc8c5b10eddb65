//! Research lookup behavior across difficulty tiers on the embedded
//! catalog.

use clinsim_game::{ContentLibrary, Difficulty, Disease, research_diseases};

fn catalog() -> &'static clinsim_game::DiseaseCatalog {
    &ContentLibrary::default_library().diseases
}

fn ids(found: &[&Disease]) -> Vec<String> {
    found.iter().map(|disease| disease.id.clone()).collect()
}

#[test]
fn easy_tier_supersets_medium_supersets_difficult() {
    let terms: Vec<String> = catalog()
        .diseases
        .iter()
        .flat_map(|disease| disease.name.split_whitespace())
        .map(str::to_lowercase)
        .chain(["fever", "ache", "nausea", "chest"].map(str::to_string))
        .collect();
    for term in terms {
        let easy = ids(&research_diseases(catalog(), &term, Difficulty::Easy));
        let medium = ids(&research_diseases(catalog(), &term, Difficulty::Medium));
        let difficult = ids(&research_diseases(catalog(), &term, Difficulty::Difficult));
        for id in &difficult {
            assert!(medium.contains(id), "{term}: {id} in difficult but not medium");
        }
        for id in &medium {
            assert!(easy.contains(id), "{term}: {id} in medium but not easy");
        }
    }
}

#[test]
fn results_are_sorted_by_name() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Difficult] {
        let found = research_diseases(catalog(), "", difficulty);
        assert_eq!(found.len(), catalog().diseases.len());
        for pair in found.windows(2) {
            assert!(
                pair[0].name.to_lowercase() <= pair[1].name.to_lowercase(),
                "{} should sort before {}",
                pair[0].name,
                pair[1].name
            );
        }
    }
}

#[test]
fn name_matches_survive_every_tier() {
    for disease in &catalog().diseases {
        let by_name = research_diseases(catalog(), &disease.name, Difficulty::Difficult);
        assert!(
            by_name.iter().any(|found| found.id == disease.id),
            "{} not found by its own name",
            disease.name
        );
    }
}

#[test]
fn nonsense_query_matches_nothing() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Difficult] {
        assert!(research_diseases(catalog(), "zzzqqxx", difficulty).is_empty());
    }
}
