//! Fuzzy catalog search over material and procedure names.
//!
//! The dashboard's search box tolerates typos: exact and substring matches
//! on a name score full confidence, everything else falls back to a combined
//! string-similarity metric against the name and indications.

use serde::Serialize;
use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::{Material, Procedure};

/// Minimum confidence for a hit to be returned.
const MIN_CONFIDENCE: f64 = 0.45;

/// Which collection a hit came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Material,
    Procedure,
}

/// One search result.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub kind: EntryKind,
    pub confidence: f64,
}

/// Search view over the entity collections.
pub struct SearchIndex<'a> {
    materials: &'a [Material],
    procedures: &'a [Procedure],
}

impl<'a> SearchIndex<'a> {
    /// Create a search index over borrowed collections.
    pub fn new(materials: &'a [Material], procedures: &'a [Procedure]) -> Self {
        Self {
            materials,
            procedures,
        }
    }

    /// Find the closest entries to `query`, best first, at most `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = Vec::new();

        for material in self.materials {
            let confidence = score_entry(&query, &material.name, &material.indications);
            if confidence >= MIN_CONFIDENCE {
                hits.push(SearchHit {
                    id: material.id.clone(),
                    name: material.name.clone(),
                    kind: EntryKind::Material,
                    confidence,
                });
            }
        }
        for procedure in self.procedures {
            let confidence = score_entry(&query, &procedure.name, &procedure.indications);
            if confidence >= MIN_CONFIDENCE {
                hits.push(SearchHit {
                    id: procedure.id.clone(),
                    name: procedure.name.clone(),
                    kind: EntryKind::Procedure,
                    confidence,
                });
            }
        }

        hits.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);
        hits
    }
}

/// Score one entry against an already-lowercased query.
fn score_entry(query: &str, name: &str, indications: &[String]) -> f64 {
    let name_lower = name.to_lowercase();
    if name_lower.contains(query) {
        return 1.0;
    }

    let name_similarity = fuzzy_match(query, &name_lower);
    let indication_similarity = indications
        .iter()
        .map(|i| fuzzy_match(query, &i.to_lowercase()))
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0);

    name_similarity.max(indication_similarity)
}

/// Compute fuzzy string similarity using combined metrics.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler favors shared prefixes (good for typos), Levenshtein
    // tracks overall similarity
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    jw * 0.6 + lev * 0.4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MaterialCategory, ProcedureCategory};

    fn catalog() -> (Vec<Material>, Vec<Procedure>) {
        let mut amalgam = Material::new(
            "amalgam".into(),
            "Dental Amalgam".into(),
            MaterialCategory::Restorative,
        );
        amalgam.indications = vec!["Posterior restorations".into()];

        let composite = Material::new(
            "composite".into(),
            "Composite Resin".into(),
            MaterialCategory::Restorative,
        );

        let rct = Procedure::new(
            "rct".into(),
            "Root Canal Treatment".into(),
            ProcedureCategory::Endodontic,
        );

        (vec![amalgam, composite], vec![rct])
    }

    #[test]
    fn test_substring_match_scores_full_confidence() {
        let (materials, procedures) = catalog();
        let index = SearchIndex::new(&materials, &procedures);

        let hits = index.search("amalgam", 10);
        assert_eq!(hits[0].id, "amalgam");
        assert_eq!(hits[0].confidence, 1.0);
        assert_eq!(hits[0].kind, EntryKind::Material);
    }

    #[test]
    fn test_typo_still_finds_entry() {
        let (materials, procedures) = catalog();
        let index = SearchIndex::new(&materials, &procedures);

        let hits = index.search("composit resin", 10);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].id, "composite");
        assert!(hits[0].confidence > 0.8);
    }

    #[test]
    fn test_indications_are_searched() {
        let (materials, procedures) = catalog();
        let index = SearchIndex::new(&materials, &procedures);

        let hits = index.search("posterior restorations", 10);
        assert!(hits.iter().any(|h| h.id == "amalgam"));
    }

    #[test]
    fn test_blank_query_and_limit() {
        let (materials, procedures) = catalog();
        let index = SearchIndex::new(&materials, &procedures);

        assert!(index.search("   ", 10).is_empty());

        let hits = index.search("r", 1);
        assert!(hits.len() <= 1);
    }

    #[test]
    fn test_fuzzy_match_behaves() {
        assert!(fuzzy_match("amalgam", "amalgam") > 0.99);
        assert!(fuzzy_match("amalgm", "amalgam") > 0.85); // typo
        assert!(fuzzy_match("amalgam", "zirconia") < 0.5);
    }
}
