//! Relevance linker: relates procedures to one another.
//!
//! Two independent rule tables live here. The numeric relevance score
//! (keyword/category overlap) drives the ordering of related procedures;
//! the relationship label (substring rules over procedure names) only
//! groups them for display. Neither consults the other.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Procedure;

/// Keywords kept per text after filtering.
pub const MAX_KEYWORDS: usize = 10;

/// Tokens this short carry no signal.
const MIN_TOKEN_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "a", "an", "has",
];

/// Extract up to [`MAX_KEYWORDS`] significant words from free text.
///
/// Lower-cases, replaces non-alphanumeric characters with spaces, splits on
/// whitespace runs, drops short tokens and stop words. Original order is
/// preserved; duplicates are not removed.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(token))
        .take(MAX_KEYWORDS)
        .map(String::from)
        .collect()
}

/// Relevance of `candidate` to `main`; higher is closer. Never negative.
pub fn relevance(main: &Procedure, candidate: &Procedure) -> u32 {
    let mut score = 0;

    if main.category == candidate.category {
        score += 30;
    }

    let main_keywords: BTreeSet<String> = extract_keywords(&main.diagnosis).into_iter().collect();
    let candidate_keywords: BTreeSet<String> =
        extract_keywords(&candidate.diagnosis).into_iter().collect();
    let shared = main_keywords.intersection(&candidate_keywords).count() as u32;
    score += 10 * shared;

    for differential in &candidate.differential_diagnosis {
        if main
            .differential_diagnosis
            .iter()
            .any(|m| text_overlaps(m, differential))
        {
            score += 5;
        }
    }

    for investigation in &candidate.investigations {
        if main
            .investigations
            .iter()
            .any(|m| text_overlaps(m, investigation))
        {
            score += 3;
        }
    }

    score
}

/// Case-insensitive substring match in either direction.
fn text_overlaps(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Name-pair substring rules, checked in order: (main, candidate, label).
const RELATIONSHIP_RULES: &[(&str, &str, &str)] = &[
    ("extraction", "implant", "Replacement therapy"),
    ("extraction", "denture", "Replacement therapy"),
    ("extraction", "bridge", "Replacement therapy"),
    ("root canal", "crown", "Protective restoration"),
    ("implant", "bone graft", "Site preparation"),
    ("scaling", "root planing", "Continued periodontal care"),
];

/// Candidate names carrying these are grouped as preventive care.
const PREVENTIVE_HINTS: &[&str] = &["fluoride", "sealant", "prophylaxis", "cleaning"];

/// Display grouping label for a pair of procedures.
///
/// Independent of [`relevance`]; extending one table does not touch the
/// other.
pub fn relationship_label(main: &Procedure, candidate: &Procedure) -> &'static str {
    let main_name = main.name.to_lowercase();
    let candidate_name = candidate.name.to_lowercase();

    for (main_hint, candidate_hint, label) in RELATIONSHIP_RULES {
        if main_name.contains(main_hint) && candidate_name.contains(candidate_hint) {
            return label;
        }
    }

    if PREVENTIVE_HINTS.iter().any(|hint| candidate_name.contains(hint)) {
        return "Preventive care";
    }

    if main.category == candidate.category {
        return "Alternative treatment";
    }

    "Related treatment"
}

/// A related procedure with its relevance score and display grouping.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RelatedProcedure<'a> {
    pub procedure: &'a Procedure,
    pub score: u32,
    pub relationship: &'static str,
}

/// Rank candidates by relevance to `main`, most relevant first.
///
/// `main` itself is excluded; ties keep input order.
pub fn rank_related<'a>(main: &Procedure, candidates: &'a [Procedure]) -> Vec<RelatedProcedure<'a>> {
    let mut related: Vec<RelatedProcedure<'a>> = candidates
        .iter()
        .filter(|candidate| candidate.id != main.id)
        .map(|candidate| RelatedProcedure {
            procedure: candidate,
            score: relevance(main, candidate),
            relationship: relationship_label(main, candidate),
        })
        .collect();

    related.sort_by(|a, b| b.score.cmp(&a.score));
    related
}
