//! Ranking aggregator: totals, category sub-scores, sort, truncate.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{CategoryScores, CriteriaProfile, Material, ScoredResult};

use super::attributes::{score_attribute, score_text};
use super::matcher::run_rules;
use super::rules::{standard_rules, Rule};

/// Number of results callers typically ask for.
pub const DEFAULT_TOP_N: usize = 6;

/// Upper bound for the normalized category sub-scores.
const CATEGORY_SCORE_CAP: u8 = 5;

/// Rank materials against a criteria profile.
///
/// Deterministic: the sort is stable and descending on `total_score`, so
/// equal-scoring materials keep their input order. The result is truncated
/// to `top_n`.
pub fn rank(
    materials: &[Material],
    profile: &CriteriaProfile,
    already_selected: &HashSet<String>,
    top_n: usize,
) -> Vec<ScoredResult> {
    rank_with_rules(&standard_rules(), materials, profile, already_selected, top_n)
}

pub(crate) fn rank_with_rules(
    rules: &[Rule],
    materials: &[Material],
    profile: &CriteriaProfile,
    already_selected: &HashSet<String>,
    top_n: usize,
) -> Vec<ScoredResult> {
    debug!(
        candidates = materials.len(),
        top_n,
        procedure = %profile.procedure_type,
        "ranking material candidates"
    );

    let mut results: Vec<ScoredResult> = materials
        .iter()
        .map(|material| {
            let outcome = run_rules(rules, material, profile, already_selected);
            ScoredResult {
                material_id: material.id.clone(),
                material_name: material.name.clone(),
                total_score: outcome.score_delta,
                category_scores: category_scores(material),
                reasoning: outcome.reasoning,
                warnings: outcome.warnings,
                alternatives: outcome.alternatives,
            }
        })
        .collect();

    results.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    results.truncate(top_n);
    results
}

/// Fixed category sub-scores, each clamped to [0, 5].
fn category_scores(material: &Material) -> CategoryScores {
    CategoryScores {
        clinical: clamp(score_attribute(
            "biocompatibility",
            material.properties.get("biocompatibility"),
        )),
        cost: clamp(score_text(
            "cost_considerations",
            material.cost_considerations.as_deref(),
        )),
        longevity: clamp(score_text("longevity", material.longevity.as_deref())),
    }
}

fn clamp(score: u8) -> u8 {
    score.min(CATEGORY_SCORE_CAP)
}
