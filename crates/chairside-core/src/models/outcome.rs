//! Scored output types for the recommendation engine.

use serde::{Deserialize, Serialize};

/// Result of evaluating one material against a criteria profile.
///
/// Every non-zero delta is accompanied by at least one reasoning, warning,
/// or alternatives string; a score change is never applied silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchOutcome {
    /// Signed sum of all rule deltas (may be negative)
    pub score_delta: i32,
    /// Human-readable justifications, in rule order
    pub reasoning: Vec<String>,
    /// Cautions, in rule order
    pub warnings: Vec<String>,
    /// Suggested substitutions, in rule order
    pub alternatives: Vec<String>,
}

impl MatchOutcome {
    /// Fold another outcome into this one, preserving order.
    pub fn absorb(&mut self, other: MatchOutcome) {
        self.score_delta += other.score_delta;
        self.reasoning.extend(other.reasoning);
        self.warnings.extend(other.warnings);
        self.alternatives.extend(other.alternatives);
    }
}

/// Per-category sub-scores for a ranked material, each in [0, 5].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryScores {
    pub clinical: u8,
    pub cost: u8,
    pub longevity: u8,
}

/// One entry in a ranked recommendation list.
///
/// Created fresh per ranking call and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredResult {
    pub material_id: String,
    pub material_name: String,
    pub total_score: i32,
    pub category_scores: CategoryScores,
    pub reasoning: Vec<String>,
    pub warnings: Vec<String>,
    pub alternatives: Vec<String>,
}
