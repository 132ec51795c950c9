//! Material recommendation engine.
//!
//! Pipeline: Attribute Scorer → Criteria Matcher (rule table) → Ranking
//! Aggregator. Everything here is pure: the engine holds no entity data and
//! receives candidate collections as plain arguments.

mod attributes;
mod matcher;
mod ranking;
mod rules;

pub use attributes::{score_attribute, score_text};
pub use matcher::match_material;
pub use ranking::{rank, DEFAULT_TOP_N};
pub use rules::{standard_rules, Rule, RuleContext, RuleOutcome};

use std::collections::HashSet;

use crate::models::{CriteriaProfile, MatchOutcome, Material, ScoredResult};

/// Recommendation engine with a pluggable rule table.
///
/// [`Recommender::new`] uses the standard rules; [`Recommender::with_rules`]
/// accepts a custom table so individual rules can be swapped or extended
/// without touching the aggregation logic.
pub struct Recommender {
    rules: Vec<Rule>,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

impl Recommender {
    /// Create a recommender with the standard rule table.
    pub fn new() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    /// Create a recommender with a custom rule table.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Evaluate one material against a profile.
    pub fn match_material(
        &self,
        material: &Material,
        profile: &CriteriaProfile,
        already_selected: &HashSet<String>,
    ) -> MatchOutcome {
        matcher::run_rules(&self.rules, material, profile, already_selected)
    }

    /// Rank a candidate set against a profile.
    pub fn rank(
        &self,
        materials: &[Material],
        profile: &CriteriaProfile,
        already_selected: &HashSet<String>,
        top_n: usize,
    ) -> Vec<ScoredResult> {
        ranking::rank_with_rules(&self.rules, materials, profile, already_selected, top_n)
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MaterialCategory;

    #[test]
    fn test_standard_rule_order() {
        let recommender = Recommender::new();
        let names = recommender.rule_names();
        assert_eq!(names.len(), 11);
        assert_eq!(names.first(), Some(&"indication_match"));
        assert_eq!(names.last(), Some(&"already_selected_penalty"));
    }

    #[test]
    fn test_custom_rule_table() {
        fn flat_bonus(_m: &Material, _ctx: &RuleContext) -> RuleOutcome {
            RuleOutcome::reason(7, "House preference".into())
        }

        let recommender = Recommender::with_rules(vec![Rule {
            name: "flat_bonus",
            eval: flat_bonus,
        }]);

        let material = Material::new(
            "gold".into(),
            "Gold Alloy".into(),
            MaterialCategory::Restorative,
        );
        let profile = CriteriaProfile::new("onlay");
        let outcome = recommender.match_material(&material, &profile, &HashSet::new());
        assert_eq!(outcome.score_delta, 7);
        assert_eq!(outcome.reasoning, vec!["House preference"]);
    }
}
