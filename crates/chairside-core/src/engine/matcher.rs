//! Criteria matcher: runs the rule table over one material.

use std::collections::HashSet;

use crate::models::{CriteriaProfile, MatchOutcome, Material};

use super::rules::{standard_rules, Rule, RuleContext};

/// Evaluate every rule in order and accumulate deltas and messages.
///
/// Rules run unconditionally; there is no short-circuit, and strings are
/// appended in rule order without deduplication.
pub(crate) fn run_rules(
    rules: &[Rule],
    material: &Material,
    profile: &CriteriaProfile,
    already_selected: &HashSet<String>,
) -> MatchOutcome {
    let ctx = RuleContext {
        profile,
        already_selected,
    };

    let mut outcome = MatchOutcome::default();
    for rule in rules {
        let contribution = (rule.eval)(material, &ctx);
        outcome.absorb(MatchOutcome {
            score_delta: contribution.delta,
            reasoning: contribution.reasoning,
            warnings: contribution.warnings,
            alternatives: contribution.alternatives,
        });
    }
    outcome
}

/// Evaluate one material against a criteria profile using the standard rules.
pub fn match_material(
    material: &Material,
    profile: &CriteriaProfile,
    already_selected: &HashSet<String>,
) -> MatchOutcome {
    run_rules(&standard_rules(), material, profile, already_selected)
}
