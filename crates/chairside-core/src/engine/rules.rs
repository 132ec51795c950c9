//! The criteria rule table.
//!
//! Each rule inspects one facet of a material against the profile and
//! returns a signed delta plus the strings that justify it. Rules are
//! evaluated unconditionally, in table order, and their deltas accumulate.
//! No rule excludes a candidate outright; even the contraindication screen
//! only penalizes.

use std::collections::HashSet;

use crate::models::{
    AestheticRequirement, AgeBucket, CostConstraint, CriteriaProfile, Location,
    LongevityExpectation, Material, MaterialCategory, StressLevel,
};

/// Shared inputs for one rule evaluation.
pub struct RuleContext<'a> {
    pub profile: &'a CriteriaProfile,
    /// Ids already picked for side-by-side comparison
    pub already_selected: &'a HashSet<String>,
}

/// Contribution of a single rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    pub delta: i32,
    pub reasoning: Vec<String>,
    pub warnings: Vec<String>,
    pub alternatives: Vec<String>,
}

impl RuleOutcome {
    /// No contribution; the rule did not apply.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Positive or negative delta with a reasoning line.
    pub fn reason(delta: i32, message: String) -> Self {
        Self {
            delta,
            reasoning: vec![message],
            ..Self::default()
        }
    }

    /// Delta with a warning line.
    pub fn warn(delta: i32, message: String) -> Self {
        Self {
            delta,
            warnings: vec![message],
            ..Self::default()
        }
    }

    /// Append an alternatives suggestion.
    pub fn with_alternative(mut self, message: String) -> Self {
        self.alternatives.push(message);
        self
    }

    /// Fold another outcome into this one.
    fn absorb(&mut self, other: RuleOutcome) {
        self.delta += other.delta;
        self.reasoning.extend(other.reasoning);
        self.warnings.extend(other.warnings);
        self.alternatives.extend(other.alternatives);
    }
}

/// A named, independently testable rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub eval: fn(&Material, &RuleContext) -> RuleOutcome,
}

/// The standard rule table, in evaluation order.
pub fn standard_rules() -> Vec<Rule> {
    vec![
        Rule { name: "indication_match", eval: indication_match },
        Rule { name: "location_fit", eval: location_fit },
        Rule { name: "stress_tolerance", eval: stress_tolerance },
        Rule { name: "aesthetic_fit", eval: aesthetic_fit },
        Rule { name: "age_suitability", eval: age_suitability },
        Rule { name: "cost_fit", eval: cost_fit },
        Rule { name: "longevity_fit", eval: longevity_fit },
        Rule { name: "biocompatibility_bonus", eval: biocompatibility_bonus },
        Rule { name: "contraindication_screen", eval: contraindication_screen },
        Rule { name: "category_affinity", eval: category_affinity },
        Rule { name: "already_selected_penalty", eval: already_selected_penalty },
    ]
}

/// Rule 1 (+25): the material is indicated for the requested procedure,
/// either by an indication substring or by name/category heuristics.
fn indication_match(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    let procedure = ctx.profile.procedure_type.to_lowercase();
    if procedure.trim().is_empty() {
        return RuleOutcome::neutral();
    }

    let by_indication = material
        .indications
        .iter()
        .any(|i| i.to_lowercase().contains(&procedure));

    let name = material.name.to_lowercase();
    let by_heuristic = (procedure.contains("crown") && name.contains("crown"))
        || (procedure.contains("restoration")
            && material.category == MaterialCategory::Restorative)
        || (procedure.contains("implant") && material.category == MaterialCategory::Implant);

    if by_indication || by_heuristic {
        RuleOutcome::reason(25, format!("Suitable for {}", ctx.profile.procedure_type))
    } else {
        RuleOutcome::neutral()
    }
}

/// Rule 2: anterior sites want aesthetics, posterior sites want strength.
fn location_fit(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    match ctx.profile.location {
        Location::Anterior => {
            if material.property_contains("aesthetics", &["excellent", "good"]) {
                RuleOutcome::reason(20, "Good aesthetics for an anterior site".into())
            } else {
                RuleOutcome::warn(-10, "Aesthetics may fall short for a visible anterior site".into())
            }
        }
        Location::Posterior => {
            if material.property_contains("strength", &["high", "very high"]) {
                RuleOutcome::reason(20, "Strength suited to posterior load".into())
            } else {
                RuleOutcome::warn(-15, "May lack strength for posterior occlusal load".into())
            }
        }
        Location::Any => RuleOutcome::neutral(),
    }
}

/// Rule 3: high occlusal stress demands high strength.
fn stress_tolerance(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    if ctx.profile.stress_level != StressLevel::High {
        return RuleOutcome::neutral();
    }
    if material.property_contains("strength", &["very high", "high"]) {
        RuleOutcome::reason(15, "Withstands high occlusal stress".into())
    } else {
        RuleOutcome::warn(-20, "Not rated for high occlusal stress".into())
    }
}

/// Rule 4: critical aesthetic requirement.
fn aesthetic_fit(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    if ctx.profile.aesthetic_requirement != AestheticRequirement::Critical {
        return RuleOutcome::neutral();
    }
    if material.property_contains("aesthetics", &["excellent"]) {
        RuleOutcome::reason(15, "Excellent aesthetics for a critical shade match".into())
    } else if material.property_contains("aesthetics", &["good"]) {
        RuleOutcome::reason(8, "Good aesthetics, short of excellent".into()).with_alternative(
            "Consider a material with excellent aesthetics for this critical case".into(),
        )
    } else {
        RuleOutcome::warn(-15, "Aesthetics unlikely to satisfy a critical requirement".into())
    }
}

/// Rule 5: patient-age adjustments.
fn age_suitability(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    match ctx.profile.patient_age {
        AgeBucket::Pediatric => {
            let mut outcome = RuleOutcome::neutral();
            if material.property_contains("fluoride_release", &["yes"]) {
                outcome.absorb(RuleOutcome::reason(
                    10,
                    "Fluoride release benefits a pediatric patient".into(),
                ));
            }
            if material.category == MaterialCategory::Prosthodontic
                && material.name.to_lowercase().contains("crown")
            {
                outcome.absorb(RuleOutcome::warn(
                    -10,
                    "Cast crowns are rarely first choice for pediatric patients".into(),
                ));
            }
            outcome
        }
        AgeBucket::Geriatric => {
            if material.property_contains("biocompatibility", &["excellent"]) {
                RuleOutcome::reason(8, "Excellent biocompatibility for a geriatric patient".into())
            } else {
                RuleOutcome::neutral()
            }
        }
        AgeBucket::Adult => RuleOutcome::neutral(),
    }
}

/// Rule 6: cost constraint against the cost descriptor.
fn cost_fit(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    let cost = match material.cost_text() {
        Some(cost) => cost,
        None => return RuleOutcome::neutral(),
    };
    match ctx.profile.cost_constraint {
        CostConstraint::Budget => {
            if cost.contains("low") || cost.contains("cost-effective") {
                RuleOutcome::reason(15, "Fits a budget-conscious treatment plan".into())
            } else if cost.contains("high") || cost.contains("very high") {
                RuleOutcome::warn(-15, "Cost likely exceeds the stated budget".into())
            } else {
                RuleOutcome::neutral()
            }
        }
        CostConstraint::Premium => {
            if cost.contains("high") || cost.contains("very high") {
                RuleOutcome::reason(10, "Premium option within the stated budget".into())
            } else {
                RuleOutcome::neutral()
            }
        }
        CostConstraint::Moderate => RuleOutcome::neutral(),
    }
}

/// Rule 7: longevity expectation against the longevity descriptor.
fn longevity_fit(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    let longevity = match material.longevity_text() {
        Some(text) => text,
        None => return RuleOutcome::neutral(),
    };
    match ctx.profile.longevity_expectation {
        LongevityExpectation::Long => {
            if longevity.contains("20+") || longevity.contains("15+") {
                RuleOutcome::reason(15, "Longevity matches a long-term expectation".into())
            } else if longevity.contains("10-15") {
                RuleOutcome::reason(8, "Reasonable longevity for a long-term expectation".into())
            } else {
                RuleOutcome::neutral()
            }
        }
        LongevityExpectation::Short => {
            if longevity.contains("3-5") || longevity.contains("5") {
                RuleOutcome::reason(8, "Adequate for a short-term solution".into())
            } else {
                RuleOutcome::neutral()
            }
        }
        LongevityExpectation::Medium => RuleOutcome::neutral(),
    }
}

/// Rule 8 (always evaluated): biocompatibility bonus.
fn biocompatibility_bonus(material: &Material, _ctx: &RuleContext) -> RuleOutcome {
    if material.property_contains("biocompatibility", &["excellent"]) {
        RuleOutcome::reason(10, "Excellent biocompatibility".into())
    } else if material.property_contains("biocompatibility", &["good"]) {
        RuleOutcome::reason(5, "Good biocompatibility".into())
    } else {
        RuleOutcome::neutral()
    }
}

/// Rule 9 (−30): any requested contraindication tag fuzzy-matches one of the
/// material's contraindications. Penalizes, never excludes.
fn contraindication_screen(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    let applies = ctx.profile.contraindications.iter().any(|tag| {
        material
            .contraindications
            .iter()
            .any(|contra| fuzzy_contra_match(tag, contra))
    });
    if applies {
        RuleOutcome::warn(-30, "Has contraindications that may apply to this case".into())
    } else {
        RuleOutcome::neutral()
    }
}

/// Case-insensitive substring in either direction, or first-word match.
fn fuzzy_contra_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.contains(&b) || b.contains(&a) {
        return true;
    }
    match (a.split_whitespace().next(), b.split_whitespace().next()) {
        (Some(first_a), Some(first_b)) => first_a == first_b,
        _ => false,
    }
}

/// Rule 10: category-specific bonus for matching procedure families.
fn category_affinity(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    let procedure = ctx.profile.procedure_type.to_lowercase();
    match material.category {
        MaterialCategory::Restorative if procedure.contains("restoration") => {
            RuleOutcome::reason(10, "Restorative material aligned with the planned restoration".into())
        }
        MaterialCategory::Prosthodontic
            if procedure.contains("crown") || procedure.contains("bridge") =>
        {
            RuleOutcome::reason(10, "Prosthodontic material aligned with crown or bridge work".into())
        }
        MaterialCategory::Implant if procedure.contains("implant") => {
            RuleOutcome::reason(15, "Implant-grade material for implant placement".into())
        }
        _ => RuleOutcome::neutral(),
    }
}

/// Rule 11 (−5): already picked for comparison; stays in the ranking.
fn already_selected_penalty(material: &Material, ctx: &RuleContext) -> RuleOutcome {
    if ctx.already_selected.contains(&material.id) {
        RuleOutcome::reason(-5, "Already selected for comparison".into())
    } else {
        RuleOutcome::neutral()
    }
}
