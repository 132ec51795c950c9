//! Criteria profile: the clinical requirements a ranking call scores against.

use serde::{Deserialize, Serialize};

/// Anatomical location of the planned treatment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Anterior,
    Posterior,
    Any,
}

/// Expected occlusal stress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

/// How much the visual result matters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AestheticRequirement {
    Minimal,
    Important,
    Critical,
}

/// Patient age bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AgeBucket {
    Pediatric,
    Adult,
    Geriatric,
}

/// Cost constraint for the treatment plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CostConstraint {
    Budget,
    Moderate,
    Premium,
}

/// How long the result is expected to last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LongevityExpectation {
    Short,
    Medium,
    Long,
}

/// The structured requirements one ranking call scores candidates against.
///
/// Immutable input: the engine never mutates a profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CriteriaProfile {
    /// Free-text procedure type as entered/selected in the UI
    pub procedure_type: String,
    pub location: Location,
    pub stress_level: StressLevel,
    pub aesthetic_requirement: AestheticRequirement,
    pub patient_age: AgeBucket,
    pub cost_constraint: CostConstraint,
    pub longevity_expectation: LongevityExpectation,
    /// Patient contraindication tags (e.g. "mercury allergy")
    #[serde(default)]
    pub contraindications: Vec<String>,
}

impl CriteriaProfile {
    /// Create a profile with neutral selections for every criterion.
    ///
    /// Neutral means the corresponding rules are skipped: any location,
    /// moderate stress/cost, minimal aesthetics, adult patient, medium
    /// longevity, no contraindications.
    pub fn new(procedure_type: impl Into<String>) -> Self {
        Self {
            procedure_type: procedure_type.into(),
            location: Location::Any,
            stress_level: StressLevel::Moderate,
            aesthetic_requirement: AestheticRequirement::Minimal,
            patient_age: AgeBucket::Adult,
            cost_constraint: CostConstraint::Moderate,
            longevity_expectation: LongevityExpectation::Medium,
            contraindications: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Location::Anterior).unwrap(), "\"anterior\"");
        assert_eq!(
            serde_json::to_string(&AestheticRequirement::Critical).unwrap(),
            "\"critical\""
        );

        let parsed: StressLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, StressLevel::High);
    }

    #[test]
    fn test_neutral_profile() {
        let profile = CriteriaProfile::new("crown restoration");
        assert_eq!(profile.procedure_type, "crown restoration");
        assert_eq!(profile.location, Location::Any);
        assert!(profile.contraindications.is_empty());
    }

    #[test]
    fn test_profile_round_trip() {
        let json = r#"{
            "procedure_type": "implant placement",
            "location": "posterior",
            "stress_level": "high",
            "aesthetic_requirement": "important",
            "patient_age": "adult",
            "cost_constraint": "premium",
            "longevity_expectation": "long",
            "contraindications": ["titanium allergy"]
        }"#;
        let profile: CriteriaProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.location, Location::Posterior);
        assert_eq!(profile.contraindications, vec!["titanium allergy"]);
    }
}
