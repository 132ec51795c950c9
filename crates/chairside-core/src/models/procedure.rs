//! Dental procedure models.

use serde::{Deserialize, Serialize};

/// Clinical category of a procedure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProcedureCategory {
    Restorative,
    Emergency,
    #[serde(rename = "Oral Surgery")]
    OralSurgery,
    Endodontic,
    Periodontal,
    Prosthodontic,
    Orthodontic,
    Preventive,
}

impl ProcedureCategory {
    /// Display name, as it appears in the datasets.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcedureCategory::Restorative => "Restorative",
            ProcedureCategory::Emergency => "Emergency",
            ProcedureCategory::OralSurgery => "Oral Surgery",
            ProcedureCategory::Endodontic => "Endodontic",
            ProcedureCategory::Periodontal => "Periodontal",
            ProcedureCategory::Prosthodontic => "Prosthodontic",
            ProcedureCategory::Orthodontic => "Orthodontic",
            ProcedureCategory::Preventive => "Preventive",
        }
    }
}

/// A single dental procedure record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Procedure {
    /// Unique stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Clinical category
    pub category: ProcedureCategory,
    /// Presenting diagnosis, free text
    #[serde(default)]
    pub diagnosis: String,
    /// Differential diagnoses to rule out
    #[serde(default)]
    pub differential_diagnosis: Vec<String>,
    /// Recommended investigations (radiographs, vitality tests, ...)
    #[serde(default)]
    pub investigations: Vec<String>,
    /// Appropriate use cases
    #[serde(default)]
    pub indications: Vec<String>,
    /// Situations where the procedure must not be performed
    #[serde(default)]
    pub contraindications: Vec<String>,
}

impl Procedure {
    /// Create a new procedure with required fields.
    pub fn new(id: String, name: String, category: ProcedureCategory) -> Self {
        Self {
            id,
            name,
            category,
            diagnosis: String::new(),
            differential_diagnosis: Vec::new(),
            investigations: Vec::new(),
            indications: Vec::new(),
            contraindications: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oral_surgery_serde_name() {
        let json = serde_json::to_string(&ProcedureCategory::OralSurgery).unwrap();
        assert_eq!(json, "\"Oral Surgery\"");

        let parsed: ProcedureCategory = serde_json::from_str("\"Oral Surgery\"").unwrap();
        assert_eq!(parsed, ProcedureCategory::OralSurgery);
    }

    #[test]
    fn test_new_procedure() {
        let procedure = Procedure::new(
            "rct".into(),
            "Root Canal Treatment".into(),
            ProcedureCategory::Endodontic,
        );
        assert_eq!(procedure.name, "Root Canal Treatment");
        assert!(procedure.differential_diagnosis.is_empty());
    }
}
