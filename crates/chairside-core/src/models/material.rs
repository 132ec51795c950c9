//! Dental material models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Clinical category of a material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaterialCategory {
    Restorative,
    Prosthodontic,
    Implant,
    Endodontic,
    Periodontal,
    Orthodontic,
}

impl MaterialCategory {
    /// Display name, as it appears in the datasets.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialCategory::Restorative => "Restorative",
            MaterialCategory::Prosthodontic => "Prosthodontic",
            MaterialCategory::Implant => "Implant",
            MaterialCategory::Endodontic => "Endodontic",
            MaterialCategory::Periodontal => "Periodontal",
            MaterialCategory::Orthodontic => "Orthodontic",
        }
    }
}

/// A qualitative property value: one descriptor or a list of descriptors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    List(Vec<String>),
}

impl PropertyValue {
    /// Join list values into a single descriptor string.
    pub fn joined(&self) -> String {
        match self {
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::List(items) => items.join(" "),
        }
    }
}

/// A single dental material record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    /// Unique stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Clinical category
    pub category: MaterialCategory,
    /// Qualitative properties keyed by property name (e.g. "strength")
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
    /// Appropriate use cases
    #[serde(default)]
    pub indications: Vec<String>,
    /// Situations where the material must not be used
    #[serde(default)]
    pub contraindications: Vec<String>,
    /// Expected service life descriptor (e.g. "15+ years")
    #[serde(default)]
    pub longevity: Option<String>,
    /// Cost descriptor (e.g. "low cost-effective option")
    #[serde(default)]
    pub cost_considerations: Option<String>,
}

impl Material {
    /// Create a new material with required fields.
    pub fn new(id: String, name: String, category: MaterialCategory) -> Self {
        Self {
            id,
            name,
            category,
            properties: BTreeMap::new(),
            indications: Vec::new(),
            contraindications: Vec::new(),
            longevity: None,
            cost_considerations: None,
        }
    }

    /// Lower-cased descriptor text for a property, list values joined.
    pub fn property_text(&self, key: &str) -> Option<String> {
        self.properties.get(key).map(|v| v.joined().to_lowercase())
    }

    /// Check whether a property's text contains any of the given keywords.
    pub fn property_contains(&self, key: &str, keywords: &[&str]) -> bool {
        match self.property_text(key) {
            Some(text) => keywords.iter().any(|k| text.contains(k)),
            None => false,
        }
    }

    /// Lower-cased longevity descriptor, falling back to the `durability`
    /// property when the record has no dedicated longevity field.
    pub fn longevity_text(&self) -> Option<String> {
        self.longevity
            .as_ref()
            .map(|s| s.to_lowercase())
            .or_else(|| self.property_text("durability"))
    }

    /// Lower-cased cost descriptor.
    pub fn cost_text(&self) -> Option<String> {
        self.cost_considerations.as_ref().map(|s| s.to_lowercase())
    }
}
