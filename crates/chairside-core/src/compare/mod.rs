//! Comparison matrix: side-by-side property scoring for a set of materials.
//!
//! Every material is scored against the full union of property keys, so a
//! material that lacks a property still gets a row entry (scored 0 via the
//! absent-value default) rather than being dropped from the row.

use serde::Serialize;

use crate::engine::score_text;
use crate::models::Material;

/// Display category a property row belongs to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Physical,
    Biological,
    Clinical,
    Optical,
}

/// Sort order for the per-material totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Total,
    Category(PropertyCategory),
}

/// Overall rating band for a material's average score.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl Rating {
    /// Band an average score.
    pub fn from_average(average: f64) -> Self {
        if average >= 3.5 {
            Rating::Excellent
        } else if average >= 2.5 {
            Rating::Good
        } else if average >= 1.5 {
            Rating::Moderate
        } else {
            Rating::Poor
        }
    }
}

/// One material's score for one property row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonCell {
    pub material_id: String,
    pub score: u8,
    /// Display color hint for the UI
    pub band: &'static str,
}

/// One property row across all compared materials.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonRow {
    pub property: String,
    pub category: PropertyCategory,
    pub cells: Vec<ComparisonCell>,
}

/// Per-category average scores for one material.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct CategoryAverages {
    pub physical: f64,
    pub biological: f64,
    pub clinical: f64,
    pub optical: f64,
}

impl CategoryAverages {
    fn get(&self, category: PropertyCategory) -> f64 {
        match category {
            PropertyCategory::Physical => self.physical,
            PropertyCategory::Biological => self.biological,
            PropertyCategory::Clinical => self.clinical,
            PropertyCategory::Optical => self.optical,
        }
    }
}

/// Aggregate view of one material across the whole matrix.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MaterialSummary {
    pub material_id: String,
    pub material_name: String,
    pub average_score: f64,
    pub category_averages: CategoryAverages,
    pub rating: Rating,
}

/// The full comparison matrix.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonMatrix {
    pub rows: Vec<ComparisonRow>,
    pub totals: Vec<MaterialSummary>,
}

/// Keys synthesized into every matrix beyond the material property maps.
const SYNTHETIC_KEYS: &[&str] = &["category", "longevity", "cost_considerations"];

/// Build the comparison matrix for a set of materials.
///
/// Property rows appear in first-seen order across the input, followed by
/// the synthetic keys; totals are sorted descending by `sort_key`.
pub fn build_comparison_matrix(materials: &[Material], sort_key: SortKey) -> ComparisonMatrix {
    let keys = property_union(materials);

    let rows: Vec<ComparisonRow> = keys
        .iter()
        .map(|key| ComparisonRow {
            property: key.clone(),
            category: classify_property(key),
            cells: materials
                .iter()
                .map(|material| {
                    let score = score_text(key, row_value(material, key).as_deref());
                    ComparisonCell {
                        material_id: material.id.clone(),
                        score,
                        band: display_band(score),
                    }
                })
                .collect(),
        })
        .collect();

    let mut totals: Vec<MaterialSummary> = materials
        .iter()
        .enumerate()
        .map(|(index, material)| summarize(material, index, &rows))
        .collect();

    totals.sort_by(|a, b| {
        sort_value(b, sort_key)
            .partial_cmp(&sort_value(a, sort_key))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ComparisonMatrix { rows, totals }
}

/// Union of property keys in first-seen order, then the synthetic keys.
fn property_union(materials: &[Material]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for material in materials {
        for key in material.properties.keys() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.clone());
            }
        }
    }
    for key in SYNTHETIC_KEYS {
        if !keys.iter().any(|k| k == key) {
            keys.push((*key).to_string());
        }
    }
    keys
}

/// Descriptor text feeding one cell.
fn row_value(material: &Material, key: &str) -> Option<String> {
    match key {
        "category" => Some(material.category.as_str().to_string()),
        "longevity" => material.longevity.clone(),
        "cost_considerations" => material.cost_considerations.clone(),
        _ => material.properties.get(key).map(|v| v.joined()),
    }
}

/// Fixed property→category lookup; unclassified keys default to physical.
fn classify_property(key: &str) -> PropertyCategory {
    match key {
        "strength" | "durability" | "wear_resistance" | "polishability"
        | "fracture_toughness" => PropertyCategory::Physical,
        "biocompatibility" | "fluoride_release" => PropertyCategory::Biological,
        "longevity" | "cost_considerations" | "category" => PropertyCategory::Clinical,
        "aesthetics" | "translucency" | "color_stability" | "radiopacity" => {
            PropertyCategory::Optical
        }
        _ => PropertyCategory::Physical,
    }
}

/// Display color hint for a cell score.
fn display_band(score: u8) -> &'static str {
    match score {
        4 => "green",
        3 => "teal",
        2 => "amber",
        _ => "red",
    }
}

fn summarize(material: &Material, index: usize, rows: &[ComparisonRow]) -> MaterialSummary {
    let mut total = 0u32;
    let mut per_category = [(0u32, 0u32); 4]; // (sum, count)

    for row in rows {
        let score = u32::from(row.cells[index].score);
        total += score;
        let slot = match row.category {
            PropertyCategory::Physical => 0,
            PropertyCategory::Biological => 1,
            PropertyCategory::Clinical => 2,
            PropertyCategory::Optical => 3,
        };
        per_category[slot].0 += score;
        per_category[slot].1 += 1;
    }

    let mean = |(sum, count): (u32, u32)| {
        if count == 0 {
            0.0
        } else {
            f64::from(sum) / f64::from(count)
        }
    };

    let average_score = if rows.is_empty() {
        0.0
    } else {
        f64::from(total) / rows.len() as f64
    };

    MaterialSummary {
        material_id: material.id.clone(),
        material_name: material.name.clone(),
        average_score,
        category_averages: CategoryAverages {
            physical: mean(per_category[0]),
            biological: mean(per_category[1]),
            clinical: mean(per_category[2]),
            optical: mean(per_category[3]),
        },
        rating: Rating::from_average(average_score),
    }
}

fn sort_value(summary: &MaterialSummary, key: SortKey) -> f64 {
    match key {
        SortKey::Total => summary.average_score,
        SortKey::Category(category) => summary.category_averages.get(category),
    }
}
