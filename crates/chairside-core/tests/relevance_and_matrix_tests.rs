//! Integration tests for the comparison matrix and the relevance linker.

use chairside_core::compare::{build_comparison_matrix, PropertyCategory, Rating, SortKey};
use chairside_core::models::{
    Material, MaterialCategory, Procedure, ProcedureCategory, PropertyValue,
};
use chairside_core::{rank_related, relevance};

fn amalgam() -> Material {
    let mut m = Material::new(
        "amalgam".into(),
        "Dental Amalgam".into(),
        MaterialCategory::Restorative,
    );
    m.properties
        .insert("strength".into(), PropertyValue::Text("Very High".into()));
    m.properties
        .insert("aesthetics".into(), PropertyValue::Text("Poor".into()));
    m.longevity = Some("10-15 years".into());
    m.cost_considerations = Some("Low".into());
    m
}

fn ceramic() -> Material {
    let mut m = Material::new(
        "ceramic".into(),
        "Feldspathic Ceramic".into(),
        MaterialCategory::Prosthodontic,
    );
    m.properties
        .insert("aesthetics".into(), PropertyValue::Text("Excellent".into()));
    m.properties.insert(
        "fracture_toughness".into(),
        PropertyValue::Text("Moderate".into()),
    );
    m.longevity = Some("5-10 years".into());
    m.cost_considerations = Some("High".into());
    m
}

#[test]
fn test_matrix_scores_missing_properties_as_zero() {
    // Amalgam has no fracture_toughness; the row still carries a cell for it
    let matrix = build_comparison_matrix(&[amalgam(), ceramic()], SortKey::Total);

    let row = matrix
        .rows
        .iter()
        .find(|r| r.property == "fracture_toughness")
        .expect("row for fracture_toughness");
    assert_eq!(row.cells.len(), 2);

    let amalgam_cell = row.cells.iter().find(|c| c.material_id == "amalgam").unwrap();
    assert_eq!(amalgam_cell.score, 0);

    let ceramic_cell = row.cells.iter().find(|c| c.material_id == "ceramic").unwrap();
    assert_eq!(ceramic_cell.score, 2);
}

#[test]
fn test_matrix_row_categories_and_bands() {
    let matrix = build_comparison_matrix(&[amalgam(), ceramic()], SortKey::Total);

    for row in &matrix.rows {
        let expected = match row.property.as_str() {
            "strength" | "fracture_toughness" => PropertyCategory::Physical,
            "aesthetics" => PropertyCategory::Optical,
            "category" | "longevity" | "cost_considerations" => PropertyCategory::Clinical,
            other => panic!("unexpected row {other}"),
        };
        assert_eq!(row.category, expected, "row {}", row.property);

        for cell in &row.cells {
            assert!(!cell.band.is_empty());
        }
    }
}

#[test]
fn test_matrix_totals_and_ratings() {
    let matrix = build_comparison_matrix(&[amalgam(), ceramic()], SortKey::Total);
    assert_eq!(matrix.totals.len(), 2);

    for summary in &matrix.totals {
        assert!(summary.average_score >= 0.0 && summary.average_score <= 4.0);
        // Banding is consistent with the average
        let expected = Rating::from_average(summary.average_score);
        assert_eq!(summary.rating, expected);
    }

    // Sorting by the optical category puts the ceramic first
    let by_optical = build_comparison_matrix(
        &[amalgam(), ceramic()],
        SortKey::Category(PropertyCategory::Optical),
    );
    assert_eq!(by_optical.totals[0].material_id, "ceramic");
}

fn endodontic(id: &str, name: &str, diagnosis: &str) -> Procedure {
    let mut p = Procedure::new(id.into(), name.into(), ProcedureCategory::Endodontic);
    p.diagnosis = diagnosis.into();
    p
}

#[test]
fn test_same_category_no_keyword_overlap_scores_exactly_thirty() {
    let main = endodontic("rct", "Root Canal Treatment", "irreversible pulpitis");
    let candidate = endodontic("apico", "Apicoectomy", "persistent periapical lesion");
    assert_eq!(relevance(&main, &candidate), 30);
}

#[test]
fn test_relevance_orders_related_procedures() {
    let main = endodontic("rct", "Root Canal Treatment", "irreversible pulpitis with abscess");

    let close = endodontic("retreat", "Root Canal Retreatment", "recurrent pulpitis abscess");
    let mut far = Procedure::new(
        "whitening".into(),
        "External Bleaching".into(),
        ProcedureCategory::Preventive,
    );
    far.diagnosis = "discoloration".into();

    let candidates = vec![far.clone(), close.clone()];
    let related = rank_related(&main, &candidates);

    assert_eq!(related[0].procedure.id, "retreat");
    assert!(related[0].score > related[1].score);
    // Labels come from the independent classifier, not the score
    assert_eq!(related[0].relationship, "Alternative treatment");
}
