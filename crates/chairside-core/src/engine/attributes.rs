//! Attribute scorer: qualitative descriptor text to an integer scale.
//!
//! Each property key has a keyword ladder, an ordered list of
//! keyword-set→score rungs evaluated by first substring match. A key-specific
//! ladder that matches nothing falls through to the generic ladder, which
//! bottoms out at the moderate default of 2. Absent values score 0; the
//! asymmetry between the two defaults is observed behavior and kept.

use crate::models::PropertyValue;

/// One ladder rung: any of these keywords scores this many points.
type Rung = (&'static [&'static str], u8);

const STRENGTH_LADDER: &[Rung] = &[
    (&["very high"], 4),
    (&["high"], 3),
    (&["moderate"], 2),
    (&["low"], 1),
];

const AESTHETICS_LADDER: &[Rung] = &[
    (&["excellent"], 4),
    (&["good"], 3),
    (&["fair"], 2),
    (&["poor"], 1),
];

const LONGEVITY_LADDER: &[Rung] = &[
    (&["20+", "15+"], 4),
    (&["10-15"], 3),
    (&["5-10"], 2),
    (&["3-5"], 1),
];

// No explicit bottom tier; unmatched values fall through to the generic
// ladder.
const BIOCOMPATIBILITY_LADDER: &[Rung] = &[
    (&["excellent"], 4),
    (&["good"], 3),
    (&["moderate"], 2),
];

const WEAR_RESISTANCE_LADDER: &[Rung] = &[
    (&["excellent"], 4),
    (&["high", "good"], 3),
    (&["moderate"], 2),
    (&["poor", "low"], 1),
];

const GENERIC_LADDER: &[Rung] = &[
    (&["excellent"], 4),
    (&["good", "high"], 3),
    (&["moderate", "fair"], 2),
    (&["poor", "low"], 1),
];

/// Score when a present value matches no ladder rung.
const UNRECOGNIZED_VALUE_SCORE: u8 = 2;

/// Score the descriptor text of one property.
///
/// Absent values and the "N/A" sentinel score 0. List values are joined into
/// one string before matching. `fluoride_release` is a binary
/// beneficial-property rule scoring 3 ("yes") or 1, never 0 for a present
/// value.
pub fn score_attribute(key: &str, value: Option<&PropertyValue>) -> u8 {
    let joined = value.map(|v| v.joined());
    score_text(key, joined.as_deref())
}

/// Same as [`score_attribute`] for pre-joined descriptor text.
pub fn score_text(key: &str, value: Option<&str>) -> u8 {
    let text = match value {
        Some(v) if !v.trim().eq_ignore_ascii_case("n/a") => v.to_lowercase(),
        _ => return 0,
    };

    if key == "fluoride_release" {
        return if text.contains("yes") { 3 } else { 1 };
    }

    if let Some(ladder) = ladder_for(key) {
        if let Some(score) = run_ladder(ladder, &text) {
            return score;
        }
    }

    run_ladder(GENERIC_LADDER, &text).unwrap_or(UNRECOGNIZED_VALUE_SCORE)
}

/// First matching rung wins; ladder order is the required precedence.
fn run_ladder(ladder: &[Rung], text: &str) -> Option<u8> {
    for (keywords, score) in ladder {
        if keywords.iter().any(|k| text.contains(k)) {
            return Some(*score);
        }
    }
    None
}

fn ladder_for(key: &str) -> Option<&'static [Rung]> {
    match key {
        "strength" => Some(STRENGTH_LADDER),
        "aesthetics" => Some(AESTHETICS_LADDER),
        "durability" | "longevity" => Some(LONGEVITY_LADDER),
        "biocompatibility" => Some(BIOCOMPATIBILITY_LADDER),
        "wear_resistance" => Some(WEAR_RESISTANCE_LADDER),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> PropertyValue {
        PropertyValue::Text(s.into())
    }

    #[test]
    fn test_strength_ladder() {
        assert_eq!(score_attribute("strength", Some(&text("Very High"))), 4);
        assert_eq!(score_attribute("strength", Some(&text("high compressive"))), 3);
        assert_eq!(score_attribute("strength", Some(&text("moderate"))), 2);
        assert_eq!(score_attribute("strength", Some(&text("low"))), 1);
    }

    #[test]
    fn test_first_match_wins() {
        // "excellent" outranks "good" because its rung is checked first
        assert_eq!(
            score_attribute("aesthetics", Some(&text("good, sometimes excellent"))),
            4
        );
        // "very high" is checked before the bare "high" substring
        assert_eq!(score_attribute("strength", Some(&text("very high"))), 4);
    }

    #[test]
    fn test_longevity_ranges() {
        assert_eq!(score_attribute("longevity", Some(&text("20+ years"))), 4);
        assert_eq!(score_attribute("durability", Some(&text("15+ years"))), 4);
        assert_eq!(score_attribute("longevity", Some(&text("10-15 years"))), 3);
        assert_eq!(score_attribute("longevity", Some(&text("5-10 years"))), 2);
        assert_eq!(score_attribute("longevity", Some(&text("3-5 years"))), 1);
    }

    #[test]
    fn test_fluoride_release_is_binary() {
        assert_eq!(score_attribute("fluoride_release", Some(&text("Yes"))), 3);
        assert_eq!(score_attribute("fluoride_release", Some(&text("no"))), 1);
        assert_eq!(score_attribute("fluoride_release", Some(&text("sustained"))), 1);
        // Absent still scores 0, the global rule
        assert_eq!(score_attribute("fluoride_release", None), 0);
    }

    #[test]
    fn test_absent_and_sentinel_score_zero() {
        assert_eq!(score_attribute("strength", None), 0);
        assert_eq!(score_attribute("strength", Some(&text("N/A"))), 0);
        assert_eq!(score_attribute("strength", Some(&text(" n/a "))), 0);
    }

    #[test]
    fn test_unrecognized_key_uses_generic_ladder() {
        assert_eq!(score_attribute("polishability", Some(&text("excellent"))), 4);
        assert_eq!(score_attribute("polishability", Some(&text("high"))), 3);
        assert_eq!(score_attribute("polishability", Some(&text("fair"))), 2);
        assert_eq!(score_attribute("polishability", Some(&text("poor"))), 1);
        // Present but unrecognized text defaults to moderate, not zero
        assert_eq!(score_attribute("polishability", Some(&text("glassy"))), 2);
    }

    #[test]
    fn test_biocompatibility_falls_through() {
        assert_eq!(score_attribute("biocompatibility", Some(&text("excellent"))), 4);
        assert_eq!(score_attribute("biocompatibility", Some(&text("moderate"))), 2);
        // No "poor" rung of its own; the generic ladder supplies it
        assert_eq!(score_attribute("biocompatibility", Some(&text("poor"))), 1);
    }

    #[test]
    fn test_list_values_joined_before_matching() {
        let value = PropertyValue::List(vec!["wears well".into(), "Good gloss".into()]);
        assert_eq!(score_attribute("wear_resistance", Some(&value)), 3);
    }
}
