use std::collections::BTreeMap;

use sana_core::models::dimension::Dimension;
use sana_core::models::result::DimensionScores;
use sana_core::models::risk::{ColorToken, RiskLevel};
use sana_core::models::variant::Variant;
use sana_instruments::classify::RiskClassifier;
use sana_instruments::{at_risk_dimensions, catalog, classify_overall, display, score};

#[test]
fn short_form_overall_boundaries() {
    assert_eq!(classify_overall(111, Variant::Short), RiskLevel::AtRisk);
    assert_eq!(classify_overall(112, Variant::Short), RiskLevel::Moderate);
    assert_eq!(classify_overall(181, Variant::Short), RiskLevel::Moderate);
    assert_eq!(classify_overall(182, Variant::Short), RiskLevel::Healthy);
}

#[test]
fn long_form_overall_boundaries() {
    assert_eq!(classify_overall(223, Variant::Long), RiskLevel::AtRisk);
    assert_eq!(classify_overall(224, Variant::Long), RiskLevel::Moderate);
    assert_eq!(classify_overall(363, Variant::Long), RiskLevel::Moderate);
    assert_eq!(classify_overall(364, Variant::Long), RiskLevel::Healthy);
}

#[test]
fn classification_is_monotonic_in_the_overall_score() {
    for variant in Variant::ALL {
        let min = variant.item_count() as u32;
        let max = min * 6;
        let mut previous = classify_overall(min, variant);
        for overall in min..=max {
            let tier = classify_overall(overall, variant);
            assert!(
                tier <= previous,
                "tier worsened from {previous:?} to {tier:?} at {overall}"
            );
            previous = tier;
        }
    }
}

#[test]
fn dimension_at_risk_boundaries() {
    let short = RiskClassifier::for_variant(Variant::Short);
    assert!(short.dimension_at_risk(18));
    assert!(!short.dimension_at_risk(19));

    let long = RiskClassifier::for_variant(Variant::Long);
    assert!(long.dimension_at_risk(36));
    assert!(!long.dimension_at_risk(37));
}

#[test]
fn at_risk_dimensions_never_downgrade_the_overall_tier() {
    // One dimension at its floor, the other five at their ceiling: the
    // overall score classifies healthy even though a dimension is flagged.
    let responses: BTreeMap<u32, u8> = catalog::items_for(Variant::Short)
        .iter()
        .map(|item| {
            let low = item.dimension == Dimension::PurposeInLife;
            let value = if low != item.reverse_scored { 1 } else { 6 };
            (item.id, value)
        })
        .collect();

    let result = score(&responses, Variant::Short).unwrap();
    assert_eq!(result.dimension_scores.purpose_in_life, 7);
    assert_eq!(result.overall_score, 7 + 5 * 42);
    assert_eq!(result.overall_risk, RiskLevel::Healthy);
    assert_eq!(
        result.at_risk_dimensions.into_iter().collect::<Vec<_>>(),
        vec![Dimension::PurposeInLife]
    );
}

#[test]
fn at_risk_dimensions_helper_matches_the_classifier() {
    let scores = DimensionScores {
        autonomy: 18,
        environmental_mastery: 19,
        personal_growth: 7,
        positive_relations: 42,
        purpose_in_life: 30,
        self_acceptance: 18,
    };
    let flagged = at_risk_dimensions(&scores, Variant::Short);
    assert_eq!(flagged.len(), 3);
    assert!(flagged.contains(&Dimension::Autonomy));
    assert!(flagged.contains(&Dimension::PersonalGrowth));
    assert!(flagged.contains(&Dimension::SelfAcceptance));
    assert!(!flagged.contains(&Dimension::EnvironmentalMastery));
}

#[test]
fn display_colors_follow_the_dimension_bands() {
    assert_eq!(display::display_color(7, Variant::Short), ColorToken::Red);
    assert_eq!(display::display_color(18, Variant::Short), ColorToken::Red);
    assert_eq!(display::display_color(19, Variant::Short), ColorToken::Amber);
    assert_eq!(display::display_color(30, Variant::Short), ColorToken::Amber);
    assert_eq!(display::display_color(31, Variant::Short), ColorToken::Green);

    assert_eq!(display::display_color(36, Variant::Long), ColorToken::Red);
    assert_eq!(display::display_color(37, Variant::Long), ColorToken::Amber);
    assert_eq!(display::display_color(60, Variant::Long), ColorToken::Amber);
    assert_eq!(display::display_color(61, Variant::Long), ColorToken::Green);
}

#[test]
fn display_names_are_stable() {
    assert_eq!(
        display::display_name(Dimension::PositiveRelations),
        "Positive Relations with Others"
    );
    assert_eq!(
        display::display_name(Dimension::SelfAcceptance),
        "Self-Acceptance"
    );
}

#[test]
fn structured_summary_lists_every_dimension_and_flags_risk() {
    let responses: BTreeMap<u32, u8> = catalog::items_for(Variant::Short)
        .iter()
        .map(|item| (item.id, if item.reverse_scored { 6 } else { 1 }))
        .collect();
    let result = score(&responses, Variant::Short).unwrap();

    let summary = display::structured_summary(&result);
    assert!(summary.contains("## Well-Being Profile (ryff_42)"));
    for dimension in Dimension::ALL {
        assert!(summary.contains(dimension.display_name()));
    }
    assert!(summary.contains("- Autonomy: 7 (at risk)"));
    assert!(summary.contains("Overall: 42 (At Risk)"));
}
