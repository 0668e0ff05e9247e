//! Presentation mappings for counselor-facing views.

use sana_core::models::dimension::Dimension;
use sana_core::models::result::IndividualResult;
use sana_core::models::risk::ColorToken;
use sana_core::models::variant::Variant;

use crate::catalog;

/// Human-readable dimension name.
pub fn display_name(dimension: Dimension) -> &'static str {
    dimension.display_name()
}

/// Color band for one dimension score: red at or below the at-risk bound,
/// amber at or below the moderate bound, green above.
pub fn display_color(dimension_score: u32, variant: Variant) -> ColorToken {
    let bounds = catalog::config_for(variant).dimension;
    if dimension_score <= bounds.at_risk_max {
        ColorToken::Red
    } else if dimension_score <= bounds.moderate_max {
        ColorToken::Amber
    } else {
        ColorToken::Green
    }
}

/// Format a scored result as structured text for inclusion in a counselor
/// report draft.
pub fn structured_summary(result: &IndividualResult) -> String {
    let mut output = format!("## Well-Being Profile ({})\n\n", result.variant.key());
    for dimension in Dimension::ALL {
        let score = result.dimension_scores.get(dimension);
        let flag = if result.at_risk_dimensions.contains(&dimension) {
            " (at risk)"
        } else {
            ""
        };
        output.push_str(&format!("- {}: {score}{flag}\n", dimension.display_name()));
    }
    output.push_str(&format!(
        "\nOverall: {} ({})\n",
        result.overall_score,
        result.overall_risk.display_name()
    ));
    output
}
