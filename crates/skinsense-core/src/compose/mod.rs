pub mod aggregate;
pub mod outcome;

pub use aggregate::{
    aggregate_ingredient_functions, breakdown, contributors, filter_by_category, type_split,
};
pub use outcome::{
    CategoryBreakdown, CategoryTotals, CompositionIssue, CompositionReport, Contribution,
    ProductAnalysis,
};

use crate::error::SkinSenseError;
use crate::model::Ingredient;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How [`aggregate_checked`] treats out-of-range percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Report issues but keep the raw sums.
    #[default]
    Permissive,
    /// Reject the ingredient set if any issue is found.
    Strict,
}

/// Find negative values, values above 100 and category totals above 100.
pub fn find_issues(ingredients: &[Ingredient], totals: &CategoryTotals) -> Vec<CompositionIssue> {
    let mut issues = Vec::new();

    for ingredient in ingredients {
        for (&category, &value) in &ingredient.functions {
            if value < Decimal::ZERO {
                issues.push(CompositionIssue::NegativePercentage {
                    ingredient: ingredient.name.clone(),
                    category,
                    value,
                });
            } else if value > Decimal::ONE_HUNDRED {
                issues.push(CompositionIssue::PercentageAboveHundred {
                    ingredient: ingredient.name.clone(),
                    category,
                    value,
                });
            }
        }
    }

    for (category, total) in totals.iter() {
        if total > Decimal::ONE_HUNDRED {
            issues.push(CompositionIssue::CategoryTotalAboveHundred { category, total });
        }
    }

    issues
}

/// Aggregate `ingredients` and apply the validation policy.
///
/// In permissive mode the report carries the issues and the raw totals. In
/// strict mode any issue fails the whole set.
pub fn aggregate_checked(
    ingredients: &[Ingredient],
    mode: ValidationMode,
) -> Result<CompositionReport, SkinSenseError> {
    let totals = aggregate_ingredient_functions(ingredients);
    let issues = find_issues(ingredients, &totals);
    debug!(
        ingredients = ingredients.len(),
        issues = issues.len(),
        ?mode,
        "aggregated ingredient functions"
    );

    if !issues.is_empty() {
        match mode {
            ValidationMode::Strict => return Err(SkinSenseError::InvalidComposition(issues)),
            ValidationMode::Permissive => {
                for issue in &issues {
                    warn!("{issue}");
                }
            }
        }
    }

    Ok(CompositionReport {
        breakdown: breakdown(ingredients, &totals),
        totals,
        issues,
    })
}
