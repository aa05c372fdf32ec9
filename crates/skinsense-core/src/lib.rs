pub mod catalog;
pub mod compose;
pub mod error;
pub mod model;
pub mod routine;
pub mod style;

use catalog::Catalog;
use compose::{ProductAnalysis, ValidationMode};
use error::SkinSenseError;
use routine::{Routine, RoutineReport};
use tracing::debug;

/// Analyze the ingredient composition of a catalog product.
///
/// Resolves the product's key ingredients through the catalog, aggregates
/// their function percentages and applies the validation policy.
pub fn analyze_product(
    catalog: &dyn Catalog,
    product_name: &str,
    mode: ValidationMode,
) -> Result<ProductAnalysis, SkinSenseError> {
    let product = catalog
        .product(product_name)
        .ok_or_else(|| SkinSenseError::UnknownProduct(product_name.to_string()))?;

    let ingredients = catalog.ingredients_for(product)?;
    if ingredients.is_empty() {
        debug!(product = %product.name, "product has no structured composition");
    }

    let composition = compose::aggregate_checked(&ingredients, mode)?;

    Ok(ProductAnalysis {
        product: product.clone(),
        type_split: compose::type_split(product.primary_type, product.secondary_type),
        composition,
    })
}

/// Score every layer of a routine and the routine overall.
pub fn analyze_routine(routine: &Routine) -> RoutineReport {
    routine::score_routine(routine)
}
