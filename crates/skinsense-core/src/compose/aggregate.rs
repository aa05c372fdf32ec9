use crate::compose::outcome::{CategoryBreakdown, CategoryTotals, Contribution};
use crate::model::{Category, Ingredient};
use rust_decimal::Decimal;

/// Sum each category's percentage across `ingredients`.
///
/// Absent categories count as zero. Values are taken as given: negative or
/// out-of-range percentages are summed like any other, and totals are not
/// clamped to 100. Use [`crate::compose::aggregate_checked`] to validate.
pub fn aggregate_ingredient_functions(ingredients: &[Ingredient]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for ingredient in ingredients {
        for (&category, &pct) in &ingredient.functions {
            totals.add(category, pct);
        }
    }
    totals
}

/// Ingredients contributing a non-zero amount to `category`, in input order.
pub fn contributors(ingredients: &[Ingredient], category: Category) -> Vec<Contribution> {
    ingredients
        .iter()
        .filter(|i| i.contributes_to(category))
        .map(|i| Contribution {
            ingredient: i.name.clone(),
            percentage: i.contribution(category),
        })
        .collect()
}

/// Ingredients that serve `category` at all.
pub fn filter_by_category(ingredients: &[Ingredient], category: Category) -> Vec<&Ingredient> {
    ingredients
        .iter()
        .filter(|i| i.contributes_to(category))
        .collect()
}

/// Per-category breakdown for every category with a non-zero total.
pub fn breakdown(ingredients: &[Ingredient], totals: &CategoryTotals) -> Vec<CategoryBreakdown> {
    totals
        .present()
        .into_iter()
        .map(|(category, total)| CategoryBreakdown {
            category,
            total,
            contributors: contributors(ingredients, category),
        })
        .collect()
}

/// Share of the product-card composition bar for its declared types.
///
/// A single type fills the bar. With a secondary type the split is 60/40.
pub fn type_split(primary: Category, secondary: Option<Category>) -> Vec<(Category, Decimal)> {
    match secondary {
        None => vec![(primary, Decimal::ONE_HUNDRED)],
        Some(secondary) => vec![(primary, Decimal::from(60)), (secondary, Decimal::from(40))],
    }
}
