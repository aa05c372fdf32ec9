pub mod builtin;
pub mod schema;

use crate::error::SkinSenseError;
use crate::model::{Ingredient, Product};
use crate::routine::Routine;
use schema::{CatalogDef, RoutineDef};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Read access to ingredient and product data.
///
/// The aggregation and scoring functions never see a catalog; callers pull
/// what they need through this trait and pass plain slices on.
pub trait Catalog {
    fn ingredients(&self) -> &[Ingredient];

    fn products(&self) -> &[Product];

    fn routines(&self) -> &[RoutineDef] {
        &[]
    }

    /// Case-insensitive ingredient lookup.
    fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients()
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Case-insensitive product lookup.
    fn product(&self, name: &str) -> Option<&Product> {
        self.products()
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Resolve a product's key ingredients, in the product's order.
    fn ingredients_for(&self, product: &Product) -> Result<Vec<Ingredient>, SkinSenseError> {
        product
            .key_ingredients
            .iter()
            .map(|name| {
                self.ingredient(name)
                    .cloned()
                    .ok_or_else(|| SkinSenseError::UnknownIngredient(name.clone()))
            })
            .collect()
    }

    /// Resolve a named routine into full products per layer.
    fn routine(&self, name: &str) -> Result<Routine, SkinSenseError> {
        let def = self
            .routines()
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SkinSenseError::UnknownRoutine(name.to_string()))?;

        let mut routine = Routine {
            name: Some(def.name.clone()),
            ..Routine::default()
        };
        for (&category, names) in &def.layers {
            for product_name in names {
                let product = self
                    .product(product_name)
                    .ok_or_else(|| SkinSenseError::UnknownProduct(product_name.clone()))?;
                routine.add(category, product.clone());
            }
        }
        Ok(routine)
    }
}

impl Catalog for CatalogDef {
    fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    fn products(&self) -> &[Product] {
        &self.products
    }

    fn routines(&self) -> &[RoutineDef] {
        &self.routines
    }
}

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<CatalogDef, SkinSenseError> {
    let content = std::fs::read_to_string(path).map_err(|e| SkinSenseError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<CatalogDef, SkinSenseError> {
    let catalog: CatalogDef =
        serde_json::from_str(json).map_err(|e| SkinSenseError::CatalogLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_catalog(&catalog)?;
    debug!(
        source = %source.display(),
        ingredients = catalog.ingredients.len(),
        products = catalog.products.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<CatalogDef, SkinSenseError> {
    let catalog: CatalogDef = serde_json::from_str(json).map_err(SkinSenseError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
///
/// Percentages are not range-checked here; that is the composition
/// validation policy's job.
pub fn validate_catalog(catalog: &CatalogDef) -> Result<(), SkinSenseError> {
    if catalog.ingredients.is_empty() && catalog.products.is_empty() {
        return Err(SkinSenseError::CatalogInvalid(
            "catalog has neither ingredients nor products".into(),
        ));
    }

    let mut ingredient_names = HashSet::new();
    for ingredient in &catalog.ingredients {
        if ingredient.name.trim().is_empty() {
            return Err(SkinSenseError::CatalogInvalid(
                "ingredient name must not be empty".into(),
            ));
        }
        if !ingredient_names.insert(ingredient.name.to_lowercase()) {
            return Err(SkinSenseError::CatalogInvalid(format!(
                "duplicate ingredient '{}'",
                ingredient.name
            )));
        }
    }

    let mut product_names = HashSet::new();
    for product in &catalog.products {
        if let Some(problem) = product.problem() {
            return Err(SkinSenseError::CatalogInvalid(problem));
        }
        if !product_names.insert(product.name.to_lowercase()) {
            return Err(SkinSenseError::CatalogInvalid(format!(
                "duplicate product '{}'",
                product.name
            )));
        }
        for key in &product.key_ingredients {
            if !ingredient_names.contains(&key.to_lowercase()) {
                return Err(SkinSenseError::CatalogInvalid(format!(
                    "product '{}' references unknown ingredient '{}'",
                    product.name, key
                )));
            }
        }
    }

    let mut routine_names = HashSet::new();
    for routine in &catalog.routines {
        if !routine_names.insert(routine.name.to_lowercase()) {
            return Err(SkinSenseError::CatalogInvalid(format!(
                "duplicate routine '{}'",
                routine.name
            )));
        }
        for (category, names) in &routine.layers {
            for name in names {
                if !product_names.contains(&name.to_lowercase()) {
                    return Err(SkinSenseError::CatalogInvalid(format!(
                        "routine '{}' {} layer references unknown product '{}'",
                        routine.name,
                        category.key(),
                        name
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use rust_decimal_macros::dec;

    const MINIMAL: &str = r#"{
        "name": "Test",
        "version": "1.0",
        "ingredients": [
            { "name": "Glycerin", "functions": { "humectant": "10" } },
            { "name": "Petrolatum", "functions": { "occlusive": "25" } }
        ],
        "products": [
            {
                "name": "Balm",
                "primary_type": "occlusive",
                "effectiveness": 80,
                "key_ingredients": ["Petrolatum", "glycerin"]
            }
        ],
        "routines": [
            { "name": "night", "layers": { "occlusive": ["Balm"] } }
        ]
    }"#;

    #[test]
    fn test_parse_valid_catalog() {
        let catalog = parse_catalog_str(MINIMAL).unwrap();
        assert_eq!(catalog.name, "Test");
        assert_eq!(catalog.ingredients.len(), 2);
        assert_eq!(catalog.products.len(), 1);
    }

    #[test]
    fn test_lookups_ignore_case() {
        let catalog = parse_catalog_str(MINIMAL).unwrap();
        assert!(catalog.ingredient("GLYCERIN").is_some());
        assert!(catalog.product(" balm ").is_some());
        assert!(catalog.product("Lotion").is_none());
    }

    #[test]
    fn test_ingredients_for_product() {
        let catalog = parse_catalog_str(MINIMAL).unwrap();
        let balm = catalog.product("Balm").unwrap();
        let ingredients = catalog.ingredients_for(balm).unwrap();
        assert_eq!(ingredients[0].name, "Petrolatum");
        assert_eq!(ingredients[1].contribution(Category::Humectant), dec!(10));
    }

    #[test]
    fn test_resolve_routine() {
        let catalog = parse_catalog_str(MINIMAL).unwrap();
        let routine = catalog.routine("Night").unwrap();
        assert_eq!(routine.layer(Category::Occlusive)[0].effectiveness, 80);
        assert!(matches!(
            catalog.routine("morning"),
            Err(SkinSenseError::UnknownRoutine(_))
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let json = r#"{ "name": "Empty", "version": "1.0" }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_duplicate_ingredient_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "ingredients": [
                { "name": "Glycerin", "functions": { "humectant": "10" } },
                { "name": "glycerin", "functions": { "humectant": "5" } }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_effectiveness_above_hundred_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "products": [
                { "name": "Balm", "primary_type": "occlusive", "effectiveness": 120 }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_dangling_key_ingredient_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "products": [
                {
                    "name": "Balm",
                    "primary_type": "occlusive",
                    "effectiveness": 80,
                    "key_ingredients": ["Lanolin"]
                }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_routine_with_unknown_product_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "products": [
                { "name": "Balm", "primary_type": "occlusive", "effectiveness": 80 }
            ],
            "routines": [
                { "name": "night", "layers": { "humectant": ["Serum"] } }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_repeated_type_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "products": [
                {
                    "name": "Balm",
                    "primary_type": "occlusive",
                    "secondary_type": "occlusive",
                    "effectiveness": 80
                }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_unknown_category_key_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "ingredients": [
                { "name": "Salicylic Acid", "functions": { "exfoliant": "2" } }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }
}
