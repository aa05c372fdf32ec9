use skinsense_core::catalog::{builtin, Catalog};
use skinsense_core::compose::{aggregate_ingredient_functions, filter_by_category, find_issues};
use skinsense_core::error::SkinSenseError;
use skinsense_core::model::Category;
use std::path::Path;

use crate::output;

pub fn list() -> Result<(), SkinSenseError> {
    println!("Available predefined catalogs:\n");
    for name in builtin::PRESETS {
        let catalog = builtin::load_preset(name)?;
        println!(
            "  {:<10} {} (v{}) [{} ingredients, {} products]",
            name,
            catalog.name,
            catalog.version,
            catalog.ingredients.len(),
            catalog.products.len()
        );
        if let Some(ref desc) = catalog.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str, category: Option<&str>) -> Result<(), SkinSenseError> {
    let catalog = builtin::load_preset(preset)?;

    println!("{} (version {})\n", catalog.name, catalog.version);
    if let Some(ref desc) = catalog.description {
        println!("{}\n", desc);
    }

    match category {
        Some(raw) => {
            let category = Category::from_str_loose(raw).ok_or_else(|| {
                SkinSenseError::CatalogInvalid(format!(
                    "unknown category '{}' (expected humectant, moisturizer, emollient or occlusive)",
                    raw
                ))
            })?;
            let matching: Vec<_> = filter_by_category(&catalog.ingredients, category)
                .into_iter()
                .cloned()
                .collect();
            println!("{}s ({}):\n", category, category.style().blurb);
            output::table::print_ingredients(&matching);
        }
        None => {
            println!("Ingredients:\n");
            output::table::print_ingredients(&catalog.ingredients);
        }
    }

    if category.is_none() && !catalog.products.is_empty() {
        println!("Products:\n");
        output::table::print_products(&catalog.products);
    }

    if category.is_none() && !catalog.routines.is_empty() {
        println!("Routines:\n");
        for routine in &catalog.routines {
            print!("  {}", routine.name);
            match routine.description {
                Some(ref desc) => println!(" -- {}", desc),
                None => println!(),
            }
            for (category, products) in &routine.layers {
                println!("    {:<12} {}", category.to_string(), products.join(", "));
            }
        }
        println!();
    }

    Ok(())
}

pub fn schema() -> Result<(), SkinSenseError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog file lists ingredients with their moisturising function
percentages, products that reference those ingredients, and optional
named routines. `skinsense compose --product` and `skinsense routine
--name` read from a catalog.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog contains
  version       (string, required)  Version identifier (e.g., "2024.1")
  ingredients   (array, optional)   Ingredient records (see below)
  products      (array, optional)   Product records (see below)
  routines      (array, optional)   Named routines (see below)

At least one ingredient or product is required.

Each ingredient:
  name          (string, required)  Unique (case-insensitive) name
  functions     (object, optional)  Map of category -> percentage.
                                    Categories: humectant, moisturizer,
                                    emollient, occlusive. A missing
                                    category contributes 0.
  description   (string, optional)
  benefits, concerns, sources
                (arrays, optional)  Free text, shown only

Each product:
  name            (string, required)   Unique (case-insensitive) name
  primary_type    (string, required)   One of the four categories
  secondary_type  (string, optional)   Different from primary_type
  effectiveness   (integer, required)  Rating from 0 to 100
  classification  (string, optional)   Free-text label
  ingredients     (string, optional)   Label ingredient list as printed
  key_ingredients (array, optional)    Names of catalog ingredients making
                                       up the analysed composition

Each routine:
  name          (string, required)
  description   (string, optional)
  layers        (object, required)  Map of category -> product names

Example:
{{
  "name": "My shelf",
  "version": "1.0",
  "ingredients": [
    {{ "name": "Glycerin", "functions": {{ "humectant": "10" }} }},
    {{ "name": "Petrolatum", "functions": {{ "occlusive": "25" }} }}
  ],
  "products": [
    {{
      "name": "Barrier Balm",
      "primary_type": "occlusive",
      "secondary_type": "humectant",
      "effectiveness": 82,
      "key_ingredients": ["Petrolatum", "Glycerin"]
    }}
  ],
  "routines": [
    {{ "name": "night", "layers": {{ "occlusive": ["Barrier Balm"] }} }}
  ]
}}

Percentages may be quoted decimal strings ("12.5") or bare numbers (12.5).
Quoted strings are kept digit for digit; numbers are read as their
shortest decimal form.

Percentages are summed as given. Totals above 100 are reported as
warnings, or rejected with `skinsense compose --strict`.
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), SkinSenseError> {
    let catalog = skinsense_core::catalog::load_catalog(file)?;

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!("  Ingredients: {}", catalog.ingredients.len());
    println!("  Products: {}", catalog.products.len());
    println!("  Routines: {}", catalog.routines.len());

    // Composition findings are warnings here, not errors
    let mut warnings = Vec::new();
    for product in &catalog.products {
        if product.key_ingredients.is_empty() {
            continue;
        }
        let ingredients = catalog.ingredients_for(product)?;
        let totals = aggregate_ingredient_functions(&ingredients);
        for issue in find_issues(&ingredients, &totals) {
            warnings.push(format!("product '{}': {}", product.name, issue));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
