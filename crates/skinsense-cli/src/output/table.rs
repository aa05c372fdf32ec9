use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use skinsense_core::compose::{CompositionReport, ProductAnalysis};
use skinsense_core::model::{Category, Ingredient, Product};
use skinsense_core::routine::{display_percent, star_rating, RoutineReport};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Text progress bar. Values are clamped to 0..=100 for drawing only.
fn bar(pct: Decimal) -> String {
    let clamped = pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (clamped * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn format_composition(report: &CompositionReport) -> String {
    let mut out = String::new();

    if report.breakdown.is_empty() {
        let _ = writeln!(out, "  No function contributions recorded.\n");
        return out;
    }

    for part in &report.breakdown {
        let style = part.category.style();
        let _ = writeln!(
            out,
            "  {:<12} {} {:>6}%  ({})",
            style.label,
            bar(part.total),
            part.total.normalize(),
            style.blurb
        );
        let names: Vec<String> = part
            .contributors
            .iter()
            .map(|c| format!("{} ({}%)", c.ingredient, c.percentage.normalize()))
            .collect();
        let _ = writeln!(out, "               {}", names.join(", "));
    }
    let _ = writeln!(out);

    if !report.issues.is_empty() {
        let _ = writeln!(out, "  Warnings:");
        for issue in &report.issues {
            let _ = writeln!(out, "    - {issue}");
        }
        let _ = writeln!(out);
    }

    out
}

pub fn print_composition(report: &CompositionReport) {
    println!("=== Ingredient Function Analysis ===\n");
    print!("{}", format_composition(report));
}

pub fn print_product(analysis: &ProductAnalysis) {
    let product = &analysis.product;
    println!("=== {} ===\n", product.name);
    if !product.classification.is_empty() {
        println!("  {}", product.classification);
    }

    let types: Vec<String> = analysis
        .type_split
        .iter()
        .map(|(c, share)| format!("{} {}%", c, share))
        .collect();
    println!("  Type: {}", types.join(" / "));
    println!(
        "  Effectiveness: {}% {} ({})\n",
        product.effectiveness,
        star_rating(Decimal::from(product.effectiveness)),
        skinsense_core::routine::effectiveness_tier(Decimal::from(product.effectiveness))
    );

    print!("{}", format_composition(&analysis.composition));

    if !product.ingredients.is_empty() {
        println!("  Label: {}\n", product.ingredients);
    }
}

pub fn format_routine(report: &RoutineReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "  Overall: {}% ({})\n",
        display_percent(report.overall_effectiveness),
        report.overall_tier
    );

    // Application order: occlusive seals last, so it is listed on top
    for layer in report.layers.iter().rev() {
        let style = layer.category.style();
        let _ = writeln!(
            out,
            "  {:<12} {} {:>4}%  {:<9} {} product(s)",
            style.label,
            bar(layer.effectiveness),
            display_percent(layer.effectiveness),
            layer.tier.to_string(),
            layer.product_count
        );
        for name in &layer.products {
            let _ = writeln!(out, "               - {name}");
        }
    }
    let _ = writeln!(out);

    let empty = report.empty_layers();
    if !empty.is_empty() {
        let names: Vec<&str> = empty.iter().map(|c| c.key()).collect();
        let _ = writeln!(
            out,
            "  Empty layers count as 0%: {}\n",
            names.join(", ")
        );
    }

    out
}

pub fn print_routine(report: &RoutineReport) {
    match report.routine_name {
        Some(ref name) => println!("=== Routine: {} ===\n", name),
        None => println!("=== Routine ===\n"),
    }
    print!("{}", format_routine(report));
}

pub fn print_ingredients(ingredients: &[Ingredient]) {
    if ingredients.is_empty() {
        println!("  (none)\n");
        return;
    }

    let max_name = ingredients.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for ingredient in ingredients {
        let functions: Vec<String> = Category::ALL
            .iter()
            .filter(|c| ingredient.contributes_to(**c))
            .map(|c| format!("{} {}%", c.key(), ingredient.contribution(*c).normalize()))
            .collect();
        println!(
            "  {:<width$}  {}",
            ingredient.name,
            functions.join(", "),
            width = max_name
        );
    }
    println!();
}

pub fn print_products(products: &[Product]) {
    let max_name = products.iter().map(|p| p.name.len()).max().unwrap_or(10);

    for product in products {
        let types = match product.secondary_type {
            Some(secondary) => format!("{} / {}", product.primary_type, secondary),
            None => product.primary_type.to_string(),
        };
        println!(
            "  {:<width$}  {:>3}% {}  {}",
            product.name,
            product.effectiveness,
            star_rating(Decimal::from(product.effectiveness)),
            types,
            width = max_name
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinsense_core::compose::{aggregate_checked, ValidationMode};
    use skinsense_core::model::Product;
    use skinsense_core::routine::{score_routine, Routine};

    #[test]
    fn test_bar() {
        assert_eq!(bar(Decimal::ZERO), format!("[{}]", "-".repeat(20)));
        assert_eq!(bar(Decimal::from(50)), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(bar(Decimal::from(170)), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn test_composition_lists_contributors() {
        let set = vec![
            Ingredient::new("Petrolatum").with_function(Category::Occlusive, Decimal::from(25)),
            Ingredient::new("Dimethicone").with_function(Category::Occlusive, Decimal::from(5)),
        ];
        let report = aggregate_checked(&set, ValidationMode::Permissive).unwrap();
        let text = format_composition(&report);
        assert!(text.contains("Occlusive"));
        assert!(text.contains("30%"));
        assert!(text.contains("Petrolatum (25%), Dimethicone (5%)"));
        assert!(!text.contains("Humectant"));
    }

    #[test]
    fn test_routine_mentions_empty_layers() {
        let mut routine = Routine::default();
        routine.add(
            Category::Occlusive,
            Product::new("Aquaphor Healing Ointment", Category::Occlusive, 100),
        );
        let text = format_routine(&score_routine(&routine));
        assert!(text.contains("Overall: 25% (poor)"));
        assert!(text.contains("humectant, moisturizer, emollient"));
        assert!(text.contains("- Aquaphor Healing Ointment"));
    }
}
