pub mod outcome;
pub mod tier;

pub use outcome::{LayerResult, RoutineReport};
pub use tier::{display_percent, effectiveness_tier, star_rating, StarRating, Tier};

use crate::error::SkinSenseError;
use crate::model::{Category, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Products assigned to each routine layer, in application order.
pub type Layers = BTreeMap<Category, Vec<Product>>;

/// A skincare routine: products grouped into the four category layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub layers: Layers,
}

impl Routine {
    /// Products in `category`'s layer; empty when the layer is absent.
    pub fn layer(&self, category: Category) -> &[Product] {
        self.layers
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn add(&mut self, category: Category, product: Product) {
        self.layers.entry(category).or_default().push(product);
    }
}

/// Reject routines whose products cannot be scored, such as an
/// effectiveness above 100.
pub fn validate_routine(routine: &Routine) -> Result<(), SkinSenseError> {
    for (category, products) in &routine.layers {
        for product in products {
            if let Some(problem) = product.problem() {
                return Err(SkinSenseError::InvalidRoutine(format!(
                    "{} layer: {}",
                    category.key(),
                    problem
                )));
            }
        }
    }
    Ok(())
}

/// Parse a routine from JSON and validate it.
pub fn parse_routine(json: &[u8]) -> Result<Routine, SkinSenseError> {
    let routine: Routine = serde_json::from_slice(json)?;
    validate_routine(&routine)?;
    Ok(routine)
}

/// Mean effectiveness of the products in one layer, 0 if there are none.
pub fn layer_effectiveness(products: &[Product]) -> Decimal {
    if products.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = products
        .iter()
        .map(|p| Decimal::from(p.effectiveness))
        .sum();
    sum / Decimal::from(products.len())
}

/// Unweighted mean of all four layer scores.
///
/// Absent or empty layers contribute 0, so a routine with a single populated
/// layer scores at most a quarter of that layer's value.
pub fn overall_effectiveness(layers: &Layers) -> Decimal {
    let sum: Decimal = Category::ALL
        .iter()
        .map(|c| layer_effectiveness(layers.get(c).map(Vec::as_slice).unwrap_or(&[])))
        .sum();
    sum / Decimal::from(Category::ALL.len())
}

/// Score every layer and the routine as a whole.
pub fn score_routine(routine: &Routine) -> RoutineReport {
    let layers: Vec<LayerResult> = Category::ALL
        .into_iter()
        .map(|category| {
            let products = routine.layer(category);
            let effectiveness = layer_effectiveness(products);
            LayerResult {
                category,
                product_count: products.len(),
                effectiveness,
                tier: effectiveness_tier(effectiveness),
                products: products.iter().map(|p| p.name.clone()).collect(),
            }
        })
        .collect();

    let overall = overall_effectiveness(&routine.layers);
    debug!(
        routine = routine.name.as_deref().unwrap_or("unnamed"),
        %overall,
        "scored routine"
    );

    RoutineReport {
        routine_name: routine.name.clone(),
        layers,
        overall_effectiveness: overall,
        overall_tier: effectiveness_tier(overall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(name: &str, category: Category, effectiveness: u8) -> Product {
        Product::new(name, category, effectiveness)
    }

    fn sample_routine() -> Routine {
        let mut r = Routine {
            name: Some("Evening".into()),
            ..Routine::default()
        };
        r.add(Category::Humectant, product("Neutrogena Hydro Boost", Category::Humectant, 85));
        r.add(
            Category::Humectant,
            product("The Ordinary Hyaluronic Acid 2% + B5", Category::Humectant, 92),
        );
        r.add(Category::Moisturizer, product("CeraVe Moisturizing Cream", Category::Moisturizer, 90));
        r.add(
            Category::Emollient,
            product("First Aid Beauty Ultra Repair Cream", Category::Emollient, 78),
        );
        r.add(Category::Occlusive, product("Aquaphor Healing Ointment", Category::Occlusive, 95));
        r.add(Category::Occlusive, product("Eucerin Original Healing Cream", Category::Occlusive, 88));
        r
    }

    #[test]
    fn test_empty_layer_is_zero() {
        assert_eq!(layer_effectiveness(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_layer_mean() {
        let products = vec![
            product("a", Category::Humectant, 80),
            product("b", Category::Humectant, 90),
        ];
        assert_eq!(layer_effectiveness(&products), dec!(85));
    }

    #[test]
    fn test_single_layer_routine_is_quartered() {
        let mut layers = Layers::new();
        layers.insert(Category::Occlusive, vec![product("o", Category::Occlusive, 100)]);
        assert_eq!(overall_effectiveness(&layers), dec!(25));
    }

    #[test]
    fn test_empty_vec_layer_counts_as_zero() {
        let mut layers = Layers::new();
        layers.insert(Category::Humectant, vec![]);
        layers.insert(Category::Moisturizer, vec![product("m", Category::Moisturizer, 80)]);
        assert_eq!(overall_effectiveness(&layers), dec!(20));
    }

    #[test]
    fn test_empty_routine() {
        let report = score_routine(&Routine::default());
        assert_eq!(report.overall_effectiveness, Decimal::ZERO);
        assert_eq!(report.overall_tier, Tier::Poor);
        assert_eq!(report.layers.len(), 4);
        assert_eq!(report.empty_layers().len(), 4);
    }

    #[test]
    fn test_sample_routine_scores() {
        let report = score_routine(&sample_routine());
        assert_eq!(report.layer(Category::Humectant).unwrap().effectiveness, dec!(88.5));
        assert_eq!(report.layer(Category::Moisturizer).unwrap().effectiveness, dec!(90));
        assert_eq!(report.layer(Category::Emollient).unwrap().effectiveness, dec!(78));
        assert_eq!(report.layer(Category::Occlusive).unwrap().effectiveness, dec!(91.5));
        assert_eq!(report.overall_effectiveness, dec!(87));
        assert_eq!(report.overall_tier, Tier::Good);
        assert!(report.empty_layers().is_empty());
    }

    #[test]
    fn test_layers_reported_in_category_order() {
        let report = score_routine(&sample_routine());
        let order: Vec<Category> = report.layers.iter().map(|l| l.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert_eq!(
            report.layer(Category::Occlusive).unwrap().products,
            vec!["Aquaphor Healing Ointment", "Eucerin Original Healing Cream"]
        );
    }

    #[test]
    fn test_routine_json_shape() {
        let json = r#"{
            "name": "Morning",
            "layers": {
                "occlusive": [
                    { "name": "Aquaphor", "primary_type": "occlusive", "effectiveness": 95 }
                ]
            }
        }"#;
        let routine: Routine = serde_json::from_str(json).unwrap();
        assert_eq!(routine.layer(Category::Occlusive).len(), 1);
        assert!(routine.layer(Category::Humectant).is_empty());
        assert_eq!(overall_effectiveness(&routine.layers), dec!(23.75));
    }

    #[test]
    fn test_parse_routine_rejects_out_of_range_effectiveness() {
        let layer = r#"[{ "name": "Hot", "primary_type": "occlusive", "effectiveness": 250 }]"#;
        let json = format!(
            r#"{{ "layers": {{ "humectant": {l}, "moisturizer": {l}, "emollient": {l}, "occlusive": {l} }} }}"#,
            l = layer
        );
        match parse_routine(json.as_bytes()) {
            Err(SkinSenseError::InvalidRoutine(msg)) => assert!(msg.contains("250")),
            other => panic!("expected InvalidRoutine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_routine_accepts_upper_bound() {
        let json = r#"{
            "layers": {
                "occlusive": [
                    { "name": "Aquaphor", "primary_type": "occlusive", "effectiveness": 100 }
                ]
            }
        }"#;
        let routine = parse_routine(json.as_bytes()).unwrap();
        assert_eq!(overall_effectiveness(&routine.layers), dec!(25));
    }
}
