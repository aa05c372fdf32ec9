use crate::model::Category;
use crate::routine::tier::Tier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Score of one routine layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerResult {
    pub category: Category,
    pub product_count: usize,
    /// Mean product effectiveness, 0 for an empty layer.
    pub effectiveness: Decimal,
    pub tier: Tier,
    /// Product names in application order.
    pub products: Vec<String>,
}

/// Scores for a whole routine. `layers` always holds all four categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_name: Option<String>,
    pub layers: Vec<LayerResult>,
    pub overall_effectiveness: Decimal,
    pub overall_tier: Tier,
}

impl RoutineReport {
    pub fn layer(&self, category: Category) -> Option<&LayerResult> {
        self.layers.iter().find(|l| l.category == category)
    }

    /// Layers with no products assigned.
    pub fn empty_layers(&self) -> Vec<Category> {
        self.layers
            .iter()
            .filter(|l| l.product_count == 0)
            .map(|l| l.category)
            .collect()
    }
}
