use crate::model::Category;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-category percentage sums over a set of ingredients.
///
/// Raw sums: nothing is normalized or clamped, so a total may exceed 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub humectant: Decimal,
    pub moisturizer: Decimal,
    pub emollient: Decimal,
    pub occlusive: Decimal,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> Decimal {
        match category {
            Category::Humectant => self.humectant,
            Category::Moisturizer => self.moisturizer,
            Category::Emollient => self.emollient,
            Category::Occlusive => self.occlusive,
        }
    }

    pub fn add(&mut self, category: Category, pct: Decimal) {
        let slot = match category {
            Category::Humectant => &mut self.humectant,
            Category::Moisturizer => &mut self.moisturizer,
            Category::Emollient => &mut self.emollient,
            Category::Occlusive => &mut self.occlusive,
        };
        *slot += pct;
    }

    /// All four categories with their totals, in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Categories with a non-zero total, in category order.
    pub fn present(&self) -> Vec<(Category, Decimal)> {
        self.iter().filter(|(_, total)| !total.is_zero()).collect()
    }
}

/// One ingredient's share of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub ingredient: String,
    pub percentage: Decimal,
}

/// Ingredients contributing to a single category, with the category total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total: Decimal,
    pub contributors: Vec<Contribution>,
}

/// Data-quality finding on an ingredient set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompositionIssue {
    NegativePercentage {
        ingredient: String,
        category: Category,
        value: Decimal,
    },
    PercentageAboveHundred {
        ingredient: String,
        category: Category,
        value: Decimal,
    },
    CategoryTotalAboveHundred { category: Category, total: Decimal },
}

impl fmt::Display for CompositionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionIssue::NegativePercentage {
                ingredient,
                category,
                value,
            } => write!(f, "{ingredient}: negative {category} percentage {value}"),
            CompositionIssue::PercentageAboveHundred {
                ingredient,
                category,
                value,
            } => write!(f, "{ingredient}: {category} percentage {value} > 100"),
            CompositionIssue::CategoryTotalAboveHundred { category, total } => {
                write!(f, "{category} total {total} > 100")
            }
        }
    }
}

/// Aggregation result together with the issues found by the validation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionReport {
    pub totals: CategoryTotals,
    /// One entry per category with a non-zero total.
    pub breakdown: Vec<CategoryBreakdown>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<CompositionIssue>,
}

/// Composition analysis of one catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAnalysis {
    pub product: crate::model::Product,
    /// Composition bar shares derived from the declared product types.
    pub type_split: Vec<(Category, Decimal)>,
    pub composition: CompositionReport,
}
