use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Moisturising function of an ingredient, product or routine layer.
///
/// Variant order is the display order used throughout: humectant first,
/// occlusive last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Humectant,
    Moisturizer,
    Emollient,
    Occlusive,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Humectant,
        Category::Moisturizer,
        Category::Emollient,
        Category::Occlusive,
    ];

    /// Lowercase key as used in catalog and routine files.
    pub fn key(self) -> &'static str {
        match self {
            Category::Humectant => "humectant",
            Category::Moisturizer => "moisturizer",
            Category::Emollient => "emollient",
            Category::Occlusive => "occlusive",
        }
    }

    /// Case-insensitive parse that also accepts plurals ("Occlusives").
    pub fn from_str_loose(s: &str) -> Option<Category> {
        let lower = s.trim().to_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        Category::ALL.into_iter().find(|c| c.key() == singular)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Humectant => write!(f, "Humectant"),
            Category::Moisturizer => write!(f, "Moisturizer"),
            Category::Emollient => write!(f, "Emollient"),
            Category::Occlusive => write!(f, "Occlusive"),
        }
    }
}

/// Category -> percentage contribution. A missing key means zero.
pub type FunctionMap = BTreeMap<Category, Decimal>;

/// Accepts percentages written either as decimal strings ("12.5") or as
/// bare JSON numbers (12.5). Serialization keeps the string form.
fn deserialize_function_map<'de, D>(deserializer: D) -> Result<FunctionMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<Category, Percentage>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(category, pct)| (category, pct.0)).collect())
}

struct Percentage(Decimal);

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PercentageVisitor)
    }
}

struct PercentageVisitor;

impl<'de> Visitor<'de> for PercentageVisitor {
    type Value = Percentage;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a percentage as a decimal string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Percentage, E> {
        Decimal::from_str(v.trim())
            .map(Percentage)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Percentage, E> {
        Ok(Percentage(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Percentage, E> {
        Ok(Percentage(Decimal::from(v)))
    }

    // Shortest round-trip text of the float, so 12.5 stays exactly 12.5
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Percentage, E> {
        Decimal::from_str(&v.to_string())
            .map(Percentage)
            .map_err(|_| E::invalid_value(Unexpected::Float(v), &self))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_function_map")]
    pub functions: FunctionMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concerns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: FunctionMap::new(),
            description: None,
            benefits: Vec::new(),
            concerns: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_function(mut self, category: Category, pct: Decimal) -> Self {
        self.functions.insert(category, pct);
        self
    }

    /// Contribution to `category`, zero when absent.
    pub fn contribution(&self, category: Category) -> Decimal {
        self.functions
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Whether the ingredient contributes a non-zero amount to `category`.
    pub fn contributes_to(&self, category: Category) -> bool {
        !self.contribution(category).is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub classification: String,
    /// Label ingredient list as printed on the packaging.
    #[serde(default)]
    pub ingredients: String,
    pub primary_type: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_type: Option<Category>,
    /// Rating in 0..=100, unrelated to ingredient composition percentages.
    pub effectiveness: u8,
    /// Catalog ingredient names making up the structured composition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_ingredients: Vec<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, primary_type: Category, effectiveness: u8) -> Self {
        Self {
            name: name.into(),
            image: None,
            classification: String::new(),
            ingredients: String::new(),
            primary_type,
            secondary_type: None,
            effectiveness,
            key_ingredients: Vec::new(),
        }
    }

    /// Describe what makes this record unusable for scoring, if anything.
    pub fn problem(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("product name must not be empty".into());
        }
        if self.effectiveness > 100 {
            return Some(format!(
                "product '{}' has effectiveness {} (expected 0-100)",
                self.name, self.effectiveness
            ));
        }
        if self.secondary_type == Some(self.primary_type) {
            return Some(format!(
                "product '{}' repeats its primary type as secondary type",
                self.name
            ));
        }
        None
    }
}
