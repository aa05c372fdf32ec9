use crate::model::{Category, Ingredient, Product};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog of ingredients, products and named routines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routines: Vec<RoutineDef>,
}

/// A routine stored by reference: product names per layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub layers: BTreeMap<Category, Vec<String>>,
}
