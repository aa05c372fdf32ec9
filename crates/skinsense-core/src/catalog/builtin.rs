use crate::catalog::schema::CatalogDef;
use crate::catalog::validate_catalog;
use crate::error::SkinSenseError;

const SAMPLE_JSON: &str = include_str!("../../../../catalogs/sample.json");
const REFERENCE_JSON: &str = include_str!("../../../../catalogs/reference.json");

/// Available predefined catalogs.
pub const PRESETS: &[&str] = &["sample", "reference"];

/// Load a predefined catalog by name.
pub fn load_preset(name: &str) -> Result<CatalogDef, SkinSenseError> {
    let json = match name {
        "sample" => SAMPLE_JSON,
        "reference" => REFERENCE_JSON,
        _ => {
            return Err(SkinSenseError::CatalogInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let catalog: CatalogDef = serde_json::from_str(json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}
