use skinsense_core::compose;
use skinsense_core::error::SkinSenseError;
use skinsense_core::model::Ingredient;
use std::path::PathBuf;

use crate::commands::CatalogSource;
use crate::config::UserConfig;
use crate::output;

pub fn run(
    config: &UserConfig,
    input_file: Option<PathBuf>,
    product: Option<String>,
    source: CatalogSource,
    strict: bool,
    output_format: Option<&str>,
) -> Result<(), SkinSenseError> {
    let mode = config.validation_mode(strict);
    let format = config.output_format(output_format);

    if let Some(name) = product {
        let catalog = source.load(config)?;
        let analysis = skinsense_core::analyze_product(&catalog, &name, mode)?;
        match format.as_str() {
            "json" => output::json::print(&analysis)?,
            _ => output::table::print_product(&analysis),
        }
        return Ok(());
    }

    let Some(path) = input_file else {
        return Err(SkinSenseError::MissingInput(
            "pass an ingredient file or --product".into(),
        ));
    };
    let json_bytes = std::fs::read(&path)?;
    let ingredients: Vec<Ingredient> = serde_json::from_slice(&json_bytes)?;
    let report = compose::aggregate_checked(&ingredients, mode)?;

    match format.as_str() {
        "json" => output::json::print(&report)?,
        _ => output::table::print_composition(&report),
    }

    Ok(())
}
