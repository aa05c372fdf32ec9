use skinsense_core::catalog::Catalog;
use skinsense_core::error::SkinSenseError;
use std::path::PathBuf;

use crate::commands::CatalogSource;
use crate::config::UserConfig;
use crate::output;

pub fn run(
    config: &UserConfig,
    input_file: Option<PathBuf>,
    name: Option<String>,
    source: CatalogSource,
    output_format: Option<&str>,
) -> Result<(), SkinSenseError> {
    let routine = match (input_file, name) {
        (Some(path), _) => {
            let json_bytes = std::fs::read(&path)?;
            skinsense_core::routine::parse_routine(&json_bytes)?
        }
        (None, Some(name)) => source.load(config)?.routine(&name)?,
        (None, None) => {
            return Err(SkinSenseError::MissingInput(
                "pass a routine file or --name".into(),
            ))
        }
    };

    let report = skinsense_core::analyze_routine(&routine);

    match config.output_format(output_format).as_str() {
        "json" => output::json::print(&report)?,
        _ => output::table::print_routine(&report),
    }

    Ok(())
}
