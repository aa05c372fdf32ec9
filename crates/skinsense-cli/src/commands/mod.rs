pub mod catalog;
pub mod compose;
pub mod routine;
pub mod tier;

use crate::config::UserConfig;
use skinsense_core::catalog::builtin;
use skinsense_core::catalog::schema::CatalogDef;
use skinsense_core::error::SkinSenseError;
use std::path::PathBuf;

/// Where a command reads its catalog from.
pub struct CatalogSource {
    file: Option<PathBuf>,
    preset: Option<String>,
}

impl CatalogSource {
    pub fn new(file: Option<PathBuf>, preset: Option<String>) -> Self {
        Self { file, preset }
    }

    /// Load the catalog: --catalog, then --preset, then the configured
    /// catalog file, then the "sample" preset.
    pub fn load(&self, config: &UserConfig) -> Result<CatalogDef, SkinSenseError> {
        if let Some(ref path) = self.file {
            return skinsense_core::catalog::load_catalog(path);
        }
        if let Some(ref preset) = self.preset {
            return builtin::load_preset(preset);
        }
        match config.catalog {
            Some(ref path) => skinsense_core::catalog::load_catalog(path),
            None => builtin::load_preset("sample"),
        }
    }
}
