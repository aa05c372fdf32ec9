//! User-level configuration for skinsense
//!
//! Supports loading config from:
//! - ~/.config/skinsense/config.toml
//! - Environment variables (SKINSENSE_OUTPUT, SKINSENSE_STRICT)
//!
//! Command-line flags override both.

use serde::{Deserialize, Serialize};
use skinsense_core::compose::ValidationMode;
use skinsense_core::error::SkinSenseError;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    /// Default output format: "table" or "json"
    pub output: Option<String>,

    /// Reject out-of-range composition percentages instead of warning
    pub strict: Option<bool>,

    /// Catalog file used when no --catalog/--preset is given
    pub catalog: Option<PathBuf>,
}

impl UserConfig {
    /// Load config with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/skinsense/config.toml)
    pub fn load() -> Result<Self, SkinSenseError> {
        let mut config = UserConfig::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            config.merge(Self::from_file(&path)?);
        }

        config.apply_env(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Override fields from SKINSENSE_* variables looked up through `lookup`.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(output) = lookup("SKINSENSE_OUTPUT") {
            self.output = Some(output);
        }
        if let Some(strict) = lookup("SKINSENSE_STRICT").and_then(|v| parse_bool(&v)) {
            self.strict = Some(strict);
        }
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skinsense").join("config.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, SkinSenseError> {
        let content = std::fs::read_to_string(path).map_err(|e| SkinSenseError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| SkinSenseError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded user config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.strict.is_some() {
            self.strict = other.strict;
        }
        if other.catalog.is_some() {
            self.catalog = other.catalog;
        }
    }

    /// Output format, with a command-line flag taking precedence.
    pub fn output_format(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| "table".to_string())
    }

    /// Validation mode; `--strict` always wins.
    pub fn validation_mode(&self, strict_flag: bool) -> ValidationMode {
        if strict_flag || self.strict.unwrap_or(false) {
            ValidationMode::Strict
        } else {
            ValidationMode::Permissive
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_parse_toml() {
        let config = UserConfig::from_toml_str(
            r#"
            output = "json"
            strict = true
            catalog = "/srv/skinsense/shelf.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.as_deref(), Some("json"));
        assert_eq!(config.strict, Some(true));
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/skinsense/shelf.json")));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = UserConfig::from_toml_str("").unwrap();
        assert!(config.output.is_none());
        assert_eq!(config.output_format(None), "table");
        assert_eq!(config.validation_mode(false), ValidationMode::Permissive);
    }

    #[test]
    fn test_flags_override_config() {
        let config = UserConfig {
            output: Some("json".into()),
            strict: Some(false),
            catalog: None,
        };
        assert_eq!(config.output_format(Some("table")), "table");
        assert_eq!(config.output_format(None), "json");
        assert_eq!(config.validation_mode(true), ValidationMode::Strict);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut base = UserConfig {
            output: Some("json".into()),
            strict: None,
            catalog: None,
        };
        base.merge(UserConfig {
            output: None,
            strict: Some(true),
            catalog: None,
        });
        assert_eq!(base.output.as_deref(), Some("json"));
        assert_eq!(base.strict, Some(true));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = UserConfig::from_toml_str("output = \"table\"\nstrict = false").unwrap();
        config.apply_env(env(&[("SKINSENSE_OUTPUT", "json"), ("SKINSENSE_STRICT", "yes")]));
        assert_eq!(config.output_format(None), "json");
        assert_eq!(config.validation_mode(false), ValidationMode::Strict);
        assert_eq!(config.output_format(Some("table")), "table");
    }

    #[test]
    fn test_unparseable_strict_env_is_ignored() {
        let mut config = UserConfig {
            output: None,
            strict: Some(true),
            catalog: None,
        };
        config.apply_env(env(&[("SKINSENSE_STRICT", "sometimes")]));
        assert_eq!(config.strict, Some(true));
        assert!(config.output.is_none());
    }
}
