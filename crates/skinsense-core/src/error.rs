use crate::compose::CompositionIssue;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SkinSenseError {
    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("unknown product '{0}'")]
    UnknownProduct(String),

    #[error("unknown ingredient '{0}'")]
    UnknownIngredient(String),

    #[error("unknown routine '{0}'")]
    UnknownRoutine(String),

    #[error("invalid routine: {0}")]
    InvalidRoutine(String),

    #[error("composition rejected ({} issue(s)): {}", .0.len(), join_issues(.0))]
    InvalidComposition(Vec<CompositionIssue>),

    #[error("no input given: {0}")]
    MissingInput(String),

    #[error("failed to load config from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_issues(issues: &[CompositionIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
