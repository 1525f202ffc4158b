//! Error types for templates.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while reading, rendering or writing templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render template {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dependency table: {0}")]
    DependencyTable(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Template syntax or evaluation error, carrying the template name and line.
pub type RenderError = minijinja::Error;
