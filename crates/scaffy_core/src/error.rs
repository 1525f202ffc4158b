//! Error types for a scaffold run.

use std::path::PathBuf;

use scaffy_config::ConfigError;
use scaffy_runner::RunnerError;
use scaffy_templates::{RenderError, TemplateError};
use thiserror::Error;

/// Result type alias for scaffold operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Every way a scaffold run can stop.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("No package manager found: install pnpm (`npm install -g pnpm`) or npm")]
    NoPackageManagerFound,

    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render template {path}: {source}")]
    TemplateRender {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    #[error("Failed to write {path}: {source}")]
    FilesystemWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Install failed: `{command}` {reason}")]
    InstallFailed { command: String, reason: String },

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Manifest error: {0}")]
    Manifest(String),
}

impl ScaffoldError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScaffoldError::UserCancelled)
    }

    /// Whether the failure came from reading or rendering templates.
    pub fn is_template_error(&self) -> bool {
        matches!(
            self,
            ScaffoldError::TemplateRead { .. } | ScaffoldError::TemplateRender { .. }
        )
    }

    /// Whether the failure came from the package manager step.
    pub fn is_install_error(&self) -> bool {
        matches!(
            self,
            ScaffoldError::NoPackageManagerFound | ScaffoldError::InstallFailed { .. }
        )
    }
}

impl From<ConfigError> for ScaffoldError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UserCancelled => ScaffoldError::UserCancelled,
            other => ScaffoldError::Prompt(other.to_string()),
        }
    }
}

impl From<RunnerError> for ScaffoldError {
    fn from(err: RunnerError) -> Self {
        match err {
            RunnerError::NoPackageManagerFound => ScaffoldError::NoPackageManagerFound,
            RunnerError::InstallFailed { command, reason } => {
                ScaffoldError::InstallFailed { command, reason }
            }
        }
    }
}

impl From<TemplateError> for ScaffoldError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::RootNotFound(path) => ScaffoldError::TemplateRead {
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "template root does not exist",
                ),
                path,
            },
            TemplateError::Read { path, source } => ScaffoldError::TemplateRead { path, source },
            TemplateError::Render { path, source } => {
                ScaffoldError::TemplateRender { path, source }
            }
            TemplateError::Write { path, source } => ScaffoldError::FilesystemWrite { path, source },
            TemplateError::DependencyTable(e) => ScaffoldError::Manifest(e.to_string()),
            TemplateError::Json(e) => ScaffoldError::Manifest(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_maps_through() {
        let err: ScaffoldError = ConfigError::UserCancelled.into();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_missing_root_is_read_error() {
        let err: ScaffoldError = TemplateError::RootNotFound(PathBuf::from("templates/vue/base")).into();
        match err {
            ScaffoldError::TemplateRead { path, .. } => {
                assert_eq!(path, PathBuf::from("templates/vue/base"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_runner_errors() {
        let err: ScaffoldError = RunnerError::NoPackageManagerFound.into();
        assert!(err.is_install_error());

        let err: ScaffoldError = RunnerError::InstallFailed {
            command: "npm install".into(),
            reason: "exited with code 1".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Install failed: `npm install` exited with code 1");
    }
}
