//! Generated project manifest (`package.json`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use scaffy_config::{Bundler, Configuration, ScaffoldMode};

use crate::error::{TemplateError, TemplateResult};

/// File name of the generated project's manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Version every synthesized manifest starts at.
pub const INITIAL_VERSION: &str = "0.1.0";

/// Where a run's dependency lists come from. Exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestSource {
    /// The template roots ship a complete `package.json`.
    Template,
    /// A `package.json` is synthesized and packages come from the
    /// dependency table.
    Table,
}

impl ManifestSource {
    pub fn for_mode(mode: ScaffoldMode) -> Self {
        match mode {
            ScaffoldMode::Minimal => ManifestSource::Template,
            ScaffoldMode::Legacy => ManifestSource::Table,
        }
    }
}

/// Script section of a synthesized manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestScripts {
    pub dev: String,
    pub build: String,
    pub serve: String,
}

impl ManifestScripts {
    pub fn for_bundler(bundler: Bundler) -> Self {
        match bundler {
            Bundler::Vite => Self {
                dev: "vite".to_string(),
                build: "vite build".to_string(),
                serve: "vite preview".to_string(),
            },
            Bundler::Webpack => Self {
                dev: "webpack serve".to_string(),
                build: "webpack --mode production".to_string(),
                serve: "webpack serve --mode production".to_string(),
            },
        }
    }
}

/// Synthesized `package.json`. Dependencies are not listed here; the
/// package manager records them when the explicit install runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    pub scripts: ManifestScripts,
}

impl PackageManifest {
    /// Build the manifest for a configuration.
    pub fn synthesize(config: &Configuration) -> Self {
        Self {
            name: config.project_name().to_string(),
            version: INITIAL_VERSION.to_string(),
            private: true,
            module_type: match config.bundler() {
                Bundler::Vite => Some("module".to_string()),
                Bundler::Webpack => None,
            },
            scripts: ManifestScripts::for_bundler(config.bundler()),
        }
    }

    pub fn to_json(&self) -> TemplateResult<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write into `dir`, replacing any manifest a template root provided.
    pub fn write_to(&self, dir: &Path) -> TemplateResult<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        if path.exists() {
            warn!("Replacing template-provided {:?} with synthesized manifest", path);
        }

        fs::write(&path, self.to_json()?).map_err(|e| TemplateError::Write {
            path: path.clone(),
            source: e,
        })?;
        info!("Wrote manifest {:?}", path);
        Ok(path)
    }
}
