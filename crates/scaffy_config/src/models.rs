//! Configuration record and choice enumerations.
//!
//! Every choice the operator can make is drawn from a closed enumeration,
//! so a malformed answer cannot be represented. The [`Configuration`]
//! serializes with camelCase field names; that serialized form is the
//! substitution context handed to templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A value that can be offered to the operator as a menu entry.
pub trait Choice: Copy {
    /// Label shown in the menu.
    fn label(&self) -> &'static str;
}

/// UI framework of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Framework::React, Framework::Vue]
    }
}

impl Choice for Framework {
    fn label(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue 3",
        }
    }
}

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Language::JavaScript, Language::TypeScript]
    }
}

impl Choice for Language {
    fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }
}

/// Styling approach of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssFramework {
    Sass,
    Less,
    Tailwind,
    None,
}

impl CssFramework {
    pub fn as_str(&self) -> &'static str {
        match self {
            CssFramework::Sass => "sass",
            CssFramework::Less => "less",
            CssFramework::Tailwind => "tailwind",
            CssFramework::None => "none",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            CssFramework::Sass,
            CssFramework::Less,
            CssFramework::Tailwind,
            CssFramework::None,
        ]
    }
}

impl Choice for CssFramework {
    fn label(&self) -> &'static str {
        match self {
            CssFramework::Sass => "Sass",
            CssFramework::Less => "Less",
            CssFramework::Tailwind => "Tailwind CSS",
            CssFramework::None => "No CSS preprocessor",
        }
    }
}

/// Bundler of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundler {
    Vite,
    Webpack,
}

impl Bundler {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bundler::Vite => "vite",
            Bundler::Webpack => "webpack",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Bundler::Vite, Bundler::Webpack]
    }
}

impl Choice for Bundler {
    fn label(&self) -> &'static str {
        match self {
            Bundler::Vite => "Vite (recommended)",
            Bundler::Webpack => "Webpack",
        }
    }
}

/// Package manager used to install the generated project's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Cnpm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Executable name.
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Cnpm => "cnpm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Prefix for running a manifest script, e.g. `pnpm dev` vs `npm run dev`.
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Cnpm => "cnpm run",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            PackageManager::Npm,
            PackageManager::Cnpm,
            PackageManager::Pnpm,
            PackageManager::Yarn,
        ]
    }
}

impl Choice for PackageManager {
    fn label(&self) -> &'static str {
        self.command()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Which generation of the question flow and materializer is in force.
///
/// `Minimal` asks as little as possible and relies on manifests shipped
/// inside the templates. `Legacy` asks every question and synthesizes the
/// manifest from the dependency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldMode {
    #[default]
    Minimal,
    Legacy,
}

impl ScaffoldMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaffoldMode::Minimal => "minimal",
            ScaffoldMode::Legacy => "legacy",
        }
    }
}

impl FromStr for ScaffoldMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(ScaffoldMode::Minimal),
            "legacy" => Ok(ScaffoldMode::Legacy),
            other => Err(ConfigError::UnknownChoice {
                kind: "scaffold mode",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ScaffoldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The immutable record of every choice driving a scaffold run.
///
/// Fields are private; the `with_*` methods consume the value and return
/// a new one, so a constructed configuration is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    project_name: String,
    framework: Framework,
    language: Language,
    css_framework: CssFramework,
    bundler: Bundler,
    install_deps: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    package_manager: Option<PackageManager>,
    #[serde(skip)]
    mode: ScaffoldMode,
}

impl Configuration {
    /// Create a configuration with the minimal-mode defaults:
    /// TypeScript, Vite, Tailwind, no dependency installation.
    pub fn new(project_name: impl Into<String>, framework: Framework) -> Self {
        Self {
            project_name: project_name.into(),
            framework,
            language: Language::TypeScript,
            css_framework: CssFramework::Tailwind,
            bundler: Bundler::Vite,
            install_deps: false,
            package_manager: None,
            mode: ScaffoldMode::Minimal,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_css_framework(mut self, css_framework: CssFramework) -> Self {
        self.css_framework = css_framework;
        self
    }

    pub fn with_bundler(mut self, bundler: Bundler) -> Self {
        self.bundler = bundler;
        self
    }

    /// Enable dependency installation. `None` leaves the manager to detection.
    pub fn with_install(mut self, package_manager: Option<PackageManager>) -> Self {
        self.install_deps = true;
        self.package_manager = package_manager;
        self
    }

    pub fn with_mode(mut self, mode: ScaffoldMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn css_framework(&self) -> CssFramework {
        self.css_framework
    }

    pub fn bundler(&self) -> Bundler {
        self.bundler
    }

    pub fn install_deps(&self) -> bool {
        self.install_deps
    }

    /// Operator-chosen package manager, if any.
    pub fn package_manager(&self) -> Option<PackageManager> {
        self.package_manager
    }

    pub fn mode(&self) -> ScaffoldMode {
        self.mode
    }

    /// Template substitution context: every serialized field by name.
    pub fn to_context(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}
