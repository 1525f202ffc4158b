//! Static dependency table.
//!
//! A declarative list of rules keyed by configuration facets. The table
//! is data (YAML), read-only at render time; the built-in table ships
//! inside the crate and can be replaced by a file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use scaffy_config::{Bundler, Configuration, CssFramework, Framework, Language};

use crate::error::{TemplateError, TemplateResult};

const BUILTIN_TABLE: &str = include_str!("../data/dependencies.yaml");

/// Facets a rule applies to. An absent facet matches any value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FacetMatch {
    #[serde(default)]
    pub framework: Option<Framework>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub css_framework: Option<CssFramework>,
    #[serde(default)]
    pub bundler: Option<Bundler>,
}

impl FacetMatch {
    pub fn matches(&self, config: &Configuration) -> bool {
        self.framework.map_or(true, |f| f == config.framework())
            && self.language.map_or(true, |l| l == config.language())
            && self.css_framework.map_or(true, |c| c == config.css_framework())
            && self.bundler.map_or(true, |b| b == config.bundler())
    }
}

/// One table rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRule {
    #[serde(default)]
    pub when: FacetMatch,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
}

/// Packages to install for one configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDependencies {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl ResolvedDependencies {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

/// The dependency table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyTable {
    #[serde(default)]
    pub rules: Vec<DependencyRule>,
}

impl DependencyTable {
    /// The table shipped with scaffy.
    pub fn builtin() -> TemplateResult<Self> {
        Self::from_yaml_str(BUILTIN_TABLE)
    }

    pub fn from_yaml_str(content: &str) -> TemplateResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a table from a YAML file.
    pub fn from_path(path: &Path) -> TemplateResult<Self> {
        debug!("Loading dependency table from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| TemplateError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Concatenate the packages of every matching rule, in rule order,
    /// keeping only the first occurrence of each name.
    pub fn resolve(&self, config: &Configuration) -> ResolvedDependencies {
        let mut resolved = ResolvedDependencies::default();

        for rule in self.rules.iter().filter(|r| r.when.matches(config)) {
            push_unique(&mut resolved.dependencies, &rule.dependencies);
            push_unique(&mut resolved.dev_dependencies, &rule.dev_dependencies);
        }

        debug!(
            "Resolved {} dependencies and {} dev dependencies",
            resolved.dependencies.len(),
            resolved.dev_dependencies.len()
        );
        resolved
    }
}

fn push_unique(into: &mut Vec<String>, packages: &[String]) {
    for package in packages {
        if !into.contains(package) {
            into.push(package.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffy_config::ScaffoldMode;

    #[test]
    fn test_builtin_table_parses() {
        let table = DependencyTable::builtin().unwrap();
        assert!(!table.rules.is_empty());
    }

    #[test]
    fn test_react_vite_typescript() {
        let table = DependencyTable::builtin().unwrap();
        let config = Configuration::new("demo-app", Framework::React)
            .with_mode(ScaffoldMode::Legacy)
            .with_css_framework(CssFramework::None);
        let resolved = table.resolve(&config);

        assert_eq!(
            resolved.dependencies,
            vec!["react", "react-dom", "react-router-dom"]
        );
        assert_eq!(
            resolved.dev_dependencies,
            vec![
                "typescript",
                "@types/react",
                "@types/react-dom",
                "vite",
                "@vitejs/plugin-react"
            ]
        );
    }

    #[test]
    fn test_vue_webpack_less_javascript() {
        let table = DependencyTable::builtin().unwrap();
        let config = Configuration::new("demo-app", Framework::Vue)
            .with_language(Language::JavaScript)
            .with_bundler(Bundler::Webpack)
            .with_css_framework(CssFramework::Less);
        let resolved = table.resolve(&config);

        assert_eq!(resolved.dependencies, vec!["vue", "vue-router", "pinia"]);
        assert!(resolved.dev_dependencies.contains(&"vue-loader".to_string()));
        assert!(resolved.dev_dependencies.contains(&"less-loader".to_string()));
        assert!(!resolved.dev_dependencies.contains(&"typescript".to_string()));
        assert!(!resolved.dev_dependencies.contains(&"vite".to_string()));
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let table = DependencyTable::from_yaml_str(
            r#"
rules:
  - devDependencies: [webpack, babel-loader]
  - when: { framework: react }
    devDependencies: [babel-loader, "@babel/preset-react"]
"#,
        )
        .unwrap();
        let resolved = table.resolve(&Configuration::new("a", Framework::React));
        assert_eq!(
            resolved.dev_dependencies,
            vec!["webpack", "babel-loader", "@babel/preset-react"]
        );
    }

    #[test]
    fn test_wildcard_rule_and_unknown_facet() {
        let table = DependencyTable::from_yaml_str(
            "rules:\n  - dependencies: [core-js]\n  - when: { framework: vue }\n    dependencies: [vue]\n",
        )
        .unwrap();
        let resolved = table.resolve(&Configuration::new("a", Framework::React));
        assert_eq!(resolved.dependencies, vec!["core-js"]);

        assert!(DependencyTable::from_yaml_str("rules:\n  - when: { runtime: node }\n").is_err());
    }
}
