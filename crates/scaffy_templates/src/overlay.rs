//! Overlay plans.
//!
//! Which template roots apply to a configuration, and in which order, is
//! decided here from typed facets only. Nothing in this module touches
//! the filesystem; [`TemplateRoot::relative_path`] is the single place a
//! root is mapped onto the templates directory layout:
//!
//! ```text
//! templates/
//!   <framework>/base/
//!   <framework>/lang/<language>/
//!   <framework>/styles/<css>/
//!   config/<bundler>/
//!   common/
//! ```

use std::fmt;
use std::path::PathBuf;

use scaffy_config::{Bundler, Configuration, CssFramework, Framework, Language};

/// One template root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateRoot {
    /// The framework's base project.
    FrameworkBase(Framework),
    /// Entry points and compiler setup for one language.
    LanguageOverlay(Framework, Language),
    /// Styling setup.
    StyleOverlay(Framework, CssFramework),
    /// Bundler configuration shared by every framework.
    BundlerConfig(Bundler),
    /// Files every project gets.
    Common,
}

impl TemplateRoot {
    /// Location relative to the templates directory.
    pub fn relative_path(&self) -> PathBuf {
        match self {
            TemplateRoot::FrameworkBase(fw) => PathBuf::from(fw.as_str()).join("base"),
            TemplateRoot::LanguageOverlay(fw, lang) => {
                PathBuf::from(fw.as_str()).join("lang").join(lang.as_str())
            }
            TemplateRoot::StyleOverlay(fw, css) => {
                PathBuf::from(fw.as_str()).join("styles").join(css.as_str())
            }
            TemplateRoot::BundlerConfig(bundler) => PathBuf::from("config").join(bundler.as_str()),
            TemplateRoot::Common => PathBuf::from("common"),
        }
    }

    /// Required roots must exist on disk; optional overlays may be absent.
    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            TemplateRoot::LanguageOverlay(..) | TemplateRoot::StyleOverlay(..)
        )
    }
}

impl fmt::Display for TemplateRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.relative_path().display())
    }
}

/// Ordered list of roots; later roots overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPlan {
    roots: Vec<TemplateRoot>,
}

impl OverlayPlan {
    /// Plan for a configuration: base, language overlay, style overlay
    /// (unless `none`), bundler config, common.
    pub fn for_config(config: &Configuration) -> Self {
        let framework = config.framework();
        let mut roots = vec![
            TemplateRoot::FrameworkBase(framework),
            TemplateRoot::LanguageOverlay(framework, config.language()),
        ];
        if config.css_framework() != CssFramework::None {
            roots.push(TemplateRoot::StyleOverlay(framework, config.css_framework()));
        }

        roots.push(TemplateRoot::BundlerConfig(config.bundler()));
        roots.push(TemplateRoot::Common);
        Self { roots }
    }

    /// Build a plan from explicit roots.
    pub fn from_roots(roots: Vec<TemplateRoot>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[TemplateRoot] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl<'a> IntoIterator for &'a OverlayPlan {
    type Item = &'a TemplateRoot;
    type IntoIter = std::slice::Iter<'a, TemplateRoot>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
