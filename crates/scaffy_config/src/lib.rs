//! # scaffy_config
//!
//! Configuration record and option resolution for scaffy.
//!
//! This crate gathers the operator's choices and reduces them to an
//! immutable [`Configuration`]. It has no rendering knowledge:
//!
//! - Closed choice enumerations (framework, language, styling, bundler, package manager)
//! - The [`Prompter`] seam to the terminal (dialoguer-backed or scripted)
//! - The [`ConfigResolver`] question flow for both scaffold modes
//!
//! ## Example
//!
//! ```rust
//! use scaffy_config::{ConfigResolver, Framework, ScaffoldMode, ScriptedPrompter};
//!
//! let prompter = ScriptedPrompter::new().answer_choose("Vue 3").answer_confirm(false);
//! let resolver = ConfigResolver::new(&prompter, ScaffoldMode::Minimal);
//!
//! let config = resolver.resolve("demo-app").unwrap();
//! assert_eq!(config.framework(), Framework::Vue);
//! assert!(!config.install_deps());
//! ```

pub mod error;
pub mod models;
pub mod prompter;
pub mod resolver;

pub use error::{ConfigError, ConfigResult};
pub use models::{
    Bundler, Choice, Configuration, CssFramework, Framework, Language, PackageManager,
    ScaffoldMode,
};
pub use prompter::{Answer, DialoguerPrompter, Prompter, ScriptedPrompter};
pub use resolver::ConfigResolver;
