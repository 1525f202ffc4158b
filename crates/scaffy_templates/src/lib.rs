//! # scaffy_templates
//!
//! Template rendering, overlay selection and manifest synthesis for scaffy.
//!
//! This crate knows how to turn template roots into files:
//!
//! - Jinja rendering (minijinja) with EJS-style `<%= %>` / `<% if %>` tags
//!   against the configuration context
//! - Typed overlay plans: which template roots apply, in which order
//! - Recursive root application (later roots overwrite earlier ones)
//! - The static dependency table and `package.json` synthesis
//!
//! ## Example
//!
//! ```rust,no_run
//! use scaffy_config::{Configuration, Framework};
//! use scaffy_templates::{OverlayPlan, RootApplier, TemplateRenderer};
//! use std::path::Path;
//!
//! let config = Configuration::new("demo-app", Framework::React);
//! let renderer = TemplateRenderer::new();
//! let context = config.to_context();
//! let applier = RootApplier::new(&renderer, &context);
//!
//! for root in OverlayPlan::for_config(&config).roots() {
//!     let source = Path::new("templates").join(root.relative_path());
//!     applier.apply(&source, Path::new("./demo-app")).unwrap();
//! }
//! ```

pub mod applier;
pub mod dependencies;
pub mod error;
pub mod manifest;
pub mod overlay;
pub mod renderer;

pub use applier::RootApplier;
pub use dependencies::{DependencyRule, DependencyTable, FacetMatch, ResolvedDependencies};
pub use error::{RenderError, TemplateError, TemplateResult};
pub use manifest::{ManifestScripts, ManifestSource, PackageManifest, MANIFEST_FILE};
pub use overlay::{OverlayPlan, TemplateRoot};
pub use renderer::{Context, TemplateRenderer};
