//! # scaffy_core
//!
//! The template materializer for scaffy.
//!
//! Given a resolved [`Configuration`](scaffy_config::Configuration), the
//! [`Materializer`] writes the project tree and optionally installs its
//! dependencies. All inputs are explicit: the templates directory and
//! dependency table come in through [`MaterializeOptions`], the process
//! boundary through a [`CommandRunner`](scaffy_runner::CommandRunner), and
//! the outcome (including the package manager used) is returned in a
//! [`MaterializeReport`].
//!
//! # Example
//!
//! ```rust,no_run
//! use scaffy_config::{Configuration, Framework};
//! use scaffy_core::{MaterializeOptions, Materializer};
//! use scaffy_runner::SystemRunner;
//! use std::path::Path;
//!
//! let materializer = Materializer::new(MaterializeOptions::new("templates"), SystemRunner::new());
//! let config = Configuration::new("demo-app", Framework::React).with_install(None);
//!
//! let report = materializer.materialize(&config, Path::new("./demo-app")).unwrap();
//! println!("installed with {:?}", report.package_manager);
//! ```

pub mod error;
pub mod materializer;

pub use error::{ScaffoldError, ScaffoldResult};
pub use materializer::{MaterializeOptions, MaterializeReport, Materializer};
