//! # scaffy_runner
//!
//! Package manager detection and install execution for scaffy.
//!
//! This is the one process boundary of a scaffold run:
//!
//! - **Detection**: check `pnpm` first, fall back to `npm`
//! - **Install shapes**: "install everything in the manifest" or
//!   "add an explicit package list" (runtime, then dev)
//! - **System runner**: blocking child process, inherited stdio, exit
//!   status is the only success signal
//! - **Mock runner**: records availability checks and invocations for tests
//!
//! # Example
//!
//! ```rust,no_run
//! use scaffy_runner::{detect_package_manager, InstallPlan, CommandRunner, SystemRunner};
//! use std::path::Path;
//!
//! let runner = SystemRunner::new();
//! let manager = detect_package_manager(&runner, None).unwrap();
//!
//! for invocation in InstallPlan::All.invocations(manager) {
//!     runner.run(&invocation, Path::new("./demo-app")).unwrap();
//! }
//! ```

pub mod command;
pub mod detect;
pub mod error;
pub mod mock;
pub mod runner;

pub use command::{InstallPlan, Invocation};
pub use detect::{detect_package_manager, DETECTION_ORDER};
pub use error::{RunnerError, RunnerResult};
pub use mock::{CapturedCall, MockRunner};
pub use runner::{CommandRunner, SystemRunner};
