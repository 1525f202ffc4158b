//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod create;

/// scaffy - front-end project scaffolding
#[derive(Parser)]
#[command(name = "scaffy")]
#[command(version, about = "scaffy - scaffold React and Vue projects from templates")]
#[command(long_about = r#"
scaffy asks a few questions, renders a project from its templates and
optionally installs the project's dependencies.

COMMANDS:
  create <name>  → Create a new project in ./<name>

EXIT CODES:
  0 - Success (or cancelled by the user)
  1 - General error
  2 - Invalid arguments
  3 - Template error
  4 - Install error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project
    Create(create::CreateArgs),
}
