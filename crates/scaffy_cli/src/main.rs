//! scaffy CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success, or cancelled by the user
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Template error
//! - 4: Install error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};
use scaffy_core::ScaffoldError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const TEMPLATE_ERROR: u8 = 3;
    pub const INSTALL_ERROR: u8 = 4;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(ExitCodes::INVALID_ARGS)
            } else {
                ExitCode::from(ExitCodes::SUCCESS)
            };
        }
    };

    let level = if cli.verbose {
        "scaffy=debug"
    } else if cli.quiet {
        "scaffy=warn"
    } else {
        "scaffy=info"
    };
    let filter = match (level.parse::<Directive>(), "warn".parse::<Directive>()) {
        (Ok(scaffy), Ok(rest)) => EnvFilter::from_default_env()
            .add_directive(scaffy)
            .add_directive(rest),
        _ => EnvFilter::from_default_env(),
    };
    // Logging may already be initialized; continue either way
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Create(args) => commands::create::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) if scaffold_error(&e).map_or(false, ScaffoldError::is_cancelled) => {
            println!("Operation cancelled.");
            ExitCode::from(ExitCodes::SUCCESS)
        }
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn scaffold_error(e: &anyhow::Error) -> Option<&ScaffoldError> {
    e.chain().find_map(|cause| cause.downcast_ref::<ScaffoldError>())
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match scaffold_error(e) {
        Some(err) if err.is_template_error() => ExitCodes::TEMPLATE_ERROR,
        Some(err) if err.is_install_error() => ExitCodes::INSTALL_ERROR,
        _ => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_categorize_through_context() {
        let err = Err::<(), _>(ScaffoldError::NoPackageManagerFound)
            .context("Failed to create project")
            .unwrap_err();
        assert_eq!(categorize_error(&err), ExitCodes::INSTALL_ERROR);

        let err = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }

    #[test]
    fn test_cancel_detected() {
        let err = anyhow::Error::from(ScaffoldError::UserCancelled);
        assert!(scaffold_error(&err).map_or(false, ScaffoldError::is_cancelled));
    }

    #[test]
    fn test_cli_parses_create() {
        let cli = Cli::try_parse_from(["scaffy", "create", "demo-app", "--mode", "legacy"]).unwrap();
        match cli.command {
            Commands::Create(_) => {}
        }
    }
}
