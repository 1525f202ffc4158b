//! Package manager detection.

use scaffy_config::PackageManager;
use tracing::{info, warn};

use crate::error::{RunnerError, RunnerResult};
use crate::runner::CommandRunner;

/// Managers checked when the operator did not pick one, in order.
pub const DETECTION_ORDER: [PackageManager; 2] = [PackageManager::Pnpm, PackageManager::Npm];

/// Resolve the package manager to install with.
///
/// A preferred manager is used if it can be launched; otherwise, or when
/// there is no preference, `pnpm` is checked first and `npm` second.
pub fn detect_package_manager<R: CommandRunner + ?Sized>(
    runner: &R,
    preferred: Option<PackageManager>,
) -> RunnerResult<PackageManager> {
    if let Some(preferred) = preferred {
        if runner.is_available(preferred.command()) {
            return Ok(preferred);
        }
        warn!(
            "Preferred package manager {} not available, trying alternatives",
            preferred
        );
    }

    for candidate in DETECTION_ORDER {
        if runner.is_available(candidate.command()) {
            if candidate != PackageManager::Pnpm {
                warn!(
                    "pnpm not found, falling back to {} (install it with `npm install -g pnpm`)",
                    candidate
                );
            }
            info!("Using package manager: {}", candidate);
            return Ok(candidate);
        }
    }

    Err(RunnerError::NoPackageManagerFound)
}
