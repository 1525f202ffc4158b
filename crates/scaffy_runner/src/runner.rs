//! Command runner trait and the process-backed implementation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::command::Invocation;
use crate::error::{RunnerError, RunnerResult};

/// Runs external commands on behalf of the materializer.
pub trait CommandRunner {
    /// Whether `program` can be launched at all.
    fn is_available(&self, program: &str) -> bool;

    /// Run `invocation` in `cwd` to completion.
    fn run(&self, invocation: &Invocation, cwd: &Path) -> RunnerResult<()>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn is_available(&self, program: &str) -> bool {
        (**self).is_available(program)
    }

    fn run(&self, invocation: &Invocation, cwd: &Path) -> RunnerResult<()> {
        (**self).run(invocation, cwd)
    }
}

/// Runner that spawns real child processes.
///
/// Runs block until the child exits and inherit the terminal's stdio.
/// There is no timeout: a hung install hangs the run.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn is_available(&self, program: &str) -> bool {
        let available = match resolve(program) {
            Some(path) => Command::new(&path)
                .arg("--version")
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .map(|s| s.success())
                .unwrap_or(false),
            None => false,
        };
        debug!("Availability of {}: {}", program, available);
        available
    }

    fn run(&self, invocation: &Invocation, cwd: &Path) -> RunnerResult<()> {
        info!("Running `{}` in {}", invocation, cwd.display());

        let program = resolve(&invocation.program).ok_or_else(|| RunnerError::InstallFailed {
            command: invocation.to_string(),
            reason: format!("could not be started: {} not found on PATH", invocation.program),
        })?;

        let status = Command::new(&program)
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| RunnerError::InstallFailed {
                command: invocation.to_string(),
                reason: format!("could not be started: {}", e),
            })?;

        if !status.success() {
            return Err(RunnerError::InstallFailed {
                command: invocation.to_string(),
                reason: match status.code() {
                    Some(code) => format!("exited with code {}", code),
                    None => "was terminated by a signal".to_string(),
                },
            });
        }

        Ok(())
    }
}

/// Full path of `program` on PATH, including `.cmd`/`.exe` shims on Windows.
fn resolve(program: &str) -> Option<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            debug!("Resolved {} to {}", program, path.display());
            Some(path)
        }
        Err(e) => {
            debug!("Could not resolve {}: {}", program, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_program_is_unavailable() {
        let runner = SystemRunner::new();
        assert!(!runner.is_available("scaffy-definitely-not-a-real-binary"));
    }

    #[test]
    fn test_spawn_failure_is_install_failed() {
        let temp = TempDir::new().unwrap();
        let runner = SystemRunner::new();
        let err = runner
            .run(
                &Invocation::new("scaffy-definitely-not-a-real-binary").arg("install"),
                temp.path(),
            )
            .unwrap_err();

        match err {
            RunnerError::InstallFailed { command, reason } => {
                assert_eq!(command, "scaffy-definitely-not-a-real-binary install");
                assert_eq!(
                    reason,
                    "could not be started: scaffy-definitely-not-a-real-binary not found on PATH"
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_programs_are_resolved_on_path() {
        use std::os::unix::fs::PermissionsExt;

        let bin = TempDir::new().unwrap();
        let script = bin.path().join("scaffy-fake-pm");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let resolved = which::which_in("scaffy-fake-pm", Some(bin.path()), bin.path()).unwrap();
        assert!(resolved.ends_with("scaffy-fake-pm"));
        assert!(resolve("scaffy-definitely-not-a-real-binary").is_none());
    }
}
