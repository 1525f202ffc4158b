//! Mock command runner for testing.
//!
//! Captures every availability check and invocation and answers from preset state,
//! so detection and install flows can be verified without a real
//! package manager on the machine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::Invocation;
use crate::error::{RunnerError, RunnerResult};
use crate::runner::CommandRunner;

/// Captured call information for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCall {
    /// `is_available` or `run`.
    pub method: String,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Mock runner.
///
/// Clones share state, so a test can keep a handle while the
/// materializer owns another.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    /// Programs that report as available.
    available: Arc<RwLock<Vec<String>>>,
    /// Captured calls for verification.
    captured_calls: Arc<RwLock<Vec<CapturedCall>>>,
    /// Exit code every `run` call reports, if set.
    simulate_failure: Arc<RwLock<Option<i32>>>,
}

impl MockRunner {
    /// Create a mock runner where nothing is available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark programs as available.
    pub fn with_available<I, S>(self, programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available
            .write()
            .extend(programs.into_iter().map(Into::into));
        self
    }

    /// Make every `run` call fail with the given exit code.
    pub fn simulate_failure(self, exit_code: i32) -> Self {
        *self.simulate_failure.write() = Some(exit_code);
        self
    }

    /// All captured calls.
    pub fn calls(&self) -> Vec<CapturedCall> {
        self.captured_calls.read().clone()
    }

    /// Programs checked with `is_available`, in order.
    pub fn checked(&self) -> Vec<String> {
        self.method_calls("is_available")
            .into_iter()
            .map(|c| c.program)
            .collect()
    }

    /// Invocations passed to `run`, rendered as command lines.
    pub fn runs(&self) -> Vec<String> {
        self.method_calls("run")
            .into_iter()
            .map(|c| {
                Invocation {
                    program: c.program,
                    args: c.args,
                }
                .to_string()
            })
            .collect()
    }

    /// Calls of one method.
    pub fn method_calls(&self, method: &str) -> Vec<CapturedCall> {
        self.captured_calls
            .read()
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }

    /// Whether no call of any kind was made.
    pub fn is_untouched(&self) -> bool {
        self.captured_calls.read().is_empty()
    }

    /// Forget captured calls.
    pub fn clear_calls(&self) {
        self.captured_calls.write().clear();
    }
}

impl CommandRunner for MockRunner {
    fn is_available(&self, program: &str) -> bool {
        self.captured_calls.write().push(CapturedCall {
            method: "is_available".to_string(),
            program: program.to_string(),
            args: Vec::new(),
            cwd: None,
        });
        self.available.read().iter().any(|p| p == program)
    }

    fn run(&self, invocation: &Invocation, cwd: &Path) -> RunnerResult<()> {
        self.captured_calls.write().push(CapturedCall {
            method: "run".to_string(),
            program: invocation.program.clone(),
            args: invocation.args.clone(),
            cwd: Some(cwd.to_path_buf()),
        });

        if let Some(code) = *self.simulate_failure.read() {
            return Err(RunnerError::InstallFailed {
                command: invocation.to_string(),
                reason: format!("exited with code {}", code),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_captures_runs() {
        let runner = MockRunner::new();
        let handle = runner.clone();
        runner
            .run(&Invocation::new("npm").arg("install"), Path::new("/tmp/app"))
            .unwrap();

        assert_eq!(handle.runs(), vec!["npm install"]);
        assert_eq!(
            handle.calls()[0].cwd.as_deref(),
            Some(Path::new("/tmp/app"))
        );
    }

    #[test]
    fn test_mock_simulated_failure() {
        let runner = MockRunner::new().simulate_failure(1);
        let err = runner
            .run(&Invocation::new("pnpm").arg("install"), Path::new("."))
            .unwrap_err();
        assert!(err.to_string().contains("exited with code 1"));
    }
}
