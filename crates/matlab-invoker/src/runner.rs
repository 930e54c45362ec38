//! Process execution
//!
//! [`ProcessRunner`] is the only place the crate crosses into the OS. The
//! [`SystemRunner`] implementation spawns a real child process; tests swap in
//! [`crate::fakes::ScriptedRunner`].

use crate::error::InvokerError;
use crate::Result;
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::debug;

/// Everything a finished process left behind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Captured stdout
    pub stdout: Vec<u8>,
    /// Captured stderr
    pub stderr: Vec<u8>,
    /// Exit code, `None` if the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    /// Successful exit with the given stdout
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        ProcessOutput {
            stdout: stdout.into(),
            stderr: Vec::new(),
            exit_code: Some(0),
        }
    }

    /// Failed exit with the given code and stderr
    pub fn failure(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        ProcessOutput {
            stdout: Vec::new(),
            stderr: stderr.into(),
            exit_code: Some(code),
        }
    }

    /// Whether the process exited with status 0
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a program to completion and captures its output.
///
/// Implementations block the calling thread until the process exits. They
/// report a missing executable as [`InvokerError::ExecutableNotFound`] and
/// leave exit-status interpretation to the caller.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        (**self).run(program, args)
    }
}

/// [`ProcessRunner`] backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        let start = Instant::now();

        // Stdin is closed so the interpreter can never sit waiting for input.
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => InvokerError::ExecutableNotFound {
                    program: program.to_string(),
                },
                _ => InvokerError::Io(e),
            })?;

        debug!(
            program,
            exit_code = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            elapsed = ?start.elapsed(),
            "process finished"
        );

        Ok(ProcessOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_output_succeeded() {
        assert!(ProcessOutput::success(b"ok".to_vec()).succeeded());
        assert!(!ProcessOutput::failure(1, "boom").succeeded());
        assert!(!ProcessOutput {
            exit_code: None,
            ..Default::default()
        }
        .succeeded());
    }

    #[test]
    fn test_missing_executable_is_not_found() {
        let err = SystemRunner
            .run("matlab-invoker-definitely-missing-binary", &[])
            .unwrap_err();
        assert!(matches!(err, InvokerError::ExecutableNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout() {
        let out = SystemRunner
            .run("echo", &["hello".to_string()])
            .expect("echo failed");
        assert!(out.succeeded());
        assert_eq!(out.stdout, b"hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_exit_code() {
        let out = SystemRunner.run("false", &[]).expect("false failed to spawn");
        assert!(!out.succeeded());
        assert_eq!(out.exit_code, Some(1));
    }
}
