//! The invoker: build the command line, run it, strip the banner.

use crate::config::InvokerConfig;
use crate::error::InvokerError;
use crate::invocation::Invocation;
use crate::runner::{ProcessRunner, SystemRunner};
use crate::Result;
use tracing::{debug, info, warn};

/// Runs MATLAB snippets through a [`ProcessRunner`].
///
/// Holds no mutable state: concurrent calls spawn independent processes.
#[derive(Debug, Clone)]
pub struct Invoker<R = SystemRunner> {
    config: InvokerConfig,
    runner: R,
}

impl Default for Invoker<SystemRunner> {
    fn default() -> Self {
        Invoker::new(InvokerConfig::default())
    }
}

impl Invoker<SystemRunner> {
    /// Invoker spawning real processes
    pub fn new(config: InvokerConfig) -> Self {
        Invoker {
            config,
            runner: SystemRunner,
        }
    }
}

impl<R: ProcessRunner> Invoker<R> {
    /// Invoker using a custom runner
    pub fn with_runner(config: InvokerConfig, runner: R) -> Self {
        Invoker { config, runner }
    }

    pub fn config(&self) -> &InvokerConfig {
        &self.config
    }

    /// Program and arguments that [`run`](Self::run) would spawn
    pub fn command_line(&self, invocation: &Invocation) -> (String, Vec<String>) {
        (
            self.config.executable.clone(),
            invocation.args(&self.config.flags),
        )
    }

    /// Evaluate `command` and return its stdout without banner and prompt.
    ///
    /// Fails when the executable is missing, exits unsuccessfully, or prints
    /// fewer bytes than the configured banner trim.
    pub fn run(&self, command: &str) -> Result<Vec<u8>> {
        self.run_invocation(&Invocation::new(command))
    }

    /// [`run`](Self::run) for a prepared [`Invocation`]
    pub fn run_invocation(&self, invocation: &Invocation) -> Result<Vec<u8>> {
        let (program, args) = self.command_line(invocation);
        info!(program = %program, command = %invocation, "Invoking interpreter");
        debug!(?args, "Argument vector");

        let output = self.runner.run(&program, &args)?;

        if !output.succeeded() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(program = %program, exit_code = ?output.exit_code, "Interpreter failed");
            return Err(InvokerError::NonZeroExit {
                program,
                code: output.exit_code,
                stderr,
            });
        }

        let trimmed = self.config.banner.strip(&output.stdout)?;
        debug!(
            captured = output.stdout.len(),
            returned = trimmed.len(),
            "Stripped banner"
        );
        Ok(trimmed.to_vec())
    }

    /// [`run`](Self::run) decoded as UTF-8, replacing invalid sequences
    pub fn run_to_string(&self, command: &str) -> Result<String> {
        let bytes = self.run(command)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Evaluate `command` with the default configuration and the system runner
pub fn run(command: &str) -> Result<Vec<u8>> {
    Invoker::<SystemRunner>::default().run(command)
}
