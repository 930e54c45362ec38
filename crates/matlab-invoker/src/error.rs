//! Error types for matlab-invoker

use thiserror::Error;

/// Errors that can occur while invoking the external interpreter
#[derive(Error, Debug)]
pub enum InvokerError {
    /// Executable could not be resolved on the search path
    #[error("{program} is not installed or not in PATH")]
    ExecutableNotFound { program: String },

    /// Process exited unsuccessfully (`code` is `None` when killed by a signal)
    #[error("{program} exited with {}: {stderr}", describe_code(.code))]
    NonZeroExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Captured stdout is shorter than the banner and prompt combined
    #[error("output too short to strip banner: got {len} bytes, need at least {required}")]
    OutputTooShort { len: usize, required: usize },

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error while spawning or waiting on the process
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
