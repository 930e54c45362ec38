//! matlab-invoker: run MATLAB snippets as a subprocess
//!
//! Each call launches `matlab -nodesktop -nosplash -r "try,<command>;end,exit"`,
//! blocks until the process exits and returns its stdout with the startup
//! banner and trailing prompt removed.
//!
//! ## Key Components
//!
//! - `Invoker`: builds the command line, runs it and strips the banner
//! - `ProcessRunner`: the OS boundary (`SystemRunner` for real processes)
//! - `BannerTrim`: head/tail byte offsets, 343 and 7 by default
//! - `InvokerConfig`: executable, flags and trim, with environment overrides
//!
//! ```no_run
//! let bytes = matlab_invoker::run("disp(magic(3))")?;
//! println!("{}", String::from_utf8_lossy(&bytes));
//! # Ok::<(), matlab_invoker::InvokerError>(())
//! ```

pub mod banner;
pub mod config;
pub mod error;
pub mod fakes;
pub mod invocation;
pub mod invoker;
pub mod runner;

pub use banner::{BannerTrim, DEFAULT_BANNER_HEAD, DEFAULT_BANNER_TAIL};
pub use config::InvokerConfig;
pub use error::InvokerError;
pub use invocation::Invocation;
pub use invoker::{run, Invoker};
pub use runner::{ProcessOutput, ProcessRunner, SystemRunner};

/// Result type for matlab-invoker operations
pub type Result<T> = std::result::Result<T, InvokerError>;
