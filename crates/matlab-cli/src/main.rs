//! matlab-run - evaluate a MATLAB snippet from the command line
//!
//! Runs `matlab -nodesktop -nosplash -r "try,<COMMAND>;end,exit"` and writes
//! the captured stdout, minus banner and prompt, to stdout or a file.
//!
//! The interpreter and banner options fall back to the environment:
//!
//! - `MATLAB_EXECUTABLE`: interpreter to spawn
//! - `MATLAB_BANNER_HEAD` / `MATLAB_BANNER_TAIL`: bytes stripped from each end

mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use matlab_invoker::{Invocation, Invoker, InvokerConfig};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(name = "matlab-run")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run a MATLAB snippet and print its output", long_about = None)]
struct Cli {
    /// MATLAB code to evaluate
    command: String,

    /// Interpreter executable [default: $MATLAB_EXECUTABLE or matlab]
    #[arg(long)]
    executable: Option<String>,

    /// Bytes of startup banner to strip [default: $MATLAB_BANNER_HEAD or 343]
    #[arg(long)]
    head: Option<usize>,

    /// Bytes of trailing prompt to strip [default: $MATLAB_BANNER_TAIL or 7]
    #[arg(long)]
    tail: Option<usize>,

    /// Interpreter flag placed before `-r` (repeatable, replaces the defaults)
    #[arg(long = "flag", value_name = "FLAG", allow_hyphen_values = true)]
    flags: Vec<String>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the command line as JSON without running it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Layer the flags that were given on top of `base`
    fn apply(&self, mut base: InvokerConfig) -> InvokerConfig {
        if let Some(executable) = &self.executable {
            base.executable = executable.clone();
        }
        if let Some(head) = self.head {
            base.banner.head = head;
        }
        if let Some(tail) = self.tail {
            base.banner.tail = tail;
        }
        if !self.flags.is_empty() {
            base.flags = self.flags.clone();
        }
        base
    }
}

/// What `--dry-run` prints
#[derive(Debug, Serialize)]
struct DryRun<'a> {
    program: String,
    args: Vec<String>,
    config: &'a InvokerConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    telemetry::init_tracing(cli.json, level);

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config = InvokerConfig::from_env().context("Invalid MATLAB_* environment")?;
    let invoker = Invoker::new(cli.apply(config));
    let invocation = Invocation::new(cli.command.as_str());

    if cli.dry_run {
        let (program, args) = invoker.command_line(&invocation);
        let plan = DryRun {
            program,
            args,
            config: invoker.config(),
        };
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let bytes = invoker
        .run_invocation(&invocation)
        .with_context(|| format!("Failed to evaluate {:?}", cli.command))?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &bytes)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
