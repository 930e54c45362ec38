//! In-memory fakes for [`ProcessRunner`] (testing only)
//!
//! `ScriptedRunner` replays queued responses in order and records every
//! program and argument vector it was asked to run.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::InvokerError;
use crate::runner::{ProcessOutput, ProcessRunner};
use crate::Result;

/// One recorded call to a fake runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
}

/// Runner replaying a fixed script of responses.
///
/// Running past the end of the script is reported as a missing executable.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<Result<ProcessOutput>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a finished process
    pub fn respond(self, output: ProcessOutput) -> Self {
        self.responses.lock().unwrap().push_back(Ok(output));
        self
    }

    /// Queue a runner failure
    pub fn respond_err(self, err: InvokerError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// Calls made so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        self.calls.lock().unwrap().push(RecordedCall {
            program: program.to_string(),
            args: args.to_vec(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(InvokerError::ExecutableNotFound {
                    program: program.to_string(),
                })
            })
    }
}
