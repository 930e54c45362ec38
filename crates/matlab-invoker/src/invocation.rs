//! A single request to the interpreter and the argument vector it renders to.

/// Flag introducing the statement MATLAB runs at startup.
pub const RUN_FLAG: &str = "-r";

/// One snippet of MATLAB code to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Code handed to the interpreter as-is.
    pub command: String,
}

impl Invocation {
    pub fn new(command: impl Into<String>) -> Self {
        Invocation {
            command: command.into(),
        }
    }

    /// The startup statement: `try,<command>;end,exit`.
    ///
    /// `try ... end` swallows errors raised by the command and the trailing
    /// `exit` makes the interpreter terminate instead of waiting at its prompt.
    pub fn script(&self) -> String {
        format!("try,{};end,exit", self.command)
    }

    /// Argument vector (program name excluded): the interpreter flags, then
    /// `-r` and the script as one argument.
    ///
    /// The arguments go straight to the OS without a shell, so the script is
    /// never quoted or escaped.
    pub fn args(&self, flags: &[String]) -> Vec<String> {
        let mut args = Vec::with_capacity(flags.len() + 2);
        args.extend(flags.iter().cloned());
        args.push(RUN_FLAG.to_string());
        args.push(self.script());
        args
    }
}

impl From<&str> for Invocation {
    fn from(command: &str) -> Self {
        Invocation::new(command)
    }
}

impl From<String> for Invocation {
    fn from(command: String) -> Self {
        Invocation { command }
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command)
    }
}
