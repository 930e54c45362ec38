//! Invoker configuration
//!
//! Defaults reproduce `matlab -nodesktop -nosplash -r ...` with a 343/7 byte
//! banner trim. Each value can be overridden from the environment.

use crate::banner::BannerTrim;
use crate::error::InvokerError;
use crate::Result;
use serde::Serialize;

/// Environment variable overriding the executable
pub const ENV_EXECUTABLE: &str = "MATLAB_EXECUTABLE";
/// Environment variable overriding the leading trim
pub const ENV_BANNER_HEAD: &str = "MATLAB_BANNER_HEAD";
/// Environment variable overriding the trailing trim
pub const ENV_BANNER_TAIL: &str = "MATLAB_BANNER_TAIL";

pub const DEFAULT_EXECUTABLE: &str = "matlab";

/// Flags disabling the desktop and the splash screen
pub const DEFAULT_FLAGS: [&str; 2] = ["-nodesktop", "-nosplash"];

/// Invoker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvokerConfig {
    /// Program name or path, resolved through the search path by the OS
    pub executable: String,
    /// Flags placed before `-r`
    pub flags: Vec<String>,
    /// Bytes stripped from the captured stdout
    pub banner: BannerTrim,
}

impl Default for InvokerConfig {
    fn default() -> Self {
        InvokerConfig {
            executable: DEFAULT_EXECUTABLE.to_string(),
            flags: DEFAULT_FLAGS.iter().map(|f| f.to_string()).collect(),
            banner: BannerTrim::default(),
        }
    }
}

impl InvokerConfig {
    /// Defaults overlaid with `MATLAB_EXECUTABLE`, `MATLAB_BANNER_HEAD` and
    /// `MATLAB_BANNER_TAIL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = InvokerConfig::default();

        if let Some(executable) = lookup(ENV_EXECUTABLE).filter(|v| !v.trim().is_empty()) {
            config.executable = executable;
        }
        if let Some(head) = lookup(ENV_BANNER_HEAD) {
            config.banner.head = parse_offset(ENV_BANNER_HEAD, &head)?;
        }
        if let Some(tail) = lookup(ENV_BANNER_TAIL) {
            config.banner.tail = parse_offset(ENV_BANNER_TAIL, &tail)?;
        }

        Ok(config)
    }

    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags = flags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_banner(mut self, banner: BannerTrim) -> Self {
        self.banner = banner;
        self
    }
}

fn parse_offset(key: &str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| {
        InvokerError::InvalidConfig(format!(
            "{key} must be a non-negative integer, got {value:?}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = InvokerConfig::default();
        assert_eq!(config.executable, "matlab");
        assert_eq!(config.flags, vec!["-nodesktop", "-nosplash"]);
        assert_eq!(config.banner, BannerTrim::new(343, 7));
    }

    #[test]
    fn test_from_lookup_without_vars_is_default() {
        let config = InvokerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, InvokerConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = InvokerConfig::from_lookup(lookup(&[
            (ENV_EXECUTABLE, "/opt/matlab/bin/matlab"),
            (ENV_BANNER_HEAD, " 400 "),
            (ENV_BANNER_TAIL, "0"),
        ]))
        .unwrap();

        assert_eq!(config.executable, "/opt/matlab/bin/matlab");
        assert_eq!(config.banner, BannerTrim::new(400, 0));
    }

    #[test]
    fn test_blank_executable_keeps_default() {
        let config = InvokerConfig::from_lookup(lookup(&[(ENV_EXECUTABLE, "  ")])).unwrap();
        assert_eq!(config.executable, "matlab");
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let err = InvokerConfig::from_lookup(lookup(&[(ENV_BANNER_HEAD, "-3")])).unwrap_err();
        match err {
            InvokerError::InvalidConfig(msg) => assert!(msg.contains(ENV_BANNER_HEAD)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_builder_setters() {
        let config = InvokerConfig::default()
            .with_executable("octave")
            .with_flags(["--no-gui"])
            .with_banner(BannerTrim::none());

        assert_eq!(config.executable, "octave");
        assert_eq!(config.flags, vec!["--no-gui"]);
        assert_eq!(config.banner, BannerTrim::none());
    }
}
