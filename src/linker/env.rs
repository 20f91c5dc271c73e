//! Environment-sourced linker flags.
//!
//! Users and CI systems hand extra linker flags to the build through an
//! `LDFLAGS`-style variable. The value is a single shell-quoted string;
//! it is split with POSIX word-splitting semantics so quoted arguments
//! containing spaces survive as single tokens.

use crate::linker::args::ArgList;
use crate::linker::error::LinkerError;

/// The environment variable consulted by [`EnvLinkerFlags::from_env`].
pub const LINKER_FLAGS_VAR: &str = "LDFLAGS";

/// Extra linker flags supplied out-of-band through the environment.
///
/// The raw string is captured once, at construction; [`args`](Self::args)
/// is a pure function of the captured value, so repeated queries cannot
/// observe a changing environment mid-configuration.
#[derive(Debug, Clone)]
pub struct EnvLinkerFlags {
    /// Name of the variable the value came from, for diagnostics.
    var: String,
    /// Captured raw value. `None` when the variable was unset.
    raw: Option<String>,
}

impl EnvLinkerFlags {
    /// Capture the current value of `LDFLAGS` from the process
    /// environment. This is the only environment read in the crate.
    pub fn from_env() -> Self {
        let raw = std::env::var(LINKER_FLAGS_VAR).ok();
        tracing::debug!(
            var = LINKER_FLAGS_VAR,
            present = raw.is_some(),
            "captured environment linker flags"
        );
        EnvLinkerFlags {
            var: LINKER_FLAGS_VAR.to_string(),
            raw,
        }
    }

    /// Build from an explicitly supplied value instead of reading the
    /// process environment. `var` names the source for diagnostics.
    pub fn from_value(var: impl Into<String>, value: impl Into<String>) -> Self {
        EnvLinkerFlags {
            var: var.into(),
            raw: Some(value.into()),
        }
    }

    /// Build an empty source, as if the variable were unset.
    pub fn unset() -> Self {
        EnvLinkerFlags {
            var: LINKER_FLAGS_VAR.to_string(),
            raw: None,
        }
    }

    /// The captured raw string, if any.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Split the captured value into linker arguments.
    ///
    /// Unset, empty, and all-whitespace values yield an empty list.
    /// `-L/opt/lib "-Wl,-rpath,/opt/lib"` yields exactly two tokens.
    /// Unbalanced quoting or a trailing escape is a configuration error,
    /// not a crash.
    pub fn args(&self) -> Result<ArgList, LinkerError> {
        let raw = match &self.raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(ArgList::new()),
        };

        match shlex::split(raw) {
            Some(words) => {
                tracing::debug!(var = %self.var, count = words.len(), "parsed linker flags");
                Ok(ArgList::from(words))
            }
            None => Err(LinkerError::MalformedEnvFlags {
                var: self.var.clone(),
                raw: raw.clone(),
            }),
        }
    }
}
