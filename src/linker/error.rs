//! Linker capability errors.
//!
//! Both variants are configuration errors: they must propagate to the
//! build-configuration step and be shown to the user with a suggested
//! fix, never swallowed or retried.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use super::capabilities::ToolchainId;

/// A linker facet that requires toolchain-specific knowledge.
///
/// The baseline capability table refuses these outright; only a concrete
/// toolchain adapter that knows the right flags may answer them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkerFeature {
    /// Forcing every member of a static archive into the link.
    WholeArchive,
    /// Explicitly permitting unresolved symbols at link time.
    AllowUndefined,
    /// Producing a position-independent executable.
    PositionIndependentExecutable,
    /// Linking in coverage instrumentation runtime support.
    Coverage,
    /// Embedding compiler bitcode for later re-optimization.
    Bitcode,
    /// Synthesizing a soname / install name for a shared library.
    Soname,
}

impl LinkerFeature {
    /// Human-readable feature name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkerFeature::WholeArchive => "whole-archive linking",
            LinkerFeature::AllowUndefined => "allowing undefined symbols",
            LinkerFeature::PositionIndependentExecutable => {
                "position-independent executables"
            }
            LinkerFeature::Coverage => "coverage data generation",
            LinkerFeature::Bitcode => "bitcode bundles",
            LinkerFeature::Soname => "shared library soname arguments",
        }
    }
}

impl std::fmt::Display for LinkerFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors produced by the linker capability layer.
#[derive(Debug, Clone, Error, MietteDiagnostic)]
pub enum LinkerError {
    /// A hard-failure-class query was asked of a toolchain that does not
    /// implement the feature.
    #[error("linker for `{toolchain}` does not support {feature}")]
    #[diagnostic(
        code(berth::linker::unsupported_feature),
        help("Switch to a toolchain that supports {feature}, or disable the option that requires it")
    )]
    UnsupportedFeature {
        /// Which toolchain was asked.
        toolchain: ToolchainId,
        /// The feature it cannot provide.
        feature: LinkerFeature,
    },

    /// The `LDFLAGS`-style environment value failed shell word splitting.
    #[error("malformed linker flags in ${var}: `{raw}`")]
    #[diagnostic(
        code(berth::linker::malformed_env_flags),
        help("Check ${var} for unbalanced quotes or a trailing backslash")
    )]
    MalformedEnvFlags {
        /// The environment variable that held the flags.
        var: String,
        /// The raw value that failed to parse.
        raw: String,
    },
}

impl LinkerError {
    /// Construct an unsupported-feature error for the given toolchain.
    pub fn unsupported(toolchain: &ToolchainId, feature: LinkerFeature) -> Self {
        LinkerError::UnsupportedFeature {
            toolchain: toolchain.clone(),
            feature,
        }
    }
}
