//! Berth - linker capability negotiation for multi-toolchain build systems.
//!
//! This crate provides the query surface through which a build-graph
//! executor asks "what command-line arguments does this toolchain need
//! to do X?" without knowing which concrete compiler or linker it is
//! talking to.

pub mod linker;

pub use linker::args::ArgList;
pub use linker::capabilities::{
    ArgProbe, BaselineLinker, LinkerCapabilities, RpathRequest, ToolchainId,
};
pub use linker::env::EnvLinkerFlags;
pub use linker::error::{LinkerError, LinkerFeature};
pub use linker::machine::{BuildEnvironment, HostPlatform, MachineChoice, OsFamily};
pub use linker::options::{OptionDict, OptionValue};
pub use linker::soname::VersionedLibrary;
