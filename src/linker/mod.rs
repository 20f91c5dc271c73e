//! Linker capability negotiation.
//!
//! Build toolchains are wildly inconsistent about linking: some compilers
//! invoke a separate linker binary, others (DMD, for example) are the
//! compiler and the linker in one executable; flag names and supported
//! features vary per toolchain and per target platform. This module gives
//! the backend command generator a uniform, typed query surface over those
//! differences.
//!
//! # Key Concepts
//!
//! - **Capabilities** - One query per linker facet, answered with an
//!   argument list or a typed "unsupported" error (in `capabilities.rs`)
//! - **Baseline** - Every query has a safe, toolchain-agnostic default;
//!   concrete adapters override only the facets they actually support
//! - **Environment flags** - Extra linker flags supplied out-of-band via
//!   an `LDFLAGS`-style variable (in `env.rs`)
//!
//! Capability values are immutable after construction and every query is
//! a pure function of its arguments, so one value can be shared freely
//! across build executor threads.

pub mod args;
pub mod capabilities;
pub mod env;
pub mod error;
pub mod machine;
pub mod options;
pub mod soname;

pub use args::ArgList;
pub use capabilities::{ArgProbe, BaselineLinker, LinkerCapabilities, RpathRequest, ToolchainId};
pub use env::EnvLinkerFlags;
pub use error::{LinkerError, LinkerFeature};
pub use machine::{BuildEnvironment, HostPlatform, MachineChoice, OsFamily};
pub use options::{OptionDict, OptionValue};
pub use soname::VersionedLibrary;
