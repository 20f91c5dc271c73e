//! The linker capability table.
//!
//! [`LinkerCapabilities`] asks one question per linker facet. Every query
//! has a default answer that is safe for a toolchain the build system
//! knows nothing about; a concrete adapter overrides only the facets its
//! toolchain actually supports. Defaults fall into three policy classes:
//!
//! 1. **Inert** - the facet is optional and harmless to omit; the default
//!    returns an empty [`ArgList`].
//! 2. **Platform-probed** - the answer depends on the build machine, not
//!    the toolchain (response-file acceptance is the only such query).
//! 3. **Hard failure** - guessing would turn a configuration mistake into
//!    a broken binary or a cryptic linker error downstream; the default
//!    returns [`LinkerError::UnsupportedFeature`].
//!
//! One deliberate asymmetry: rpath construction defaults to an empty list
//! (class 1) while soname synthesis is a hard failure (class 3). Omitting
//! an rpath never corrupts a binary, only its runtime search path, so it
//! is safe to skip; emitting a shared library with no soname when one was
//! requested is not. Keep the split when adding adapters.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::linker::args::ArgList;
use crate::linker::error::{LinkerError, LinkerFeature};
use crate::linker::machine::{BuildEnvironment, HostPlatform, MachineChoice};
use crate::linker::options::OptionDict;
use crate::linker::soname::VersionedLibrary;

/// Opaque label identifying a concrete compiler/linker.
///
/// Used only in diagnostics. Nothing in this crate branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolchainId(String);

impl ToolchainId {
    /// Create a toolchain label.
    pub fn new(id: impl Into<String>) -> Self {
        ToolchainId(id.into())
    }

    /// The label as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ToolchainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answer to the multi-argument acceptance probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgProbe {
    /// Whether the candidate arguments are jointly accepted.
    pub supported: bool,
    /// Whether acceptance requires a known workaround (for example,
    /// wrapping the arguments for a compiler driver).
    pub needs_workaround: bool,
}

impl ArgProbe {
    /// "Arguments are not jointly supported and no workaround is known."
    pub fn unsupported() -> Self {
        ArgProbe {
            supported: false,
            needs_workaround: false,
        }
    }

    /// "Arguments are accepted as-is."
    pub fn supported() -> Self {
        ArgProbe {
            supported: true,
            needs_workaround: false,
        }
    }
}

/// Inputs to [`LinkerCapabilities::build_rpath_args`].
///
/// Paths in `rpath_dirs` are relative to the build directory; `from_dir`
/// is where the command assembling the link line will run.
#[derive(Debug, Clone)]
pub struct RpathRequest<'a> {
    /// Root of the build tree.
    pub build_dir: &'a Path,
    /// Directory the link command runs from.
    pub from_dir: &'a Path,
    /// Library directories to encode for build-tree execution.
    pub rpath_dirs: &'a [PathBuf],
    /// Extra rpath entries applied only while running from the build tree.
    pub build_rpath: &'a str,
    /// Rpath entries to keep after installation.
    pub install_rpath: &'a str,
}

/// Capability queries a backend generator asks while assembling a link
/// command.
///
/// Implementations must be immutable after construction: every query is
/// `&self`, side-effect-free, and idempotent, so one capability value can
/// be queried concurrently from executor threads without locking. Each
/// toolchain configuration gets its own value; never reuse one across
/// [`MachineChoice`] sides of a cross build.
///
/// The required methods supply identity; every facet query has a default
/// body implementing the baseline policy described at the module level.
pub trait LinkerCapabilities: Send + Sync {
    /// Label for diagnostics.
    fn id(&self) -> &ToolchainId;

    /// The compiler's own invocation, program plus leading arguments.
    fn compiler_exelist(&self) -> &[String];

    /// The invocation used for linking. Defaults to an exact copy of the
    /// compiler invocation, which models toolchains whose compiler binary
    /// doubles as the linker. Adapters for toolchains with a distinct
    /// linker binary must override.
    fn linker_exelist(&self) -> Vec<String> {
        self.compiler_exelist().to_vec()
    }

    /// Link-time flags enabling the named sanitizer runtime.
    fn sanitizer_link_args(&self, _value: &str) -> ArgList {
        ArgList::new()
    }

    /// Flags enabling link-time optimization.
    fn lto_link_args(&self) -> ArgList {
        ArgList::new()
    }

    /// Whether the linker accepts `@file` response files. True only on
    /// the platform whose tools conventionally support them, independent
    /// of which toolchain is in use.
    fn can_accept_response_file(&self, host: &HostPlatform) -> bool {
        host.supports_response_files()
    }

    /// Flags naming the output file.
    fn output_args(&self, _output: &Path) -> ArgList {
        ArgList::new()
    }

    /// Flags passed on every link, before anything else.
    fn always_args(&self) -> ArgList {
        ArgList::new()
    }

    /// Naming prefix the linker expects on library arguments
    /// (e.g. `lib` on Unix-like systems). Baseline has no convention.
    fn lib_prefix(&self) -> &str {
        ""
    }

    /// Link flags derived from user-facing build options.
    fn option_link_args(&self, _options: &OptionDict) -> ArgList {
        ArgList::new()
    }

    /// Probe whether `args` are jointly accepted on a link line. The
    /// baseline assumes they are not and knows no workaround, forcing
    /// adapters to opt in explicitly.
    fn has_multi_link_args(&self, _args: &[String], _env: &BuildEnvironment) -> ArgProbe {
        ArgProbe::unsupported()
    }

    /// Flags directing separate debug information to `target`.
    fn debugfile_args(&self, _target: &Path) -> ArgList {
        ArgList::new()
    }

    /// Flags that make the output a shared library.
    fn std_shared_lib_link_args(&self) -> ArgList {
        ArgList::new()
    }

    /// Flags that make the output a loadable module. Most toolchains do
    /// not distinguish modules from shared libraries, so the default
    /// delegates.
    fn std_shared_module_args(&self, _options: &OptionDict) -> ArgList {
        self.std_shared_lib_link_args()
    }

    /// Flags forcing every member of the given static archives into the
    /// link.
    fn link_whole_args(&self, _args: &[String]) -> Result<ArgList, LinkerError> {
        Err(LinkerError::unsupported(
            self.id(),
            LinkerFeature::WholeArchive,
        ))
    }

    /// Flags permitting unresolved symbols at link time.
    fn allow_undefined_args(&self) -> Result<ArgList, LinkerError> {
        Err(LinkerError::unsupported(
            self.id(),
            LinkerFeature::AllowUndefined,
        ))
    }

    /// Flags producing a position-independent executable.
    fn pie_link_args(&self) -> Result<ArgList, LinkerError> {
        Err(LinkerError::unsupported(
            self.id(),
            LinkerFeature::PositionIndependentExecutable,
        ))
    }

    /// Flags adjusting how undefined symbols are reported.
    fn undefined_link_args(&self) -> ArgList {
        ArgList::new()
    }

    /// Flags linking in coverage instrumentation support.
    fn coverage_link_args(&self) -> Result<ArgList, LinkerError> {
        Err(LinkerError::unsupported(self.id(), LinkerFeature::Coverage))
    }

    /// Flags rejecting unresolved symbols at link time.
    fn no_undefined_link_args(&self) -> ArgList {
        ArgList::new()
    }

    /// Flags embedding bitcode bundles in the output.
    fn bitcode_args(&self) -> Result<ArgList, LinkerError> {
        Err(LinkerError::unsupported(self.id(), LinkerFeature::Bitcode))
    }

    /// Flags setting the shared library's soname / install name.
    fn soname_args(
        &self,
        _for_machine: MachineChoice,
        _lib: &VersionedLibrary,
    ) -> Result<ArgList, LinkerError> {
        Err(LinkerError::unsupported(self.id(), LinkerFeature::Soname))
    }

    /// Flags embedding runtime library search paths. Baseline emits
    /// nothing: a missing rpath degrades runtime lookup but never
    /// corrupts the binary, so this stays inert rather than failing
    /// (unlike [`soname_args`](Self::soname_args)).
    fn build_rpath_args(
        &self,
        _env: &BuildEnvironment,
        _for_machine: MachineChoice,
        _request: &RpathRequest<'_>,
    ) -> ArgList {
        ArgList::new()
    }
}

/// The baseline capability table as a concrete value.
///
/// Models a toolchain whose compiler binary is also its linker and about
/// which nothing else is known. Useful directly for such toolchains, and
/// as the fall-through behavior adapters inherit by implementing
/// [`LinkerCapabilities`] and overriding selectively.
#[derive(Debug, Clone)]
pub struct BaselineLinker {
    id: ToolchainId,
    exelist: Vec<String>,
}

impl BaselineLinker {
    /// Create a baseline table for the given toolchain invocation.
    pub fn new(id: ToolchainId, exelist: Vec<String>) -> Self {
        BaselineLinker { id, exelist }
    }
}

impl LinkerCapabilities for BaselineLinker {
    fn id(&self) -> &ToolchainId {
        &self.id
    }

    fn compiler_exelist(&self) -> &[String] {
        &self.exelist
    }
}
