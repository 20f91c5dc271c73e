//! Machine and platform descriptors.
//!
//! Cross builds involve two machines: the one running the build and the
//! one the output will run on. Queries that depend on runtime paths
//! (rpath, soname) take the machine choice explicitly so a capability
//! value never has to guess which side of a cross build it serves.

use serde::{Deserialize, Serialize};

/// Which machine a query concerns in a (possibly cross) build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineChoice {
    /// The machine performing the build.
    Build,
    /// The machine the built artifacts will run on.
    Host,
}

impl MachineChoice {
    /// Get the machine name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineChoice::Build => "build",
            MachineChoice::Host => "host",
        }
    }
}

impl std::fmt::Display for MachineChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operating-system family of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Linux,
    Macos,
    Windows,
    /// BSDs, Solaris, and anything else Unix-flavored.
    OtherUnix,
}

impl OsFamily {
    /// Get the family name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Linux => "linux",
            OsFamily::Macos => "macos",
            OsFamily::Windows => "windows",
            OsFamily::OtherUnix => "unix",
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Description of the platform a build runs on.
///
/// Platform-conditional queries take this as an explicit argument rather
/// than probing ambient process state, so they stay pure functions of
/// their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostPlatform {
    /// Operating-system family of the build machine.
    pub os: OsFamily,
}

impl HostPlatform {
    /// Create a platform descriptor for a known OS family.
    pub fn new(os: OsFamily) -> Self {
        HostPlatform { os }
    }

    /// Detect the platform this process is running on.
    pub fn detect() -> Self {
        let os = match std::env::consts::OS {
            "linux" => OsFamily::Linux,
            "macos" => OsFamily::Macos,
            "windows" => OsFamily::Windows,
            _ => OsFamily::OtherUnix,
        };
        HostPlatform { os }
    }

    /// Whether the platform's tools conventionally accept `@file`
    /// response files to work around command-line length limits.
    pub fn supports_response_files(&self) -> bool {
        self.os == OsFamily::Windows
    }
}

/// Build-configuration context passed into environment-sensitive queries.
///
/// This is the slice of the surrounding build system's environment that
/// linker capability queries are allowed to see. It carries no mutable
/// state; one value is constructed per toolchain configuration at setup
/// time and shared read-only for the configuration's lifetime.
#[derive(Debug, Clone)]
pub struct BuildEnvironment {
    /// Platform of the machine running the build.
    pub build_platform: HostPlatform,
    /// Platform of the machine the outputs run on. Equal to
    /// `build_platform` unless cross compiling.
    pub host_platform: HostPlatform,
}

impl BuildEnvironment {
    /// Create an environment for a native (non-cross) build.
    pub fn native(platform: HostPlatform) -> Self {
        BuildEnvironment {
            build_platform: platform,
            host_platform: platform,
        }
    }

    /// Create an environment for a cross build.
    pub fn cross(build_platform: HostPlatform, host_platform: HostPlatform) -> Self {
        BuildEnvironment {
            build_platform,
            host_platform,
        }
    }

    /// Platform descriptor for the given machine.
    pub fn platform_for(&self, machine: MachineChoice) -> HostPlatform {
        match machine {
            MachineChoice::Build => self.build_platform,
            MachineChoice::Host => self.host_platform,
        }
    }
}
