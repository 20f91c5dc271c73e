//! Versioned shared-library naming.

/// Description of a shared library's on-disk and logical name, consumed
/// by soname-style queries.
///
/// On ELF platforms the soname is typically `{prefix}{name}.{suffix}.{soversion}`;
/// on Darwin the install name plus the compatibility/current version pair
/// play the same role. The descriptor carries both so one query signature
/// serves every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedLibrary {
    /// Platform naming prefix (e.g. `lib` on Unix-like systems).
    pub prefix: String,
    /// Base name of the library, without prefix or extension.
    pub name: String,
    /// Platform file extension (e.g. `so`, `dylib`, `dll`).
    pub suffix: String,
    /// ABI version embedded in the logical name (e.g. `4` in `libfoo.so.4`).
    pub soversion: Option<String>,
    /// Darwin (compatibility_version, current_version) pair, when targeting
    /// Apple platforms.
    pub darwin_versions: Option<(String, String)>,
    /// Whether this is a loadable module rather than a linkable library.
    /// Modules are dlopen-ed, not linked against, and some platforms name
    /// and version them differently.
    pub is_shared_module: bool,
}

impl VersionedLibrary {
    /// Create a descriptor for an unversioned shared library.
    pub fn new(
        prefix: impl Into<String>,
        name: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        VersionedLibrary {
            prefix: prefix.into(),
            name: name.into(),
            suffix: suffix.into(),
            soversion: None,
            darwin_versions: None,
            is_shared_module: false,
        }
    }

    /// Set the ABI soversion.
    pub fn with_soversion(mut self, soversion: impl Into<String>) -> Self {
        self.soversion = Some(soversion.into());
        self
    }

    /// Set the Darwin compatibility/current version pair.
    pub fn with_darwin_versions(
        mut self,
        compatibility: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        self.darwin_versions = Some((compatibility.into(), current.into()));
        self
    }

    /// Mark the library as a loadable module.
    pub fn as_shared_module(mut self) -> Self {
        self.is_shared_module = true;
        self
    }

    /// The on-disk file name, without any version decoration.
    pub fn filename(&self) -> String {
        format!("{}{}.{}", self.prefix, self.name, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename() {
        let lib = VersionedLibrary::new("lib", "foo", "so").with_soversion("4");
        assert_eq!(lib.filename(), "libfoo.so");
        assert_eq!(lib.soversion.as_deref(), Some("4"));
    }

    #[test]
    fn test_module_flag() {
        let module = VersionedLibrary::new("", "plugin", "dylib")
            .with_darwin_versions("1.0.0", "1.2.0")
            .as_shared_module();
        assert!(module.is_shared_module);
        assert_eq!(
            module.darwin_versions,
            Some(("1.0.0".to_string(), "1.2.0".to_string()))
        );
    }
}
