//! Override composition across the capability table.
//!
//! Plays the role of a concrete toolchain adapter: a GNU-style
//! compiler-driver linker that overrides the facets it supports and
//! inherits the baseline answer for everything else.

use std::path::Path;

use berth::{
    ArgList, ArgProbe, BuildEnvironment, EnvLinkerFlags, HostPlatform, LinkerCapabilities,
    LinkerError, LinkerFeature, MachineChoice, OsFamily, RpathRequest, ToolchainId,
    VersionedLibrary,
};

/// GNU-style toolchain where the compiler driver performs the link.
struct GnuDriverLinker {
    id: ToolchainId,
    exelist: Vec<String>,
}

impl GnuDriverLinker {
    fn new() -> Self {
        GnuDriverLinker {
            id: ToolchainId::new("gcc"),
            exelist: vec!["gcc".to_string()],
        }
    }
}

impl LinkerCapabilities for GnuDriverLinker {
    fn id(&self) -> &ToolchainId {
        &self.id
    }

    fn compiler_exelist(&self) -> &[String] {
        &self.exelist
    }

    fn output_args(&self, output: &Path) -> ArgList {
        ["-o", &output.display().to_string()].into_iter().collect()
    }

    fn lib_prefix(&self) -> &str {
        "lib"
    }

    fn std_shared_lib_link_args(&self) -> ArgList {
        ["-shared"].into_iter().collect()
    }

    fn pie_link_args(&self) -> Result<ArgList, LinkerError> {
        Ok(["-pie"].into_iter().collect())
    }

    fn link_whole_args(&self, args: &[String]) -> Result<ArgList, LinkerError> {
        let mut out = ArgList::new();
        out.push("-Wl,--whole-archive");
        out.extend(args.iter().cloned());
        out.push("-Wl,--no-whole-archive");
        Ok(out)
    }

    fn soname_args(
        &self,
        _for_machine: MachineChoice,
        lib: &VersionedLibrary,
    ) -> Result<ArgList, LinkerError> {
        let soname = match &lib.soversion {
            Some(v) => format!("{}{}.{}.{}", lib.prefix, lib.name, lib.suffix, v),
            None => lib.filename(),
        };
        Ok([format!("-Wl,-soname,{}", soname)].into_iter().collect())
    }

    fn build_rpath_args(
        &self,
        _env: &BuildEnvironment,
        _for_machine: MachineChoice,
        request: &RpathRequest<'_>,
    ) -> ArgList {
        let mut paths: Vec<String> = request
            .rpath_dirs
            .iter()
            .map(|d| format!("$ORIGIN/{}", d.display()))
            .collect();
        if !request.build_rpath.is_empty() {
            paths.push(request.build_rpath.to_string());
        }
        [format!("-Wl,-rpath,{}", paths.join(":"))].into_iter().collect()
    }

    fn has_multi_link_args(&self, args: &[String], _env: &BuildEnvironment) -> ArgProbe {
        // The driver forwards unknown -Wl args to the linker untouched.
        if args.iter().all(|a| a.starts_with("-Wl,")) {
            ArgProbe::supported()
        } else {
            ArgProbe::unsupported()
        }
    }
}

#[test]
fn overridden_facets_answer() {
    let linker = GnuDriverLinker::new();

    assert_eq!(linker.output_args(Path::new("libfoo.so")).as_slice(), &["-o", "libfoo.so"]);
    assert_eq!(linker.lib_prefix(), "lib");
    assert_eq!(linker.pie_link_args().unwrap().as_slice(), &["-pie"]);

    let lib = VersionedLibrary::new("lib", "foo", "so").with_soversion("4");
    let args = linker.soname_args(MachineChoice::Host, &lib).unwrap();
    assert_eq!(args.as_slice(), &["-Wl,-soname,libfoo.so.4"]);
}

#[test]
fn unoverridden_facets_fall_through_to_baseline() {
    let linker = GnuDriverLinker::new();

    // Identity defaults still apply
    assert_eq!(linker.linker_exelist(), vec!["gcc"]);
    assert!(linker.lto_link_args().is_empty());
    assert!(linker.always_args().is_empty());

    // Facets gcc never opted into still hard-fail with its identity
    match linker.coverage_link_args() {
        Err(LinkerError::UnsupportedFeature { toolchain, feature }) => {
            assert_eq!(toolchain.as_str(), "gcc");
            assert_eq!(feature, LinkerFeature::Coverage);
        }
        other => panic!("expected unsupported coverage, got {:?}", other),
    }
    assert!(linker.bitcode_args().is_err());
    assert!(linker.allow_undefined_args().is_err());
}

#[test]
fn rpath_override_encodes_build_tree_paths() {
    let linker = GnuDriverLinker::new();
    let env = BuildEnvironment::native(HostPlatform::new(OsFamily::Linux));
    let dirs = vec![std::path::PathBuf::from("subdir/lib")];
    let request = RpathRequest {
        build_dir: Path::new("/build"),
        from_dir: Path::new("/build/subdir"),
        rpath_dirs: &dirs,
        build_rpath: "/extra/lib",
        install_rpath: "$ORIGIN/../lib",
    };

    let args = linker.build_rpath_args(&env, MachineChoice::Host, &request);
    assert_eq!(args.as_slice(), &["-Wl,-rpath,$ORIGIN/subdir/lib:/extra/lib"]);
}

#[test]
fn probe_override_is_selective() {
    let linker = GnuDriverLinker::new();
    let env = BuildEnvironment::native(HostPlatform::new(OsFamily::Linux));

    let wl = vec!["-Wl,-z,now".to_string(), "-Wl,-z,relro".to_string()];
    assert!(linker.has_multi_link_args(&wl, &env).supported);

    let plain = vec!["--unknown-flag".to_string()];
    assert_eq!(linker.has_multi_link_args(&plain, &env), ArgProbe::unsupported());
}

#[test]
fn response_file_acceptance_is_platform_driven_for_adapters_too() {
    let linker = GnuDriverLinker::new();
    assert!(linker.can_accept_response_file(&HostPlatform::new(OsFamily::Windows)));
    assert!(!linker.can_accept_response_file(&HostPlatform::new(OsFamily::Linux)));
}

#[test]
fn backend_assembles_link_line_from_queries_plus_env() {
    let linker = GnuDriverLinker::new();
    let lib = VersionedLibrary::new("lib", "foo", "so").with_soversion("2");

    // The order here is the backend's choice; the queries only supply
    // the pieces.
    let mut cmd = ArgList::from(linker.linker_exelist());
    cmd.extend(linker.always_args());
    cmd.extend(linker.std_shared_lib_link_args());
    cmd.extend(linker.soname_args(MachineChoice::Host, &lib).unwrap());
    cmd.extend(linker.output_args(Path::new("libfoo.so.2")));

    let env_flags = EnvLinkerFlags::from_value("LDFLAGS", r#"-L/opt/lib "-Wl,-O1""#);
    cmd.extend(env_flags.args().unwrap());

    assert_eq!(
        cmd.as_slice(),
        &[
            "gcc",
            "-shared",
            "-Wl,-soname,libfoo.so.2",
            "-o",
            "libfoo.so.2",
            "-L/opt/lib",
            "-Wl,-O1",
        ]
    );
}
