use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString as _};
use alloc::vec;
use alloc::vec::Vec;

use crate::env::Environment;
use crate::install::{self, InstallPaths, InstallSource, Manifest};
use crate::os::Os;
use crate::path::Path;
use crate::platform::Platform;
use crate::steps::BuildSteps;

/// System libraries closing every internal program's link line on Linux.
/// The GNU linker discards a library's symbol table once it has been
/// scanned, so anything needed to satisfy symbols introduced by later
/// libraries must be re-listed after them: these must stay at the very
/// end, after the whole default-library registry.
pub const TRAILING_SYSTEM_LIBS: &[&str] = &["event", "event_pthreads", "pq", "unwind"];

/// Plugins carry this suffix and no prefix on both platforms, so the
/// artifact file name is exactly the requested logical name.
pub const PLUGIN_SUFFIX: &str = ".plugin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    StaticLibrary,
    SharedLibrary,
    Executable,
}

/// A declared build target, as handed to the build-graph backend. The
/// environment is fully specialized for this one artifact, output-name
/// token included.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub name: String,
    pub kind: TargetKind,
    pub sources: Vec<Path>,
    pub output: Path,
    pub env: Environment,
}

/// Handle to a declared artifact, used for install registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub name: String,
    pub kind: TargetKind,
    pub file: Path,
}

/// One configuration pass: the composed environment, the install paths,
/// the default-library registry and the install manifest, all scoped to
/// this object instead of process-global state.
///
/// Declaration order matters: programs snapshot the registry as declared,
/// so libraries must be registered before the programs that need them.
pub struct Build {
    os: Rc<dyn Os>,
    steps: Rc<dyn BuildSteps>,
    platform: Platform,
    env: Environment,
    paths: InstallPaths,
    default_libs: Vec<String>,
    programs_declared: bool,
    manifest: Manifest,
}

impl core::fmt::Debug for Build {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Build")
            .field("platform", &self.platform)
            .field("env", &self.env)
            .field("paths", &self.paths)
            .field("default_libs", &self.default_libs)
            .field("programs_declared", &self.programs_declared)
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

impl Build {
    pub(crate) fn new(
        os: Rc<dyn Os>,
        steps: Rc<dyn BuildSteps>,
        platform: Platform,
        env: Environment,
        paths: InstallPaths,
    ) -> Self {
        Self {
            os,
            steps,
            platform,
            env,
            paths,
            default_libs: Vec::new(),
            programs_declared: false,
            manifest: Manifest::default(),
        }
    }

    /// The composed environment this pass started from.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn install_paths(&self) -> &InstallPaths {
        &self.paths
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Append libraries every subsequently-declared program links
    /// against. Append-only; earlier program declarations are not
    /// revisited.
    pub fn add_default_libraries<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.programs_declared {
            self.os.print(
                "warning: default libraries registered after a program \
                 was declared; earlier programs will not link them",
            );
        }
        self.default_libs.extend(names.into_iter().map(Into::into));
    }

    /// Declare an internal library and register it for installation.
    ///
    /// Darwin deployment resolves internal libraries dynamically through
    /// rpaths, so the artifact is a shared library there; Linux links
    /// them statically into each program, sidestepping link-order issues
    /// for everything that is not a system library.
    ///
    /// Supplied headers are installed under the include prefix with their
    /// containing subdirectory preserved.
    pub fn library(
        &mut self,
        env: &Environment,
        name: &str,
        sources: &[Path],
        headers: &[Path],
    ) -> Artifact {
        let env = env.clone();
        let (kind, file) = match self.platform {
            Platform::Darwin => (TargetKind::SharedLibrary, env.shared_file_name(name)),
            Platform::Linux => (TargetKind::StaticLibrary, format!("lib{name}.a")),
        };
        let artifact = self.declare(env, name, kind, sources, &file);

        let dest = self.paths.libdir.clone();
        let target = dest.join(&file);
        self.manifest.add(
            InstallSource::Artifact(artifact.clone()),
            dest,
            install::LIBRARY_ALIAS,
            target,
        );

        for header in headers {
            let subdir = header.parent();
            let (dest, top) = if subdir.is_empty() {
                (self.paths.includedir.clone(), self.paths.includedir.clone())
            } else {
                (
                    self.paths.includedir.join(&subdir),
                    self.paths.includedir.join(header.first_component()),
                )
            };
            self.manifest
                .add(InstallSource::File(header.clone()), dest, install::HEADER_ALIAS, top);
        }

        artifact
    }

    /// Declare a program used only inside the build: no install
    /// registration.
    ///
    /// On Darwin each rpath becomes a loader search path relative to the
    /// executable's own location and the default-library registry is
    /// appended to the link-library list. On Linux rpaths are ignored
    /// (everything internal is statically resolved) and the registry is
    /// followed by `TRAILING_SYSTEM_LIBS`, in that exact order.
    pub fn internal_program(
        &mut self,
        env: &Environment,
        name: &str,
        sources: &[Path],
        rpaths: &[&str],
    ) -> Artifact {
        let mut env = env.clone();
        match self.platform {
            Platform::Darwin => {
                for rpath in rpaths {
                    let mut rpath = (*rpath).to_string();
                    if !rpath.ends_with('/') {
                        rpath.push('/');
                    }
                    env.link_flags.push("-rpath".to_string());
                    env.link_flags.push(format!("@executable_path/{rpath}"));
                }
                env.libs.extend(self.default_libs.iter().cloned());
            }
            Platform::Linux => {
                env.libs.extend(self.default_libs.iter().cloned());
                env.libs
                    .extend(TRAILING_SYSTEM_LIBS.iter().map(|lib| lib.to_string()));
            }
        }
        let artifact = self.declare(env, name, TargetKind::Executable, sources, name);
        self.programs_declared = true;
        artifact
    }

    /// Declare a program and register it for installation under the
    /// binary prefix. Installation is the only difference from
    /// `internal_program`.
    pub fn program(
        &mut self,
        env: &Environment,
        name: &str,
        sources: &[Path],
        rpaths: &[&str],
    ) -> Artifact {
        let artifact = self.internal_program(env, name, sources, rpaths);
        let dest = self.paths.bindir.clone();
        let target = dest.join(&artifact.file);
        self.manifest.add(
            InstallSource::Artifact(artifact.clone()),
            dest,
            install::BINARY_ALIAS,
            target,
        );
        artifact
    }

    /// Declare a loadable plugin.
    ///
    /// Darwin links a loadable bundle with a flat namespace and undefined
    /// symbols suppressed, so host-process symbols resolve at load time;
    /// Linux links a conventional shared object. The constructor never
    /// registers plugins for installation.
    pub fn plugin(&mut self, env: &Environment, name: &str, sources: &[Path]) -> Artifact {
        let mut env = env.clone();
        match self.platform {
            Platform::Darwin => {
                env.shared_link_flags = vec![
                    "-bundle".to_string(),
                    "-flat_namespace".to_string(),
                    "-undefined".to_string(),
                    "suppress".to_string(),
                ];
            }
            Platform::Linux => {
                env.shared_link_flags = vec!["-shared".to_string()];
                env.shared_compile_flags.push("-fPIC".to_string());
            }
        }
        env.shared_prefix = String::new();
        env.shared_suffix = PLUGIN_SUFFIX.to_string();
        let file = env.shared_file_name(name);
        self.declare(env, name, TargetKind::SharedLibrary, sources, &file)
    }

    /// Emit the accumulated install manifest, consuming the pass.
    pub fn install(self) {
        self.manifest.flush(self.steps.as_ref());
    }

    fn declare(
        &self,
        env: Environment,
        name: &str,
        kind: TargetKind,
        sources: &[Path],
        output: &str,
    ) -> Artifact {
        let env = env.substitute_output(output);
        let target = Target {
            name: name.to_string(),
            kind,
            sources: sources.to_vec(),
            output: Path::from(output),
            env,
        };
        match kind {
            TargetKind::StaticLibrary => self.steps.build_static_library(&target),
            TargetKind::SharedLibrary => self.steps.build_shared_library(&target),
            TargetKind::Executable => self.steps.build_executable(&target),
        }
        self.os.print(&format!("Declared {kind:?}: {output}"));
        Artifact {
            name: name.to_string(),
            kind,
            file: Path::from(output),
        }
    }
}
