use alloc::format;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use crate::mode::Mode;
use crate::path::Path;
use crate::platform::Platform;
use crate::probe::DependencyFlags;

/// Token in flag strings standing for the final output file name of the
/// artifact being linked. Substituted once the output name is known.
pub const OUTPUT_TOKEN: &str = "@OUTPUT@";

const LOCAL_INCLUDE: &str = ".";

/// Include paths of the bundled HTTP parser and thread pool helpers,
/// needed by every consumer of the composed environment.
const VENDORED_INCLUDES: &[&str] = &[
    "3rdparty/libevhtp",
    "3rdparty/libevhtp/htparse",
    "3rdparty/libevhtp/evthr",
];

/// A fully-specified compilation environment.
///
/// An Environment is a plain value: specialization for an artifact always
/// goes through pure operations (`compose`, `substitute_output`) or a
/// clone inside the artifact constructors, so two artifacts built from
/// the same environment can never contaminate each other's flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    pub cc: String,
    pub cxx: String,
    /// Compile flags common to C and C++.
    pub cc_flags: Vec<String>,
    /// C-only compile flags.
    pub c_flags: Vec<String>,
    /// C++-only compile flags.
    pub cxx_flags: Vec<String>,
    /// Preprocessor flags.
    pub cpp_flags: Vec<String>,
    pub include_paths: Vec<Path>,
    pub link_flags: Vec<String>,
    /// Extra flags applied after `link_flags` when linking shared
    /// artifacts.
    pub shared_link_flags: Vec<String>,
    /// Extra compile flags for objects destined for shared artifacts.
    pub shared_compile_flags: Vec<String>,
    /// Link-library names, in link order.
    pub libs: Vec<String>,
    pub shared_prefix: String,
    pub shared_suffix: String,
}

impl Environment {
    /// The file name a shared artifact with this logical name gets.
    pub fn shared_file_name(&self, name: &str) -> String {
        format!("{}{}{}", self.shared_prefix, name, self.shared_suffix)
    }

    /// Returns a copy with every `@OUTPUT@` token in the link flag lists
    /// replaced by `file`.
    pub fn substitute_output(&self, file: &str) -> Environment {
        let mut env = self.clone();
        let flags = env
            .link_flags
            .iter_mut()
            .chain(env.shared_link_flags.iter_mut());
        for flag in flags {
            if flag.contains(OUTPUT_TOKEN) {
                *flag = flag.replace(OUTPUT_TOKEN, file);
            }
        }
        env
    }
}

/// Merge the platform base toolchain, the mode overlay, and the
/// dependency-probe flags into one environment.
///
/// Toolchain selection and shared naming replace whatever the base holds;
/// every flag list appends after the caller's base entries, and append
/// order is preserved per list. The result is a value; the composer keeps
/// no reference to it.
pub fn compose(
    base: &Environment,
    platform: Platform,
    mode: Mode,
    deps: &DependencyFlags,
) -> Environment {
    let mut env = base.clone();
    let toolchain = platform.toolchain();

    env.cc = toolchain.cc.to_string();
    env.cxx = toolchain.cxx.to_string();
    env.shared_prefix = toolchain.shared_prefix.to_string();
    env.shared_suffix = toolchain.shared_suffix.to_string();
    extend(&mut env.cc_flags, toolchain.cc_flags);
    extend(&mut env.c_flags, toolchain.c_flags);
    extend(&mut env.cxx_flags, toolchain.cxx_flags);
    extend(&mut env.link_flags, toolchain.link_flags);
    extend(&mut env.shared_link_flags, toolchain.shared_link_flags);
    extend(&mut env.shared_compile_flags, toolchain.shared_compile_flags);

    let overlay = mode.overlay(platform);
    extend(&mut env.cc_flags, overlay.cc_flags);
    extend(&mut env.c_flags, overlay.c_flags);
    extend(&mut env.cxx_flags, overlay.cxx_flags);
    extend(&mut env.link_flags, overlay.link_flags);

    extend_split(&mut env.cc_flags, &deps.cflags);
    extend_split(&mut env.link_flags, &deps.libs);

    env.include_paths.push(Path::from(LOCAL_INCLUDE));
    for dir in VENDORED_INCLUDES {
        env.include_paths.push(Path::from(dir));
    }

    env
}

fn extend(list: &mut Vec<String>, flags: &[&str]) {
    list.extend(flags.iter().map(|flag| flag.to_string()));
}

fn extend_split(list: &mut Vec<String>, flags: &str) {
    list.extend(flags.split_whitespace().map(String::from));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps() -> DependencyFlags {
        DependencyFlags {
            cflags: "-I/opt/event/include".into(),
            libs: "-levent -levent_pthreads".into(),
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let base = Environment::default();
        let a = compose(&base, Platform::Linux, Mode::Release, &deps());
        let b = compose(&base, Platform::Linux, Mode::Release, &deps());
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_keeps_base_flags_first() {
        let mut base = Environment::default();
        base.cc_flags.push("-Wall".into());
        let env = compose(&base, Platform::Darwin, Mode::Development, &deps());
        assert_eq!(env.cc_flags[0], "-Wall");
        assert_eq!(env.cc_flags[1], "-fcolor-diagnostics");
    }

    #[test]
    fn test_compose_replaces_the_toolchain() {
        let mut base = Environment::default();
        base.cc = "gcc".into();
        base.cxx = "g++".into();
        let env = compose(&base, Platform::Linux, Mode::Development, &deps());
        assert_eq!(env.cc, "clang");
        assert_eq!(env.cxx, "clang++");
    }

    #[test]
    fn test_compose_appends_probe_flags_last() {
        let env = compose(
            &Environment::default(),
            Platform::Linux,
            Mode::Release,
            &deps(),
        );
        assert_eq!(env.cc_flags.last().unwrap(), "-I/opt/event/include");
        let n = env.link_flags.len();
        assert_eq!(&env.link_flags[n - 2..], ["-levent", "-levent_pthreads"]);
    }

    #[test]
    fn test_compose_appends_local_and_vendored_includes() {
        let env = compose(
            &Environment::default(),
            Platform::Darwin,
            Mode::Development,
            &DependencyFlags::default(),
        );
        let paths: Vec<&str> = env.include_paths.iter().map(|p| p.as_ref()).collect();
        assert_eq!(
            paths,
            [
                ".",
                "3rdparty/libevhtp",
                "3rdparty/libevhtp/htparse",
                "3rdparty/libevhtp/evthr",
            ]
        );
    }

    #[test]
    fn test_substitute_output_resolves_the_token() {
        let env = compose(
            &Environment::default(),
            Platform::Linux,
            Mode::Development,
            &DependencyFlags::default(),
        );
        let resolved = env.substitute_output("libfoo.so");
        let pos = resolved
            .shared_link_flags
            .iter()
            .position(|f| f == "-soname")
            .unwrap();
        assert_eq!(resolved.shared_link_flags[pos + 1], "libfoo.so");
        // the source environment still carries the unresolved token
        assert!(env.shared_link_flags.iter().any(|f| f.contains(OUTPUT_TOKEN)));
    }

    #[test]
    fn test_shared_file_name() {
        let env = compose(
            &Environment::default(),
            Platform::Darwin,
            Mode::Development,
            &DependencyFlags::default(),
        );
        assert_eq!(env.shared_file_name("support"), "libsupport.dylib");
    }
}
