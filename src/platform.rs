use alloc::string::ToString as _;

use crate::error::ConfigError;

/// The two supported platform families. Anything else is a fatal
/// configuration error; there is no fallback platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Darwin,
    Linux,
}

/// Base toolchain settings for one platform: compiler pair, base flag
/// lists, and the shared-artifact naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toolchain {
    pub cc: &'static str,
    pub cxx: &'static str,
    pub cc_flags: &'static [&'static str],
    pub c_flags: &'static [&'static str],
    pub cxx_flags: &'static [&'static str],
    pub link_flags: &'static [&'static str],
    pub shared_link_flags: &'static [&'static str],
    pub shared_compile_flags: &'static [&'static str],
    pub shared_prefix: &'static str,
    pub shared_suffix: &'static str,
}

impl Platform {
    pub fn resolve(system: &str) -> Result<Platform, ConfigError> {
        match system {
            "darwin" | "macos" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            other => Err(ConfigError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn toolchain(self) -> Toolchain {
        match self {
            Platform::Darwin => Toolchain {
                cc: "clang",
                cxx: "clang++",
                // The build wrapper owns the TTY, so clang cannot
                // autodetect color support.
                cc_flags: &["-fcolor-diagnostics"],
                c_flags: &["-I/usr/local/include"],
                cxx_flags: &["-std=c++1y"],
                link_flags: &["-rpath", "@loader_path/"],
                shared_link_flags: &["-dynamiclib", "-install_name", "@rpath/@OUTPUT@"],
                shared_compile_flags: &[],
                shared_prefix: "lib",
                shared_suffix: ".dylib",
            },
            Platform::Linux => Toolchain {
                cc: "clang",
                cxx: "clang++",
                cc_flags: &["-fcolor-diagnostics"],
                c_flags: &[],
                cxx_flags: &["-std=c++11", "-stdlib=libc++"],
                // Plugins resolve host symbols at load time; every
                // symbol stays exported.
                link_flags: &["-pthread", "-stdlib=libc++", "--export-dynamic"],
                shared_link_flags: &[
                    "-shared",
                    "-fvisibility=default",
                    "-fPIC",
                    "-soname",
                    "@OUTPUT@",
                ],
                shared_compile_flags: &["-fPIC"],
                shared_prefix: "lib",
                shared_suffix: ".so",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_systems() {
        assert_eq!(Platform::resolve("darwin").unwrap(), Platform::Darwin);
        assert_eq!(Platform::resolve("macos").unwrap(), Platform::Darwin);
        assert_eq!(Platform::resolve("linux").unwrap(), Platform::Linux);
    }

    #[test]
    fn test_resolve_rejects_anything_else() {
        let err = Platform::resolve("freebsd").unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnsupportedPlatform("freebsd".to_string())
        );
        assert!(err.to_string().contains("freebsd"));
    }

    #[test]
    fn test_toolchains_share_the_compiler_pair() {
        let darwin = Platform::Darwin.toolchain();
        let linux = Platform::Linux.toolchain();
        assert_eq!(darwin.cc, linux.cc);
        assert_eq!(darwin.cxx, linux.cxx);
    }

    #[test]
    fn test_darwin_shared_naming() {
        let tc = Platform::Darwin.toolchain();
        assert_eq!(tc.shared_prefix, "lib");
        assert_eq!(tc.shared_suffix, ".dylib");
        assert!(tc.shared_link_flags.contains(&"-install_name"));
    }

    #[test]
    fn test_linux_exports_symbols_and_builds_pic() {
        let tc = Platform::Linux.toolchain();
        assert!(tc.link_flags.contains(&"--export-dynamic"));
        assert!(tc.link_flags.contains(&"-pthread"));
        assert_eq!(tc.shared_compile_flags, ["-fPIC"]);
    }
}
