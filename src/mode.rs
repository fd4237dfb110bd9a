use alloc::string::ToString as _;
use core::fmt;

use crate::error::ConfigError;
use crate::platform::Platform;

/// Build mode. There is no third option: an unrecognized mode string is a
/// fatal configuration error, never silently treated as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Release,
    #[default]
    Development,
}

/// Flags layered on top of the platform base for one (mode, platform)
/// pair. Lists stay empty when the mode adds nothing for that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagOverlay {
    pub cc_flags: &'static [&'static str],
    pub c_flags: &'static [&'static str],
    pub cxx_flags: &'static [&'static str],
    pub link_flags: &'static [&'static str],
}

impl FlagOverlay {
    const EMPTY: FlagOverlay = FlagOverlay {
        cc_flags: &[],
        c_flags: &[],
        cxx_flags: &[],
        link_flags: &[],
    };
}

impl Mode {
    pub fn resolve(name: &str) -> Result<Mode, ConfigError> {
        match name {
            "release" => Ok(Mode::Release),
            "development" => Ok(Mode::Development),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }

    /// Debug symbols stay on in release builds.
    pub fn overlay(self, platform: Platform) -> FlagOverlay {
        match (self, platform) {
            (Mode::Release, Platform::Darwin) => FlagOverlay {
                cc_flags: &["-O3", "-g", "-flto", "-emit-llvm"],
                link_flags: &["-O3", "-g", "-flto"],
                ..FlagOverlay::EMPTY
            },
            (Mode::Release, Platform::Linux) => FlagOverlay {
                cc_flags: &["-O3", "-g", "-flto"],
                link_flags: &["-flto"],
                ..FlagOverlay::EMPTY
            },
            (Mode::Development, _) => FlagOverlay {
                cc_flags: &["-O0", "-g", "-DDEBUG=1"],
                ..FlagOverlay::EMPTY
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Release => "release",
            Mode::Development => "development",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_modes() {
        assert_eq!(Mode::resolve("release").unwrap(), Mode::Release);
        assert_eq!(Mode::resolve("development").unwrap(), Mode::Development);
    }

    #[test]
    fn test_resolve_rejects_anything_else() {
        let err = Mode::resolve("debug").unwrap_err();
        assert_eq!(err, ConfigError::UnknownMode("debug".to_string()));
        assert!(err.to_string().contains("debug"));
    }

    #[test]
    fn test_release_optimizes_and_keeps_debug_symbols() {
        for platform in [Platform::Darwin, Platform::Linux] {
            let overlay = Mode::Release.overlay(platform);
            assert!(overlay.cc_flags.contains(&"-O3"));
            assert!(overlay.cc_flags.contains(&"-g"));
            assert!(overlay.cc_flags.contains(&"-flto"));
        }
    }

    #[test]
    fn test_bitcode_emission_is_darwin_only() {
        assert!(
            Mode::Release
                .overlay(Platform::Darwin)
                .cc_flags
                .contains(&"-emit-llvm")
        );
        assert!(
            !Mode::Release
                .overlay(Platform::Linux)
                .cc_flags
                .contains(&"-emit-llvm")
        );
    }

    #[test]
    fn test_development_disables_optimization() {
        for platform in [Platform::Darwin, Platform::Linux] {
            let overlay = Mode::Development.overlay(platform);
            assert_eq!(overlay.cc_flags, ["-O0", "-g", "-DDEBUG=1"]);
            assert!(overlay.link_flags.is_empty());
        }
    }

    #[test]
    fn test_default_mode_is_development() {
        assert_eq!(Mode::default(), Mode::Development);
    }
}
