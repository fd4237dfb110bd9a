use alloc::string::String;
use core::fmt;

/// Fatal configuration errors. The configuration pass aborts on the first
/// one; no partial environment is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedPlatform(String),
    UnknownMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::UnsupportedPlatform(system) => {
                write!(f, "Unsupported platform: {}", system)
            }
            ConfigError::UnknownMode(mode) => {
                write!(
                    f,
                    "Invalid mode, expected 'development' or 'release', got: {}",
                    mode
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}
