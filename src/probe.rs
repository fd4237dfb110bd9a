use alloc::string::{String, ToString as _};
use alloc::vec::Vec;

use crate::os::Os;

/// Packages every composed environment depends on: the event loop and its
/// threading companion.
pub const EVENT_PACKAGES: &[&str] = &["libevent", "libevent_pthreads"];

/// The database client, probed separately by the consumers that need it.
pub const DATABASE_PACKAGES: &[&str] = &["libpq"];

/// Opaque compiler and linker flags for one package group, as reported by
/// the system's package metadata tool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyFlags {
    pub cflags: String,
    pub libs: String,
}

/// Query `pkg-config` for a package group.
///
/// A failed probe degrades to empty flag strings, indistinguishable from
/// "no flags needed"; missing packages surface later as compiler or
/// linker diagnostics, not configuration errors.
pub fn query(os: &dyn Os, packages: &[&str]) -> DependencyFlags {
    DependencyFlags {
        cflags: run(os, "--cflags", packages),
        libs: run(os, "--libs", packages),
    }
}

fn run(os: &dyn Os, what: &str, packages: &[&str]) -> String {
    let Ok(pkg_config) = os.find_program("pkg-config") else {
        return String::new();
    };

    let mut args = Vec::with_capacity(packages.len() + 1);
    args.push(what);
    args.extend_from_slice(packages);

    match os.run_command(&pkg_config, &args) {
        Ok(out) if out.returncode == 0 => out.stdout.trim().to_string(),
        _ => String::new(),
    }
}
