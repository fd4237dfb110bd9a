use alloc::string::{String, ToString as _};
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::path::Path;
use crate::steps::BuildSteps;
use crate::targets::Artifact;

/// Aggregate alias every public library artifact is registered under.
pub const LIBRARY_ALIAS: &str = "install-lib";
/// Aggregate alias every public program artifact is registered under.
pub const BINARY_ALIAS: &str = "install-bin";
/// Aggregate alias every installed header set is registered under.
pub const HEADER_ALIAS: &str = "install-include";

const DEFAULT_PREFIX: &str = "/usr/local";

/// Root install prefix plus the three derived install locations. Each
/// subpath can be overridden independently through the option table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    pub prefix: Path,
    pub libdir: Path,
    pub bindir: Path,
    pub includedir: Path,
}

impl InstallPaths {
    pub fn from_options(options: &HashMap<String, String>) -> Self {
        let option = |key: &str, default: &str| -> String {
            options.get(key).cloned().unwrap_or_else(|| default.into())
        };
        let prefix = Path::from(option("prefix", DEFAULT_PREFIX));
        let libdir = prefix.join(option("libdir", "lib"));
        let bindir = prefix.join(option("bindir", "bin"));
        let includedir = prefix.join(option("includedir", "include"));
        Self {
            prefix,
            libdir,
            bindir,
            includedir,
        }
    }
}

/// What gets copied at install time: a declared artifact or a plain file
/// from the source tree (a header).
#[derive(Debug, Clone, PartialEq)]
pub enum InstallSource {
    Artifact(Artifact),
    File(Path),
}

/// One (source, destination directory) pair. Created once per public
/// artifact or header, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallEntry {
    pub source: InstallSource,
    pub dest: Path,
}

/// Accumulates install entries and alias targets during the declaration
/// pass, for bulk emission at the end.
#[derive(Debug, Default)]
pub struct Manifest {
    entries: Vec<InstallEntry>,
    aliases: Vec<(String, Vec<Path>)>,
}

impl Manifest {
    pub(crate) fn add(&mut self, source: InstallSource, dest: Path, alias: &str, target: Path) {
        self.entries.push(InstallEntry { source, dest });
        self.add_alias_target(alias, target);
    }

    fn add_alias_target(&mut self, alias: &str, target: Path) {
        match self.aliases.iter_mut().find(|(name, _)| name == alias) {
            Some((_, targets)) => {
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
            None => self.aliases.push((alias.to_string(), vec![target])),
        }
    }

    pub fn entries(&self) -> &[InstallEntry] {
        &self.entries
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &[Path])> {
        self.aliases
            .iter()
            .map(|(name, targets)| (name.as_str(), targets.as_slice()))
    }

    /// Emit every entry in declaration order, then every alias in
    /// first-registration order.
    pub(crate) fn flush(&self, steps: &dyn BuildSteps) {
        for entry in &self.entries {
            steps.install_file(&entry.dest, &entry.source);
        }
        for (name, targets) in &self.aliases {
            steps.register_alias(name, targets);
        }
    }
}
