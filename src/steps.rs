pub use crate::install::InstallSource;
pub use crate::targets::Target;
use crate::path::Path;

/// Build steps abstraction for generating build system output
///
/// This trait defines the interface for different build-graph backends
/// (e.g., Ninja, Make, etc.) to generate their specific build
/// instructions. The core only declares artifacts through it; dependency
/// tracking, incremental rebuilds and actual compilation belong to the
/// implementation.
pub trait BuildSteps: 'static {
    /// Generates build instructions for building a static library
    ///
    /// The implementation is expected to compile the target's sources
    /// with the compile-flag lists of its environment and archive the
    /// objects into the target's output file.
    ///
    /// # Arguments
    /// * `target` - The build target carrying sources, the specialized
    ///   environment, and the output file name
    fn build_static_library(&self, target: &Target);

    /// Generates build instructions for building a shared library
    ///
    /// The target's environment carries the shared-link flags to apply
    /// after the ordinary link flags, with any output-name token already
    /// resolved.
    ///
    /// # Arguments
    /// * `target` - The build target carrying sources, the specialized
    ///   environment, and the output file name
    fn build_shared_library(&self, target: &Target);

    /// Generates build instructions for building an executable
    ///
    /// The target's environment carries the link-library list in link
    /// order; backends for order-sensitive linkers must emit it verbatim.
    ///
    /// # Arguments
    /// * `target` - The build target carrying sources, the specialized
    ///   environment, and the output file name
    fn build_executable(&self, target: &Target);

    /// Generates build instructions for installing one file
    ///
    /// # Arguments
    /// * `dest` - The directory the file is copied into
    /// * `source` - A declared artifact or a plain source-tree file
    fn install_file(&self, dest: &Path, source: &InstallSource);

    /// Registers a named alias resolving to a set of install targets
    ///
    /// # Arguments
    /// * `name` - The alias name (e.g. an aggregate install target)
    /// * `targets` - The paths the alias stands for
    fn register_alias(&self, name: &str, targets: &[Path]);
}
