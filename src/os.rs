use alloc::string::String;

pub use crate::path::Path;

pub type Result<T> = anyhow::Result<T>;

pub struct MachineInfo {
    pub system: String,
    pub cpu: String,
    pub endian: String,
}

pub struct RunCommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub returncode: i64,
}

/// Host operating environment boundary.
///
/// The core never reads the process environment, touches the filesystem,
/// or spawns tools directly; everything goes through this trait.
pub trait Os: 'static {
    fn print(&self, msg: &str);
    fn get_env(&self, key: &str) -> Option<String>;

    /// The machine the configuration pass runs on. The `system` field is
    /// the platform identifier fed to `Platform::resolve`.
    fn host_machine(&self) -> Result<MachineInfo>;

    /// Locate an executable by name, erring when it is not available.
    fn find_program(&self, name: &str) -> Result<Path>;

    fn run_command(&self, cmd: &Path, args: &[&str]) -> Result<RunCommandOutput>;
}
