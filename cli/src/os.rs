use std::env;
use std::env::consts::{ARCH, OS};
use std::process::Command;

use picoforge::os::{self, MachineInfo, RunCommandOutput};
use picoforge::path::Path;

pub struct OsEnv;

const ENDIAN: &str = if cfg!(target_endian = "little") {
    "little"
} else {
    "big"
};

impl os::Os for OsEnv {
    fn print(&self, msg: &str) {
        println!("{}", msg);
    }

    fn get_env(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn host_machine(&self) -> os::Result<MachineInfo> {
        Ok(MachineInfo {
            system: OS.into(),
            cpu: ARCH.into(),
            endian: ENDIAN.into(),
        })
    }

    fn find_program(&self, name: &str) -> os::Result<Path> {
        let path = which::which(name)?;
        Ok(Path::from(path.to_string_lossy()))
    }

    fn run_command(&self, cmd: &Path, args: &[&str]) -> os::Result<RunCommandOutput> {
        let output = Command::new(cmd.as_ref()).args(args).output()?;

        Ok(RunCommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            returncode: output.status.code().unwrap_or(-1) as i64,
        })
    }
}
