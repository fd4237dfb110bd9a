use picoforge::path::Path;
use picoforge::steps::{self, InstallSource, Target};

pub struct Steps;

impl steps::BuildSteps for Steps {
    fn build_static_library(&self, target: &Target) {
        eprintln!("Building static library: {}", target.output);
    }

    fn build_shared_library(&self, target: &Target) {
        eprintln!("Building shared library: {}", target.output);
    }

    fn build_executable(&self, target: &Target) {
        eprintln!("Building executable: {}", target.output);
    }

    fn install_file(&self, dest: &Path, source: &InstallSource) {
        match source {
            InstallSource::Artifact(artifact) => {
                eprintln!("Installing {} to {dest}", artifact.file)
            }
            InstallSource::File(file) => eprintln!("Installing {file} to {dest}"),
        }
    }

    fn register_alias(&self, name: &str, targets: &[Path]) {
        eprintln!("Alias {name}: {} targets", targets.len());
    }
}
