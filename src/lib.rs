#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod env;
mod error;
pub mod install;
mod mode;
pub mod os;
pub mod path;
mod platform;
pub mod probe;
pub mod steps;
pub mod targets;

use alloc::rc::Rc;
use alloc::string::String;

use hashbrown::HashMap;

pub use crate::env::Environment;
pub use crate::error::ConfigError;
pub use crate::mode::Mode;
pub use crate::platform::Platform;
pub use crate::targets::Build;

pub struct Picoforge {
    os: Rc<dyn os::Os>,
    steps: Rc<dyn steps::BuildSteps>,
    options: HashMap<String, String>,
}

impl Picoforge {
    pub fn new(os: impl os::Os, steps: impl steps::BuildSteps) -> Self {
        let os = Rc::new(os);
        let steps = Rc::new(steps);
        let options = Default::default();
        Self { os, steps, options }
    }

    /// Set a configuration option (`mode`, `prefix`, `libdir`, `bindir`,
    /// `includedir`).
    pub fn option(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Query compiler and linker flags for an extra package group.
    pub fn probe(&self, packages: &[&str]) -> probe::DependencyFlags {
        probe::query(self.os.as_ref(), packages)
    }

    /// Resolve the host platform and the requested mode, probe the event
    /// packages, compose the environment and start one configuration
    /// pass.
    ///
    /// Fails before anything is declared when the platform or the mode
    /// is not recognized.
    pub fn configure(&self, base: Environment) -> anyhow::Result<Build> {
        let machine = self.os.host_machine()?;
        let platform = Platform::resolve(&machine.system)?;

        let mode = match self.options.get("mode") {
            Some(name) => Mode::resolve(name)?,
            None => Mode::default(),
        };

        let deps = probe::query(self.os.as_ref(), probe::EVENT_PACKAGES);
        let composed = env::compose(&base, platform, mode, &deps);
        let paths = install::InstallPaths::from_options(&self.options);

        Ok(Build::new(
            self.os.clone(),
            self.steps.clone(),
            platform,
            composed,
            paths,
        ))
    }
}
