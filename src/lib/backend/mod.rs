//! The build directory seen as an external resource.
//!
//! The directory is owned by the build system, so the dispatcher only
//! reaches it through the narrow set of operations of [`Backend`]

use color_eyre::Result;

use crate::domain::{build_type::BuildType, status::Status};
use crate::utils::constants::sanitizers;

/// The settings that can be changed on an already set up build directory
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigureOptions {
    pub warnlevel: Option<u8>,
    pub debug: bool,
    pub buildtype: Option<BuildType>,
    pub sanitize: Option<&'static str>,
}

impl ConfigureOptions {
    /// Configuration applied right after setting up a brand new build directory:
    /// the given warning level, debug symbols and the address and undefined behaviour sanitizers
    pub fn initial(warnlevel: u8) -> Self {
        Self {
            warnlevel: Some(warnlevel),
            debug: true,
            buildtype: None,
            sanitize: Some(sanitizers::ADDRESS_UNDEFINED),
        }
    }

    /// Switches the build directory to the given [`BuildType`], along with its sanitizers
    pub fn for_build_type(build_type: BuildType) -> Self {
        Self {
            warnlevel: None,
            debug: false,
            buildtype: Some(build_type),
            sanitize: Some(build_type.sanitizers()),
        }
    }
}

pub trait Backend {
    /// Whether the build directory is present on the filesystem
    fn exists(&self) -> bool;
    /// The warning level that a new build directory is configured with
    fn warnlevel(&self) -> u8;
    /// Recursively deletes the build directory. An absent directory is not a failure
    fn remove(&mut self) -> Result<Status>;
    /// Creates a new build directory
    fn setup(&mut self) -> Result<Status>;
    fn configure(&mut self, options: &ConfigureOptions) -> Result<Status>;
    /// The build type that the build directory is currently configured with
    fn build_type(&mut self) -> Result<String>;
    fn compile(&mut self) -> Result<Status>;
    /// Runs the binary produced by the build with the given arguments
    fn execute(&mut self, args: &[String]) -> Result<Status>;
}
