pub mod build;
pub mod meson;

use std::path::{Path, PathBuf};

use self::{build::BuildModel, meson::MesonModel};

/// The resolved settings of the project that `n` drives, built from
/// the `n.toml` file (if any) merged with the defaults.
///
/// After being built it's read only data
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProjectModel {
    pub project_root: PathBuf,
    pub build: BuildModel,
    pub meson: MesonModel,
}

impl ProjectModel {
    /// The build directory, as seen from the project root
    pub fn build_dir(&self) -> &Path {
        &self.build.output_dir
    }

    /// The build directory joined to the project root
    pub fn abs_build_dir(&self) -> PathBuf {
        self.project_root.join(&self.build.output_dir)
    }

    /// The path of the binary produced by the build, relative to the project root
    /// and in the `./<output_dir>/<executable>` shape, so it's never looked up in the `PATH`
    pub fn executable_path(&self) -> PathBuf {
        Path::new(".")
            .join(&self.build.output_dir)
            .join(&self.build.executable)
    }
}
