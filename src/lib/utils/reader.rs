use crate::{
    config_file::{build::BuildAttribute, meson::MesonAttribute, NConfigFile},
    project_model::{build::BuildModel, meson::MesonModel, ProjectModel},
    utils::constants::{defaults, error_messages, CONFIG_FILE_EXT, CONFIG_FILE_NAME},
};
use color_eyre::{eyre::Context, Result};
use std::path::{Path, PathBuf};

/// Details about the project file found at the root of the project
#[derive(Debug)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub raw: String,
}

/// Checks for the existence of the `n.toml` configuration file at the
/// project root, and reads it if present.
///
/// Not having a configuration file is fine, since every setting has a default,
/// so this only fails if the file exists but can't be read
pub fn find_config_file(project_root: &Path) -> Result<Option<ConfigFile>> {
    let path = project_root
        .join(CONFIG_FILE_NAME)
        .with_extension(CONFIG_FILE_EXT);

    if !path.is_file() {
        log::debug!("No configuration file found at: {path:?}. Using the defaults");
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, path))?;

    Ok(Some(ConfigFile { path, raw }))
}

pub fn build_model(config: NConfigFile, absolute_project_root: &Path) -> ProjectModel {
    ProjectModel {
        project_root: absolute_project_root.to_path_buf(),
        build: assemble_build_model(config.build),
        meson: assemble_meson_model(config.meson),
    }
}

fn assemble_build_model(config: Option<BuildAttribute>) -> BuildModel {
    let output_dir = config
        .as_ref()
        .and_then(|build| build.output_dir)
        .map(|out_dir| out_dir.strip_prefix("./").unwrap_or(out_dir))
        .unwrap_or(defaults::OUTPUT_DIR);

    let executable = config
        .as_ref()
        .and_then(|build| build.executable)
        .unwrap_or(defaults::EXECUTABLE);

    BuildModel {
        output_dir: PathBuf::from(output_dir),
        executable: PathBuf::from(executable),
    }
}

fn assemble_meson_model(config: Option<MesonAttribute>) -> MesonModel {
    let driver = config
        .as_ref()
        .and_then(|meson| meson.driver)
        .unwrap_or(defaults::MESON_DRIVER);

    let warnlevel = config
        .as_ref()
        .and_then(|meson| meson.warnlevel)
        .unwrap_or(defaults::WARNLEVEL);

    MesonModel {
        driver: driver.to_string(),
        warnlevel,
    }
}
