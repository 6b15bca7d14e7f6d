use std::{
    fs::{DirBuilder, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use color_eyre::{eyre::Context, Result};

use super::constants::error_messages;

pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    let file_path = path.join(filename);

    File::create(&file_path)
        .with_context(|| format!("Could not create file {file_path:?}"))?
        .write_all(buff_write)
        .with_context(|| format!("Could not write to file {file_path:?}"))
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .with_context(|| format!("Could not create directory {path_create:?}"))
}

/// Recursively removes the directory at *path* and everything below it.
///
/// Behaves like `rm -rf`: a path that does not exist is not an error, and a regular
/// file or a symlink found at *path* is removed itself, without following the link
pub fn remove_directory(path: &Path) -> Result<()> {
    let removal = match std::fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_dir() => std::fs::remove_dir_all(path),
        Ok(_) => std::fs::remove_file(path),
        Err(e) => Err(e),
    };

    match removal {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e)
            .with_context(|| format!("{}: {path:?}", error_messages::FAILURE_REMOVING_BUILD_DIR)),
    }
}

/// Resolves the absolute path of the directory that the user pointed as the project root
pub fn get_project_root_absolute_path(project_root: &Path) -> Result<PathBuf> {
    project_root
        .canonicalize()
        .with_context(|| format!("{}: {project_root:?}", error_messages::FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH))
}
