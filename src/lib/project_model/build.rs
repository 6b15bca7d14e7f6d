use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BuildModel {
    pub output_dir: PathBuf,
    pub executable: PathBuf,
}
