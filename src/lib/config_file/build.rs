///! file that contains the configuration options available
/// to point where the build directory and the produced binary live
use serde::*;

/// [`BuildAttribute`] - Stores build directory specific configuration
///
/// * `output_dir` - An string representing a relative to the root path
/// where meson sets up the build directory.
/// If isn't specified, `n` will use a `./build` folder
/// by default
///
/// * `executable` - The name of the binary produced by the project, relative
/// to the build directory. Defaults to `clox`
///
/// ```rust
/// use n::config_file::build::{BuildAttribute};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[build]
///     output_dir = 'out'
///"#;
///
/// let config: BuildAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the n toml file");
///
/// assert_eq!(config.output_dir, Some("out"));
/// assert_eq!(config.executable, None);
/// ```
#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BuildAttribute<'a> {
    #[serde(borrow)]
    pub output_dir: Option<&'a str>,
    #[serde(borrow)]
    pub executable: Option<&'a str>,
}
