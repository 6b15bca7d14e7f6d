//! root file for the crate where the datastructures that holds the TOML
//! parsed data of the optional `n.toml` project file lives.
pub mod build;
pub mod meson;

use serde::Deserialize;

use self::{build::BuildAttribute, meson::MesonAttribute};

/// ```rust
/// use n::config_file::NConfigFile;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [build]
///     output_dir = 'out'
///     executable = 'jlox'
///
///     [meson]
///     driver = '/opt/meson/bin/meson'
/// "#;
///
/// let config: NConfigFile = toml::from_str(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the n toml file");
///
/// let build_attribute = config.build.expect("The [build] table is present");
/// assert_eq!(build_attribute.output_dir, Some("out"));
/// assert_eq!(build_attribute.executable, Some("jlox"));
///
/// let meson_attribute = config.meson.expect("The [meson] table is present");
/// assert_eq!(meson_attribute.driver, Some("/opt/meson/bin/meson"));
/// ```
/// The [`NConfigFile`] is the type that holds
/// the whole hierarchy of the project file attributes.
///
/// Every table is optional, and an absent project file
/// is the same as an empty one
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NConfigFile<'a> {
    #[serde(borrow)]
    pub build: Option<BuildAttribute<'a>>,
    #[serde(borrow)]
    pub meson: Option<MesonAttribute<'a>>,
}

pub fn n_cfg_from_file(cfg: &'_ str) -> Result<NConfigFile<'_>, toml::de::Error> {
    <NConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}
