use serde::*;

/// [`MesonAttribute`] - How the meson build system is reached
///
/// * `driver` - The meson executable to invoke. Defaults to the `meson`
/// found on the `PATH`
///
/// * `warnlevel` - The compiler warning level that a brand new build directory
/// is configured with. Defaults to `3`
///
/// ```rust
/// use n::config_file::meson::MesonAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[meson]
///     driver = 'meson.py'
///     warnlevel = 2
///"#;
///
/// let config: MesonAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the n toml file");
///
/// assert_eq!(config.driver, Some("meson.py"));
/// assert_eq!(config.warnlevel, Some(2));
/// ```
#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MesonAttribute<'a> {
    #[serde(borrow)]
    pub driver: Option<&'a str>,
    pub warnlevel: Option<u8>,
}
