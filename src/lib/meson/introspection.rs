//! Reading back the state of a build directory out of the `meson configure` dump

use color_eyre::{eyre::eyre, Result};

use crate::utils::constants::{error_messages, BUILDTYPE_OPTION};

/// Extracts the current build type from the text printed by `meson configure <build_dir>`.
///
/// The dump is a table, one option per line, where the option name is followed by its value:
///
/// ```text
///   buildtype        debug        [plain, debug, debugoptimized, release, minsize, custom]   Build type to use
/// ```
///
/// The first line that mentions `buildtype` is split on whitespace and its second field is
/// the value. Not finding such a line (or a value on it) is an error
pub fn parse_build_type(configuration_dump: &str) -> Result<&str> {
    configuration_dump
        .lines()
        .find(|line| line.contains(BUILDTYPE_OPTION))
        .and_then(|line| line.split_whitespace().nth(1))
        .ok_or_else(|| eyre!(error_messages::BUILDTYPE_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIGURATION_DUMP: &str = r#"
Core properties:
  Source dir /home/user/clox
  Build dir  /home/user/clox/build

Main project options:

  Core options              Current Value                    Possible Values                  Description
  ------------              -------------                    ---------------                  -----------
  auto_features             auto                             [enabled, disabled, auto]        Override value of all 'auto' features
  backend                   ninja                            [ninja, vs, vs2010, xcode]       Backend to use
  buildtype                 release                          [plain, debug, debugoptimized,   Build type to use
                                                              release, minsize, custom]
  debug                     false                            [true, false]                    Enable debug symbols and other information
  warning_level             3                                [0, 1, 2, 3, everything]         Compiler warning level to use
"#;

    #[test]
    fn test_build_type_from_configuration_dump() -> Result<()> {
        assert_eq!(parse_build_type(CONFIGURATION_DUMP)?, "release");
        Ok(())
    }

    #[test]
    fn test_first_matching_line_wins() -> Result<()> {
        let dump = "buildtype\tdebug\nbuildtype release\n";
        assert_eq!(parse_build_type(dump)?, "debug");
        Ok(())
    }

    #[test]
    fn test_missing_build_type_is_an_error() {
        let err = parse_build_type("backend ninja\ndebug true\n").unwrap_err();
        assert_eq!(err.to_string(), error_messages::BUILDTYPE_NOT_FOUND);

        assert!(parse_build_type("").is_err());
    }

    #[test]
    fn test_build_type_line_without_value_is_an_error() {
        assert!(parse_build_type("   buildtype   \n").is_err());
    }
}
