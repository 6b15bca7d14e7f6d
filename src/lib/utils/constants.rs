//! Constant value definitions to use across the whole program

pub const CONFIG_FILE_NAME: &str = "n";
pub const CONFIG_FILE_EXT: &str = "toml";

/// The `meson configure` option that holds the current build type
pub const BUILDTYPE_OPTION: &str = "buildtype";

/// Default values for the settings that the `n.toml` file may override
pub mod defaults {
    pub const OUTPUT_DIR: &str = "build";
    pub const EXECUTABLE: &str = "clox";
    pub const MESON_DRIVER: &str = "meson";
    pub const WARNLEVEL: u8 = 3;
}

pub mod sanitizers {
    pub const ADDRESS_UNDEFINED: &str = "address,undefined";
    pub const NONE: &str = "none";
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const FAILURE_GATHERING_PROJECT_ROOT_ABS_PATH: &str =
        "An unexpected error happened while resolving the absolute path to the project root";
    pub const FAILURE_REMOVING_BUILD_DIR: &str = "Could not remove the build directory";
    pub const FAILURE_SPAWNING_PROCESS: &str = "Could not launch the process";
    pub const FAILURE_QUERYING_BUILDTYPE: &str =
        "Failed to query the current build type of the build directory";
    pub const BUILDTYPE_NOT_FOUND: &str =
        "Could not find the 'buildtype' option in the meson configuration dump";
    pub const NON_UTF8_PROCESS_OUTPUT: &str =
        "The standard output of the process isn't valid UTF-8";
    pub const FAILURE_SETTING_UP_LOGGER: &str = "n wasn't unable to set up the logger";
    pub const MAX_VERBOSITY_LEVEL: &str = "n maximum allowed verbosity level is: '-vv'";
}
