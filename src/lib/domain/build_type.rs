use core::fmt;

use crate::utils::constants::sanitizers;

/// The build modes that can be requested from the command line.
///
/// The build type currently configured on the build directory is an open
/// set (meson also knows about `plain`, `minsize`...), so it's kept as
/// plain text and compared against this one through [`BuildType::matches`]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum BuildType {
    #[default]
    Debug,
    Release,
}

impl BuildType {
    /// The value for the `b_sanitize` meson option that goes along with this build type
    pub fn sanitizers(&self) -> &'static str {
        match *self {
            BuildType::Debug => sanitizers::ADDRESS_UNDEFINED,
            BuildType::Release => sanitizers::NONE,
        }
    }

    /// Whether the build type reported by the build system is this one
    pub fn matches(&self, current: &str) -> bool {
        self.as_ref() == current
    }
}

impl AsRef<str> for BuildType {
    fn as_ref(&self) -> &str {
        match *self {
            BuildType::Debug => "debug",
            BuildType::Release => "release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitizers_for_build_type() {
        assert_eq!(BuildType::Debug.sanitizers(), "address,undefined");
        assert_eq!(BuildType::Release.sanitizers(), "none");
    }

    #[test]
    fn test_matches_current_build_type() {
        assert!(BuildType::Debug.matches("debug"));
        assert!(BuildType::Release.matches("release"));
        assert!(!BuildType::Release.matches("debugoptimized"));
        assert!(!BuildType::Debug.matches("plain"));
    }
}
