use core::fmt;
use std::process::ExitStatus;

/// The exit code of a step of the program, being it a spawned process
/// or some work done in place, like removing the build directory.
///
/// Only an exact zero is considered a success
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Status(i32);

impl Status {
    pub const SUCCESS: Status = Status(0);
    pub const FAILURE: Status = Status(1);

    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn success(&self) -> bool {
        self.0 == 0
    }

    pub fn code(&self) -> i32 {
        self.0
    }
}

impl From<bool> for Status {
    fn from(succeeded: bool) -> Self {
        if succeeded {
            Status::SUCCESS
        } else {
            Status::FAILURE
        }
    }
}

/// A process terminated by a signal has no exit code, and it's reported as a failure
impl From<ExitStatus> for Status {
    fn from(status: ExitStatus) -> Self {
        status.code().map_or(Status::FAILURE, Status)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
