//! Launches the processes that do the real work, and reports back their exit codes

use std::fmt::Display;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};

use color_eyre::{eyre::Context, Result};
use console::style;

use crate::cli::output::arguments::CommandLine;
use crate::domain::status::Status;
use crate::utils::constants::error_messages;

/// What a process wrote on its standard output, along with how it finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub status: Status,
    pub stdout: String,
}

/// The seam between the program and the OS processes.
///
/// Both operations block until the spawned process finishes. A process
/// finishing with a non zero exit code is not an error, it's reported
/// as a [`Status`]. Errors are reserved for processes that couldn't even be launched
pub trait CommandRunner {
    /// Echoes the command line and runs it, with the standard streams inherited
    fn run(&mut self, command_line: &CommandLine) -> Result<Status>;

    /// Runs the command line silently, collecting its standard output
    fn capture(&mut self, command_line: &CommandLine) -> Result<CapturedOutput>;
}

/// Prints a command line on the standard output, so the user can follow
/// what is being executed on their behalf
pub fn echo(command_line: &impl Display) {
    println!("{}", style(format!("+ {command_line}")).green().bright());
}

/// [`CommandRunner`] that spawns real processes with the project root as their working directory
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    working_dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Programs given as a relative path with more than one component (like `./build/clox`)
    /// are anchored to the working directory, so they don't depend on the directory
    /// from where this program was invoked. Bare names are looked up in the `PATH`
    fn resolve_program(&self, program: &Path) -> PathBuf {
        let mut components = program.components();
        let is_bare_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if program.is_absolute() || is_bare_name {
            program.to_path_buf()
        } else {
            self.working_dir.join(program)
        }
    }

    fn command(&self, command_line: &CommandLine) -> Command {
        let mut command = Command::new(self.resolve_program(Path::new(&*command_line.program)));
        command
            .args(&command_line.args)
            .current_dir(&self.working_dir);
        command
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&mut self, command_line: &CommandLine) -> Result<Status> {
        echo(command_line);

        let status = self
            .command(command_line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| {
                format!("{}: {command_line}", error_messages::FAILURE_SPAWNING_PROCESS)
            })?;

        log::debug!("Command {command_line} finished with {status}");
        Ok(Status::from(status))
    }

    fn capture(&mut self, command_line: &CommandLine) -> Result<CapturedOutput> {
        log::debug!("Capturing the output of => {command_line}");

        let output = self
            .command(command_line)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| {
                format!("{}: {command_line}", error_messages::FAILURE_SPAWNING_PROCESS)
            })?;

        let stdout = String::from_utf8(output.stdout)
            .with_context(|| error_messages::NON_UTF8_PROCESS_OUTPUT)?;

        Ok(CapturedOutput {
            status: Status::from(output.status),
            stdout,
        })
    }
}
