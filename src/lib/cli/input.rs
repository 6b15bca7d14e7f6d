use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::domain::{build_type::BuildType, status::Status};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use n::cli::input::{CliArgs, Command};
/// use n::domain::build_type::BuildType;
///
/// let parser = CliArgs::parse_from(["", "-v", "init"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.command, Command::Init);
///
/// let parser = CliArgs::parse_from(["", "run", "release", "--", "script.lox"]);
/// assert_eq!(
///     parser.command,
///     Command::Run {
///         build_type: Some(BuildType::Release),
///         args: vec![String::from("script.lox")]
///     }
/// );
/// ```
#[derive(Parser, Debug)]
#[command(name = "n")]
#[command(version)]
#[command(
    about = "Short commands to set up, clean and run a meson project",
    long_about = "Wraps meson to initialize, clean and run a native project build in debug or release mode, \
    reconfiguring the build directory only when the requested mode changes"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help = "n maximum allowed verbosity level is: '-vv'")]
    pub verbose: u8,

    #[arg(short, long, help = "Path to the root of the project. Defaults to the current directory")]
    pub root: Option<String>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Wipes the build directory and sets up a new one with warnings and sanitizers enabled
    Init,
    /// Removes the build directory
    Clean,
    /// Builds the project and runs the produced binary
    Run {
        #[arg(value_parser = parse_release, help = "Build in release mode instead of debug")]
        build_type: Option<BuildType>,

        #[arg(last = true, help = "Arguments forwarded to the produced binary")]
        args: Vec<String>,
    },
}

/// Only the `release` keyword is accepted. Omitting it means a debug run
fn parse_release(value: &str) -> Result<BuildType, String> {
    match value {
        "release" => Ok(BuildType::Release),
        other => Err(format!("expected 'release' or '--', found '{other}'")),
    }
}

/// Parses the command line arguments.
///
/// Any input outside of the recognized commands is reported by clap and
/// mapped to a [`Status::FAILURE`], so the caller can exit without doing any work.
/// Explicit requests for the help or the version are answered with [`Status::SUCCESS`]
pub fn parse_cli_args<I, T>(args: I) -> Result<CliArgs, Status>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    CliArgs::try_parse_from(args).map_err(|err| {
        if let Err(e) = err.print() {
            log::error!("Could not print the command line error: {e}");
        }
        Status::from(!err.use_stderr())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_command(build_type: Option<BuildType>, args: &[&str]) -> Command {
        Command::Run {
            build_type,
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    #[test]
    fn test_recognized_commands() {
        let cases: [(&[&str], Command); 7] = [
            (&["", "init"], Command::Init),
            (&["", "clean"], Command::Clean),
            (&["", "run"], run_command(None, &[])),
            (&["", "run", "--"], run_command(None, &[])),
            (&["", "run", "--", "foo", "bar"], run_command(None, &["foo", "bar"])),
            (&["", "run", "release"], run_command(Some(BuildType::Release), &[])),
            (
                &["", "run", "release", "--", "--flag"],
                run_command(Some(BuildType::Release), &["--flag"]),
            ),
        ];

        for (args, expected) in cases {
            let cli_args = CliArgs::try_parse_from(args)
                .unwrap_or_else(|e| panic!("{args:?} should be recognized: {e}"));
            assert_eq!(cli_args.command, expected);
        }
    }

    #[test]
    fn test_forwarded_arguments_keep_their_order_and_hyphens() {
        let cli_args = CliArgs::parse_from(["", "run", "--", "-x", "--", "b", "a"]);
        assert_eq!(cli_args.command, run_command(None, &["-x", "--", "b", "a"]));
    }

    #[test]
    fn test_unrecognized_commands() {
        let cases: [&[&str]; 9] = [
            &[""],
            &["", "build"],
            &["", "init", "now"],
            &["", "clean", "--", "all"],
            &["", "run", "debug"],
            &["", "run", "foo"],
            &["", "run", "release", "foo"],
            &["", "run", "release", "release"],
            &["", "-vvv", "run", "--unknown"],
        ];

        for args in cases {
            assert!(
                CliArgs::try_parse_from(args).is_err(),
                "{args:?} shouldn't be recognized"
            );
        }
    }

    #[test]
    fn test_unrecognized_commands_map_to_failure() {
        assert_eq!(parse_cli_args(["", "run", "debug"]).err(), Some(Status::FAILURE));
        assert_eq!(parse_cli_args(["", "frobnicate"]).err(), Some(Status::FAILURE));
    }

    #[test]
    fn test_help_maps_to_success() {
        assert_eq!(parse_cli_args(["", "--help"]).err(), Some(Status::SUCCESS));
    }

    #[test]
    fn test_global_options() {
        let cli_args = CliArgs::parse_from(["", "-vv", "--root", "../clox", "clean"]);
        assert_eq!(cli_args.verbose, 2);
        assert_eq!(cli_args.root.as_deref(), Some("../clox"));
        assert_eq!(cli_args.command, Command::Clean);
    }
}
