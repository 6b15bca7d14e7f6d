//! The [`Backend`] implementation that drives a meson build directory
pub mod introspection;
pub(crate) mod options;

use color_eyre::{
    eyre::{eyre, Context},
    Result,
};

use crate::backend::{Backend, ConfigureOptions};
use crate::cli::output::arguments::{Argument, Arguments, CommandLine};
use crate::cli::output::executors::{self, CommandRunner};
use crate::domain::status::Status;
use crate::project_model::ProjectModel;
use crate::utils::{self, constants::error_messages};

/// Issues the meson commands for the project described by a [`ProjectModel`],
/// launching them through a [`CommandRunner`]
#[derive(Debug)]
pub struct Meson<R: CommandRunner> {
    model: ProjectModel,
    runner: R,
}

impl<R: CommandRunner> Meson<R> {
    pub fn new(model: ProjectModel, runner: R) -> Self {
        Self { model, runner }
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    /// A `meson` invocation with the given arguments
    fn meson<I>(&self, args: I) -> CommandLine
    where
        I: IntoIterator,
        I::Item: Into<Argument>,
    {
        CommandLine::new(
            self.model.meson.driver.as_str(),
            args.into_iter().collect::<Arguments>(),
        )
    }
}

impl<R: CommandRunner> Backend for Meson<R> {
    fn exists(&self) -> bool {
        self.model.abs_build_dir().exists()
    }

    fn warnlevel(&self) -> u8 {
        self.model.meson.warnlevel
    }

    fn remove(&mut self) -> Result<Status> {
        executors::echo(&format!("rm -rf {}", self.model.build_dir().display()));

        match utils::fs::remove_directory(&self.model.abs_build_dir()) {
            Ok(()) => Ok(Status::SUCCESS),
            Err(e) => {
                log::error!("{e:?}");
                Ok(Status::FAILURE)
            }
        }
    }

    fn setup(&mut self) -> Result<Status> {
        let command_line = self.meson([Argument::from("setup"), self.model.build_dir().into()]);
        self.runner.run(&command_line)
    }

    fn configure(&mut self, options: &ConfigureOptions) -> Result<Status> {
        let command_line = self.meson(options::configure_arguments(
            options,
            self.model.build_dir(),
        ));
        self.runner.run(&command_line)
    }

    fn build_type(&mut self) -> Result<String> {
        let command_line = self.meson(options::configure_arguments(
            &ConfigureOptions::default(),
            self.model.build_dir(),
        ));

        let dump = self
            .runner
            .capture(&command_line)
            .with_context(|| error_messages::FAILURE_QUERYING_BUILDTYPE)?;
        if !dump.status.success() {
            return Err(eyre!(
                "{}: {command_line} exited with code {}",
                error_messages::FAILURE_QUERYING_BUILDTYPE,
                dump.status
            ));
        }

        let build_type = introspection::parse_build_type(&dump.stdout)
            .with_context(|| error_messages::FAILURE_QUERYING_BUILDTYPE)?;
        log::debug!("The build directory is configured as: {build_type}");

        Ok(build_type.to_string())
    }

    fn compile(&mut self) -> Result<Status> {
        let command_line = self.meson([
            Argument::from("compile"),
            Argument::from("-C"),
            self.model.build_dir().into(),
        ]);
        self.runner.run(&command_line)
    }

    fn execute(&mut self, args: &[String]) -> Result<Status> {
        let mut arguments = Arguments::with_capacity(args.len());
        arguments.extend(args.iter().map(Argument::from));

        let command_line = CommandLine::new(self.model.executable_path(), arguments);
        self.runner.run(&command_line)
    }
}
