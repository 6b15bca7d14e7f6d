pub mod backend;
pub mod cli;
pub mod config_file;
pub mod domain;
pub mod meson;
pub mod project_model;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};

    use color_eyre::{eyre::Context, Result};

    use crate::{
        backend::{Backend, ConfigureOptions},
        cli::{
            input::{CliArgs, Command},
            output::executors::ProcessRunner,
        },
        config_file::{self, NConfigFile},
        domain::{build_type::BuildType, status::Status},
        meson::Meson,
        project_model::ProjectModel,
        utils::{
            self,
            constants::error_messages,
            reader::{find_config_file, ConfigFile},
        },
    };

    /// The main work of the project. Runs the command
    /// inputted in the CLI against the project found at the root
    pub fn run_n(cli_args: &CliArgs) -> Result<Status> {
        let abs_project_root = determine_absolute_path_of_the_project_root(cli_args)?;
        log::debug!("Project root: {abs_project_root:?}");

        let cfg_file = find_config_file(&abs_project_root)?;
        let model = load_project_model(cfg_file.as_ref(), &abs_project_root)?;

        let mut backend = Meson::new(model, ProcessRunner::new(&abs_project_root));
        dispatch(&cli_args.command, &mut backend)
    }

    /// Runs the handler of the given [`Command`] against a [`Backend`]
    pub fn dispatch<B: Backend>(command: &Command, backend: &mut B) -> Result<Status> {
        match command {
            Command::Init => init(backend),
            Command::Clean => clean(backend),
            Command::Run { build_type, args } => {
                run(backend, build_type.unwrap_or_default(), args)
            }
        }
    }

    /// Wipes the build directory and sets up a fresh one. Stops at the first failing step
    fn init<B: Backend>(backend: &mut B) -> Result<Status> {
        log::info!("Initializing a new build directory");

        let initial_options = ConfigureOptions::initial(backend.warnlevel());
        let succeeded = backend.remove()?.success()
            && backend.setup()?.success()
            && backend.configure(&initial_options)?.success();

        Ok(Status::from(succeeded))
    }

    fn clean<B: Backend>(backend: &mut B) -> Result<Status> {
        log::info!("Removing the build directory");
        Ok(Status::from(backend.remove()?.success()))
    }

    /// Builds the project in the requested mode and runs the produced binary.
    ///
    /// A failed reconfiguration is the only step whose exit code is handed back as is.
    /// Any other failure is reported as [`Status::FAILURE`]
    fn run<B: Backend>(backend: &mut B, build_type: BuildType, args: &[String]) -> Result<Status> {
        if !backend.exists() {
            log::info!("No build directory found");
            if !init(backend)?.success() {
                return Ok(Status::FAILURE);
            }
        }

        let current_build_type = backend.build_type()?;
        if !build_type.matches(&current_build_type) {
            log::info!("Switching the build directory from {current_build_type} to {build_type}");
            let reconfigured = backend.configure(&ConfigureOptions::for_build_type(build_type))?;
            if !reconfigured.success() {
                return Ok(reconfigured);
            }
        }

        let succeeded = backend.compile()?.success() && backend.execute(args)?.success();
        Ok(Status::from(succeeded))
    }

    /// Resolves the full path of the location of the project's root on the fs. If the `--root`
    /// [`CliArgs`] arg is present, it will be used as the project root path, otherwise, we will
    /// assume that the project root is exactly in the same directory from where the *n*
    /// binary was invoked by the user
    fn determine_absolute_path_of_the_project_root(cli_args: &CliArgs) -> Result<PathBuf> {
        let project_root = cli_args
            .root
            .as_deref()
            .map(Path::new)
            .unwrap_or(Path::new("."));

        utils::fs::get_project_root_absolute_path(project_root)
    }

    /// Helper function to load the data of the optional `n.toml` file into a [`ProjectModel`]
    fn load_project_model(
        cfg_file: Option<&ConfigFile>,
        abs_project_root: &Path,
    ) -> Result<ProjectModel> {
        let config: NConfigFile = match cfg_file {
            Some(cfg) => config_file::n_cfg_from_file(&cfg.raw)
                .with_context(|| format!("{}: {:?}", error_messages::PARSE_CFG_FILE, cfg.path))?,
            None => NConfigFile::default(),
        };

        Ok(utils::reader::build_model(config, abs_project_root))
    }

}
