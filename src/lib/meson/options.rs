use std::path::Path;

use crate::backend::ConfigureOptions;
use crate::cli::output::arguments::{Argument, Arguments};

/// Renders the options of a `meson configure` invocation, followed by the build directory.
///
/// The options always come in the same order: `--warnlevel`, `--debug`, `--buildtype`
/// and `-Db_sanitize`, leaving out the ones that aren't set
pub(crate) fn configure_arguments(options: &ConfigureOptions, build_dir: &Path) -> Arguments {
    let mut args = Arguments::with_capacity(8);
    args.create_and_push("configure");

    if let Some(warnlevel) = options.warnlevel {
        args.create_and_push("--warnlevel");
        args.create_and_push(warnlevel.to_string());
    }
    if options.debug {
        args.create_and_push("--debug");
    }
    if let Some(buildtype) = options.buildtype {
        args.create_and_push("--buildtype");
        args.create_and_push(buildtype.to_string());
    }
    args.push_opt(
        options
            .sanitize
            .map(|sanitize| Argument::from(format!("-Db_sanitize={sanitize}"))),
    );

    args.create_and_push(build_dir);
    args
}
