use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::utils::constants::error_messages;

/// [`config_logger`] The configuration for `env_logger`
///
/// Warnings and errors are always shown, since the interesting output of
/// this program are the echoed command lines and the outputs of the
/// processes that they spawn
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    builder.filter(None, level_filter_for(verbose_level)?);

    builder
        .try_init()
        .with_context(|| error_messages::FAILURE_SETTING_UP_LOGGER)
}

fn level_filter_for(verbose_level: u8) -> Result<LevelFilter> {
    match verbose_level {
        0 => Ok(LevelFilter::Warn),
        1 => Ok(LevelFilter::Info),
        2 => Ok(LevelFilter::Debug),
        _ => Err(eyre!(error_messages::MAX_VERBOSITY_LEVEL)),
    }
}
