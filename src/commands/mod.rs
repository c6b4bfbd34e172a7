pub mod config;
pub mod init;
pub mod plot;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use plot::{PlotReport, run_plot, run_plot_impl};

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{PlotError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR};

/// Loads the explicit config file, or discovers one unless `no_config` is set.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: crate::config::Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Maps a fatal error to the process exit code.
#[must_use]
pub const fn exit_code_for(err: &PlotError) -> i32 {
    if err.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_INPUT_ERROR
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
