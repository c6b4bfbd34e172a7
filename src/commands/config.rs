use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::print_error;
use crate::{EXIT_SUCCESS, Result};

use super::{exit_code_for, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => {
            run_config_show(config.as_deref(), *format, cli.no_config)
        }
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, no_config: bool) -> i32 {
    match run_config_show_impl(config_path, format, no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub fn format_config_text(loaded: &LoadResult) -> String {
    let config = &loaded.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    match &loaded.source {
        Some(path) => {
            let _ = writeln!(output, "# source: {}", path.display());
        }
        None => output.push_str("# source: built-in defaults\n"),
    }

    output.push_str("\n[chart]\n");
    let _ = writeln!(output, "  kind = \"{}\"", config.chart.kind);
    let _ = writeln!(output, "  max_width = {}", config.chart.max_width);
    let _ = writeln!(output, "  max_height = {}", config.chart.max_height);

    output.push_str("\n[style]\n");
    let _ = writeln!(output, "  highlight = \"{}\"", config.style.highlight.as_str());

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
