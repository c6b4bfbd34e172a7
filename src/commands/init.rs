use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, PlotError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            println!("Created configuration file: {}", args.output.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PlotError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# term-plot configuration file
#
# Looked up as .term-plot.toml in the current directory, then as
# config.toml in the user configuration directory.

[chart]
# Chart type used when -c is not given: "bar" or "column" (default: "bar")
kind = "bar"

# Caps applied to the detected terminal size.
# Explicit --width / --height values are used as given.
max_width = 800
max_height = 20

[style]
# Colour of bars and columns:
# red, green, yellow, blue, magenta, cyan or white (default: "blue")
highlight = "blue"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
