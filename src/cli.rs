use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::request::Orientation;

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "term-plot")]
#[command(author, version, about = "Plot numbers as bar or column charts in the terminal")]
#[command(long_about = "Plot numbers as bar or column charts in the terminal.\n\n\
    Examples:\n  \
    term-plot 3 7 2\n  \
    term-plot -t Sales -c column jan feb mar , 10 12 9\n  \
    term-plot data.csv\n\n\
    Exit codes:\n  \
    0 - Chart rendered (warnings may have been printed)\n  \
    1 - Invalid input or layout error\n  \
    2 - Configuration error")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub plot: PlotArgs,

    /// Increase output verbosity (-v reports the resolved layout)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Title printed above the chart
    #[arg(short, long)]
    pub title: Option<String>,

    /// Chart type (overrides config)
    #[arg(short, long, value_enum)]
    pub chart: Option<Orientation>,

    /// Chart width in characters (skips terminal detection)
    #[arg(short = 'W', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Chart height in characters (skips terminal detection)
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: Option<u16>,

    /// Field delimiter for data files (a single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Data file, or values optionally preceded by labels and a lone `,`
    #[arg(
        value_name = "DATA",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub data: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".term-plot.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".term-plot.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
