use std::path::PathBuf;

use thiserror::Error;

const USAGE_HINT: &str = "usage: term-plot [-t title] [-c bar|column] [labels ... ,] values ... \
     or term-plot [-t title] [-c bar|column] file.csv";

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid number: {token}")]
    InvalidNumber { token: String },

    #[error("Negative value: {token}")]
    NegativeValue { token: String },

    #[error("No values to plot")]
    NoValues,

    #[error("Unexpected argument after data file: {0}")]
    UnexpectedArgument(String),

    #[error("Number of labels and values must match. Received: {labels} labels, {values} values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("Too many columns to display: {columns} columns need {needed} characters, {width} available")]
    TooManyColumns {
        columns: usize,
        needed: usize,
        width: usize,
    },

    #[error("Failed to read data file: {path}")]
    DataRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed data file {path}: {message}")]
    DataShape { path: PathBuf, message: String },

    #[error("Could not determine terminal size: {0}")]
    TerminalSize(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl PlotError {
    /// Short category name used as the heading of error reports.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => "Config",
            Self::InvalidNumber { .. }
            | Self::NegativeValue { .. }
            | Self::NoValues
            | Self::UnexpectedArgument(_)
            | Self::LengthMismatch { .. } => "Input",
            Self::TooManyColumns { .. } => "Layout",
            Self::DataRead { .. } | Self::DataShape { .. } => "DataFile",
            Self::TerminalSize(_) => "Terminal",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// Actionable hint printed under the error, if any.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidNumber { .. }
            | Self::NegativeValue { .. }
            | Self::NoValues
            | Self::UnexpectedArgument(_)
            | Self::LengthMismatch { .. } => Some(USAGE_HINT),
            Self::TooManyColumns { .. } => {
                Some("Increase the terminal width, pass a larger --width, or use -c bar")
            }
            Self::TerminalSize(_) => Some("Pass --width and --height explicitly"),
            Self::DataShape { .. } => Some(
                "Use one numeric column, or a label column followed by a numeric column",
            ),
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_) => {
                Some("Run `term-plot config validate` to check the configuration file")
            }
            Self::DataRead { .. } | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Whether the error comes from configuration handling rather than chart input.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::ConfigRead { .. } | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
