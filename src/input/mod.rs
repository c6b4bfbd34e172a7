//! Turning command-line tokens, data files and the terminal into chart input.

mod args;
mod data_file;
mod terminal;

pub use args::{LABEL_SEPARATOR, Source, classify, parse_inline};
pub use data_file::{is_numeric, read_data_file};
pub use terminal::{Canvas, CanvasLimits, CrosstermProbe, TerminalProbe, resolve_canvas};

use crate::error::{PlotError, Result};
use crate::request::ChartRequest;

/// Labels and values read from any source, not yet validated as a chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Dataset {
    /// Validates the dataset into a chart request with default settings.
    ///
    /// # Errors
    /// Returns an error if there are no values or the label count does not match.
    pub fn into_request(self) -> Result<ChartRequest> {
        ChartRequest::new(self.values, self.labels)
    }
}

/// Parses one numeric token: finite and non-negative.
///
/// # Errors
/// Returns [`PlotError::InvalidNumber`] or [`PlotError::NegativeValue`].
pub fn parse_value(token: &str) -> Result<f64> {
    let value: f64 = token
        .trim()
        .parse()
        .map_err(|_| PlotError::InvalidNumber {
            token: token.to_string(),
        })?;
    if !value.is_finite() {
        return Err(PlotError::InvalidNumber {
            token: token.to_string(),
        });
    }
    if value < 0.0 {
        return Err(PlotError::NegativeValue {
            token: token.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
