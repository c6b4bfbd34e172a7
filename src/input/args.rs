use std::path::PathBuf;

use super::{Dataset, parse_value};
use crate::error::{PlotError, Result};

/// Token separating labels from values: `a b c , 1 2 3`.
pub const LABEL_SEPARATOR: &str = ",";

const DATA_FILE_EXTENSION: &str = ".csv";

/// Where the chart data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    /// A delimited data file.
    File(PathBuf),
    /// Labels and values given on the command line.
    Inline(&'a [String]),
}

/// Decides whether the positional tokens name a data file or inline data.
///
/// # Errors
/// Returns an error if there are no tokens, or tokens follow a data file.
pub fn classify(tokens: &[String]) -> Result<Source<'_>> {
    let Some(first) = tokens.first() else {
        return Err(PlotError::NoValues);
    };

    if first.to_lowercase().ends_with(DATA_FILE_EXTENSION) {
        if let Some(extra) = tokens.get(1) {
            return Err(PlotError::UnexpectedArgument(extra.clone()));
        }
        return Ok(Source::File(PathBuf::from(first)));
    }

    Ok(Source::Inline(tokens))
}

/// Splits inline tokens at the first lone `,` into labels and values.
///
/// # Errors
/// Returns an error if a value does not parse, no values are given, or the
/// label and value counts differ.
pub fn parse_inline(tokens: &[String]) -> Result<Dataset> {
    let (labels, value_tokens) = match tokens.iter().position(|t| t == LABEL_SEPARATOR) {
        Some(index) => (tokens[..index].to_vec(), &tokens[index + 1..]),
        None => (Vec::new(), tokens),
    };

    if !labels.is_empty() && labels.len() != value_tokens.len() {
        return Err(PlotError::LengthMismatch {
            labels: labels.len(),
            values: value_tokens.len(),
        });
    }

    let values = value_tokens
        .iter()
        .map(|t| parse_value(t))
        .collect::<Result<Vec<_>>>()?;
    if values.is_empty() {
        return Err(PlotError::NoValues);
    }

    Ok(Dataset { labels, values })
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
