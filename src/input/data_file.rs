//! Delimited data files: one value column, or a label column then a value column.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{Dataset, parse_value};
use crate::error::{PlotError, Result};

/// Whether a cell parses as a number (any sign).
#[must_use]
pub fn is_numeric(cell: &str) -> bool {
    cell.trim().parse::<f64>().is_ok()
}

/// Reads a data file.
///
/// A first record without any numeric cell is a header and is skipped. The
/// first data record decides the layout: a numeric first cell means values
/// only, otherwise labels in the first column and values in the second.
///
/// # Errors
/// Returns an error if the file cannot be read, has no data records, a
/// record lacks the value column, or a value does not parse.
pub fn read_data_file(path: &Path, delimiter: u8) -> Result<Dataset> {
    let read_error = |source| PlotError::DataRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(read_error)?;

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(read_error)?;

    parse_records(path, &records)
}

fn parse_records(path: &Path, records: &[StringRecord]) -> Result<Dataset> {
    let shape_error = |message: String| PlotError::DataShape {
        path: path.to_path_buf(),
        message,
    };

    let has_header = records
        .first()
        .is_some_and(|first| !first.iter().any(is_numeric));
    let offset = usize::from(has_header);
    let rows = &records[offset..];

    let Some(first) = rows.first() else {
        return Err(shape_error("no data rows".to_string()));
    };
    let labelled = !first.get(0).is_some_and(is_numeric);
    let value_column = usize::from(labelled);

    let mut dataset = Dataset::default();
    for (index, record) in rows.iter().enumerate() {
        let line = index + offset + 1;
        let cell = record
            .get(value_column)
            .ok_or_else(|| shape_error(format!("row {line} has no value column")))?;
        dataset.values.push(parse_value(cell)?);
        if labelled {
            dataset
                .labels
                .push(record.get(0).unwrap_or_default().to_string());
        }
    }

    Ok(dataset)
}

#[cfg(test)]
#[path = "data_file_tests.rs"]
mod tests;
