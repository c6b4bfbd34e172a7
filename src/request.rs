use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

/// Chart orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Horizontal bars, one row per value
    #[default]
    Bar,
    /// Vertical columns, one column per value
    #[value(alias = "col")]
    #[serde(alias = "col")]
    Column,
}

impl Orientation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "column",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, immutable description of one chart to render.
///
/// Invariants upheld by [`ChartRequest::new`]:
/// - at least one value, every value finite and non-negative
/// - labels are either empty or exactly one per value
/// - width and height are at least 1
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    title: Option<String>,
    orientation: Orientation,
    labels: Vec<String>,
    values: Vec<f64>,
    width: usize,
    height: usize,
}

impl ChartRequest {
    /// Default canvas used until [`ChartRequest::with_bounds`] is called.
    pub const DEFAULT_WIDTH: usize = 80;
    pub const DEFAULT_HEIGHT: usize = 20;

    /// Validates values and labels and builds a bar chart request.
    ///
    /// # Errors
    /// Returns an error if there are no values, a value is negative or not
    /// finite, or the label count is neither zero nor the value count.
    pub fn new(values: Vec<f64>, labels: Vec<String>) -> Result<Self> {
        validate_values(&values)?;
        if !labels.is_empty() && labels.len() != values.len() {
            return Err(PlotError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            title: None,
            orientation: Orientation::default(),
            labels,
            values,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        })
    }

    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.filter(|t| !t.is_empty());
        self
    }

    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the canvas size.
    ///
    /// Zero dimensions are raised to 1: width and height are always at least 1.
    /// Budgets that a 1-cell canvas cannot satisfy go through the layout's
    /// floor-to-1 warnings.
    #[must_use]
    pub fn with_bounds(mut self, width: usize, height: usize) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Longest label in characters, 0 without labels.
    #[must_use]
    pub fn max_label_len(&self) -> usize {
        self.labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Largest value in the series.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

fn validate_values(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(PlotError::NoValues);
    }
    for &value in values {
        if !value.is_finite() {
            return Err(PlotError::InvalidNumber {
                token: value.to_string(),
            });
        }
        if value < 0.0 {
            return Err(PlotError::NegativeValue {
                token: value.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
