//! Glyph budgeting for both orientations.

use std::fmt;

use indexmap::IndexSet;

use super::scale::ScaleUnit;
use super::text::digit_width;
use super::warning::RenderWarning;
use crate::error::{PlotError, Result};
use crate::request::{ChartRequest, Orientation};

/// Cells reserved beside the glyphs: the axis or rule plus one separating space.
pub const RESERVED_PADDING: usize = 2;

pub const MIN_COLUMN_WIDTH: usize = 2;
pub const MAX_COLUMN_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// Width labels are right-justified to, 0 without labels.
    pub label_width: usize,
    /// Glyphs available for the longest bar.
    pub budget: usize,
    pub scale: ScaleUnit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    pub column_width: usize,
    pub columns: usize,
    /// Rows available for the tallest column.
    pub budget: usize,
    /// Filled rows of the tallest column.
    pub chart_height: usize,
    pub scale: ScaleUnit,
}

impl ColumnLayout {
    /// Width of the rule under the columns.
    #[must_use]
    pub const fn rule_width(&self) -> usize {
        (self.column_width + 1) * self.columns + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    Bar(BarLayout),
    Column(ColumnLayout),
}

impl Layout {
    /// Computes the layout for `request`, recording budget warnings.
    ///
    /// # Errors
    /// Returns [`PlotError::TooManyColumns`] when a column chart cannot give
    /// every value at least one cell plus a separator.
    pub fn plan(request: &ChartRequest, warnings: &mut IndexSet<RenderWarning>) -> Result<Self> {
        match request.orientation() {
            Orientation::Bar => Ok(Self::Bar(plan_bar(request, warnings))),
            Orientation::Column => plan_column(request, warnings).map(Self::Column),
        }
    }

    #[must_use]
    pub const fn scale(&self) -> ScaleUnit {
        match self {
            Self::Bar(bar) => bar.scale,
            Self::Column(column) => column.scale,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar(bar) => write!(
                f,
                "bar: label width {}, glyph budget {}",
                bar.label_width, bar.budget
            )?,
            Self::Column(column) => write!(
                f,
                "column: {} columns of width {}, row budget {}",
                column.columns, column.column_width, column.budget
            )?,
        }
        match self.scale().unit() {
            Some(unit) => write!(f, ", scale unit {unit:.4}"),
            None => f.write_str(", no data magnitude"),
        }
    }
}

fn plan_bar(request: &ChartRequest, warnings: &mut IndexSet<RenderWarning>) -> BarLayout {
    let label_width = request.max_label_len();
    let max_value = request.max_value();
    let reserved = label_width + digit_width(max_value) + RESERVED_PADDING;

    let budget = usable(request.width(), reserved).unwrap_or_else(|| {
        warnings.insert(RenderWarning::LabelsTooLong);
        1
    });

    BarLayout {
        label_width,
        budget,
        scale: ScaleUnit::new(max_value, budget),
    }
}

fn plan_column(
    request: &ChartRequest,
    warnings: &mut IndexSet<RenderWarning>,
) -> Result<ColumnLayout> {
    let columns = request.values().len();
    let width = request.width();
    let needed = columns * 2 + 1;
    if needed > width {
        return Err(PlotError::TooManyColumns {
            columns,
            needed,
            width,
        });
    }

    let max_value = request.max_value();
    let mut column_width = request
        .max_label_len()
        .max(digit_width(max_value))
        .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
    if (column_width + 1) * columns + 1 > width {
        column_width = width / columns - 1;
    }

    let budget = usable(request.height(), RESERVED_PADDING).unwrap_or_else(|| {
        warnings.insert(RenderWarning::HeightTooSmall);
        1
    });
    let scale = ScaleUnit::new(max_value, budget);

    Ok(ColumnLayout {
        column_width,
        columns,
        budget,
        chart_height: scale.glyphs(max_value),
        scale,
    })
}

/// `total - reserved` when at least one cell remains.
fn usable(total: usize, reserved: usize) -> Option<usize> {
    total.checked_sub(reserved).filter(|&budget| budget >= 1)
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
