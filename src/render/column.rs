use indexmap::IndexSet;

use super::layout::ColumnLayout;
use super::style::Highlight;
use super::text::{annotation, fit_label};
use super::warning::RenderWarning;
use crate::request::ChartRequest;

pub const COLUMN_GLYPH: &str = "█";
pub const RULE_GLYPH: &str = "─";

/// Precomputed cell text for a column chart.
///
/// Annotations and labels are fitted once up front so the row iterator only
/// assembles strings and every warning is known before the first line.
#[derive(Debug, Clone)]
pub(super) struct ColumnPlan {
    cells: Vec<Cell>,
    labels: Option<String>,
}

#[derive(Debug, Clone)]
struct Cell {
    glyphs: usize,
    annotation: String,
}

impl ColumnPlan {
    pub(super) fn new(
        request: &ChartRequest,
        layout: &ColumnLayout,
        warnings: &mut IndexSet<RenderWarning>,
    ) -> Self {
        let width = layout.column_width;

        let cells = request
            .values()
            .iter()
            .map(|&value| {
                let annotation = annotation(value, width).unwrap_or_else(|| {
                    warnings.insert(RenderWarning::NotEnoughSpace);
                    " ".repeat(width)
                });
                Cell {
                    glyphs: layout.scale.glyphs(value),
                    annotation,
                }
            })
            .collect();

        let labels = request.has_labels().then(|| {
            let mut row = String::from(" ");
            for label in request.labels() {
                let (text, truncated) = fit_label(label, width);
                if truncated {
                    warnings.insert(RenderWarning::LabelsTruncated);
                }
                row.push_str(&text);
                row.push(' ');
            }
            row
        });

        Self { cells, labels }
    }

    /// Row `row` counted from the bottom, starting at 1.
    pub(super) fn row(&self, row: usize, width: usize, highlight: Highlight) -> String {
        let mut line = String::from(" ");
        for cell in &self.cells {
            if cell.glyphs >= row {
                line.push_str(&highlight.paint(&COLUMN_GLYPH.repeat(width)));
            } else if cell.glyphs + 1 == row {
                line.push_str(&cell.annotation);
            } else {
                line.push_str(&" ".repeat(width));
            }
            line.push(' ');
        }
        line
    }

    pub(super) fn labels(&self) -> Option<&str> {
        self.labels.as_deref()
    }
}

pub(super) fn rule(layout: &ColumnLayout) -> String {
    RULE_GLYPH.repeat(layout.rule_width())
}
