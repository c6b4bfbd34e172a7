//! Chart layout, scaling and cell rendering.
//!
//! [`Renderer::render`] validates the layout up front: fatal problems
//! (too many columns) are returned as errors before any line exists, and
//! non-fatal ones are collected as [`RenderWarning`]s on the [`Chart`].

mod bar;
mod column;
mod layout;
mod scale;
mod style;
mod text;
mod warning;

use std::io::Write;

use indexmap::IndexSet;

pub use bar::{AXIS, BAR_GLYPH};
pub use column::{COLUMN_GLYPH, RULE_GLYPH};
pub use layout::{BarLayout, ColumnLayout, Layout, MAX_COLUMN_WIDTH, MIN_COLUMN_WIDTH};
pub use scale::ScaleUnit;
pub use style::{Highlight, ansi, bold};
pub use text::{digit_width, format_integer, round_half_up};
pub use warning::RenderWarning;

use column::ColumnPlan;

use crate::error::Result;
use crate::request::ChartRequest;

/// Renders chart requests with a fixed highlight colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    highlight: Highlight,
}

impl Renderer {
    #[must_use]
    pub const fn new(highlight: Highlight) -> Self {
        Self { highlight }
    }

    /// Lays out `request` and returns a chart ready to produce lines.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be laid out at all, e.g. a column
    /// chart with more columns than the width allows.
    pub fn render<'a>(&self, request: &'a ChartRequest) -> Result<Chart<'a>> {
        let mut warnings = IndexSet::new();
        let body = match Layout::plan(request, &mut warnings)? {
            Layout::Bar(bar) => Body::Bar(bar),
            Layout::Column(layout) => {
                let plan = ColumnPlan::new(request, &layout, &mut warnings);
                Body::Column { layout, plan }
            }
        };

        Ok(Chart {
            request,
            body,
            highlight: self.highlight,
            warnings: warnings.into_iter().collect(),
        })
    }
}

/// Renders `request` with the default highlight colour.
///
/// # Errors
/// See [`Renderer::render`].
pub fn render(request: &ChartRequest) -> Result<Chart<'_>> {
    Renderer::default().render(request)
}

/// A laid-out chart.
#[derive(Debug, Clone)]
pub struct Chart<'a> {
    request: &'a ChartRequest,
    body: Body,
    highlight: Highlight,
    warnings: Vec<RenderWarning>,
}

impl Chart<'_> {
    #[must_use]
    pub const fn layout(&self) -> Layout {
        match &self.body {
            Body::Bar(bar) => Layout::Bar(*bar),
            Body::Column { layout, .. } => Layout::Column(*layout),
        }
    }

    /// Warnings in the order they were first raised, each at most once.
    #[must_use]
    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Display lines, title first. Each call starts a fresh iterator.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.title_lines().chain(self.body_lines())
    }

    /// Writes every line followed by a newline.
    ///
    /// # Errors
    /// Returns an error if writing to `out` fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }

    fn title_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.request
            .title()
            .into_iter()
            .flat_map(|title| [bold(title), String::new()])
    }

    fn body_lines(&self) -> Box<dyn Iterator<Item = String> + '_> {
        match &self.body {
            Body::Bar(bar) => {
                let labels = self.request.labels();
                Box::new(self.request.values().iter().enumerate().map(move |(i, &value)| {
                    bar::line(
                        labels.get(i).map(String::as_str),
                        value,
                        bar,
                        self.highlight,
                    )
                }))
            }
            Body::Column { layout, plan } => {
                let rows = (1..=layout.chart_height + 1)
                    .rev()
                    .map(move |row| plan.row(row, layout.column_width, self.highlight));
                Box::new(
                    rows.chain(std::iter::once_with(move || column::rule(layout)))
                        .chain(plan.labels().map(ToString::to_string)),
                )
            }
        }
    }
}

#[derive(Debug, Clone)]
enum Body {
    Bar(BarLayout),
    Column {
        layout: ColumnLayout,
        plan: ColumnPlan,
    },
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
