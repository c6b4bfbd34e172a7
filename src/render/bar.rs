use std::fmt::Write;

use super::layout::BarLayout;
use super::style::Highlight;
use super::text::format_integer;

pub const AXIS: char = '│';
pub const BAR_GLYPH: &str = "■";

/// One horizontal bar: `label│■■■ value`.
pub(super) fn line(
    label: Option<&str>,
    value: f64,
    layout: &BarLayout,
    highlight: Highlight,
) -> String {
    let mut line = String::new();
    if let Some(label) = label {
        let _ = write!(line, "{label:>width$}", width = layout.label_width);
    }
    line.push(AXIS);
    line.push_str(&highlight.paint(&BAR_GLYPH.repeat(layout.scale.glyphs(value))));
    let _ = write!(line, " {}", format_integer(value));
    line
}
