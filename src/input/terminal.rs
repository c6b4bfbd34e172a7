use std::io;

use crate::error::{PlotError, Result};

/// Source of the terminal size in character cells.
pub trait TerminalProbe {
    /// Returns `(columns, rows)`.
    ///
    /// # Errors
    /// Returns an error if the size cannot be determined.
    fn size(&self) -> io::Result<(usize, usize)>;
}

/// Probes the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermProbe;

impl TerminalProbe for CrosstermProbe {
    fn size(&self) -> io::Result<(usize, usize)> {
        let (columns, rows) = crossterm::terminal::size()?;
        Ok((usize::from(columns), usize::from(rows)))
    }
}

/// Caps applied to a probed terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasLimits {
    pub max_width: usize,
    pub max_height: usize,
}

/// Character grid available to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
}

/// Resolves the canvas from explicit dimensions and, for any missing one,
/// the terminal size capped by `limits`.
///
/// The probe is not consulted when both dimensions are given.
///
/// # Errors
/// Returns [`PlotError::TerminalSize`] if the probe is needed and fails or
/// reports a zero size.
pub fn resolve_canvas<P: TerminalProbe>(
    probe: &P,
    width: Option<usize>,
    height: Option<usize>,
    limits: CanvasLimits,
) -> Result<Canvas> {
    if let (Some(width), Some(height)) = (width, height) {
        return Ok(Canvas { width, height });
    }

    let (columns, rows) = probe.size().map_err(PlotError::TerminalSize)?;
    if columns == 0 || rows == 0 {
        return Err(PlotError::TerminalSize(io::Error::other(
            "terminal reported a zero size",
        )));
    }

    Ok(Canvas {
        width: width.unwrap_or_else(|| columns.min(limits.max_width)),
        height: height.unwrap_or_else(|| rows.min(limits.max_height)),
    })
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
