use std::io::Write;
use std::path::PathBuf;

use crate::cli::{Cli, PlotArgs};
use crate::error::Result;
use crate::input::{self, Canvas, CanvasLimits, CrosstermProbe, Source, TerminalProbe};
use crate::output::ErrorOutput;
use crate::render::{Layout, RenderWarning, Renderer};
use crate::EXIT_SUCCESS;

use super::{exit_code_for, load_config};

/// Everything a successful plot decided besides the chart lines themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotReport {
    pub config_source: Option<PathBuf>,
    pub canvas: Canvas,
    pub layout: Layout,
    pub warnings: Vec<RenderWarning>,
}

#[must_use]
pub fn run_plot(cli: &Cli) -> i32 {
    let output = ErrorOutput::stderr();
    let mut stdout = std::io::stdout().lock();

    match run_plot_impl(&cli.plot, cli.no_config, &CrosstermProbe, &mut stdout) {
        Ok(report) => {
            if cli.verbose > 0 {
                print_report(&output, &report);
            }
            if !cli.quiet {
                for warning in &report.warnings {
                    output.print_render_warning(*warning);
                }
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            output.print_plot_error(&e);
            exit_code_for(&e)
        }
    }
}

/// Reads the data, sizes the canvas, renders the chart and writes it to `out`.
///
/// Nothing is written to `out` unless the whole chart could be laid out.
///
/// # Errors
/// Returns an error if the config cannot be loaded, the data is invalid, the
/// terminal size is needed but unavailable, or the chart cannot be laid out.
pub fn run_plot_impl<P: TerminalProbe, W: Write>(
    args: &PlotArgs,
    no_config: bool,
    probe: &P,
    out: &mut W,
) -> Result<PlotReport> {
    let loaded = load_config(args.config.as_deref(), no_config)?;
    let config = &loaded.config;

    let dataset = match input::classify(&args.data)? {
        Source::File(path) => input::read_data_file(&path, args.delimiter)?,
        Source::Inline(tokens) => input::parse_inline(tokens)?,
    };
    let request = dataset.into_request()?;

    let limits = CanvasLimits {
        max_width: config.chart.max_width,
        max_height: config.chart.max_height,
    };
    let canvas = input::resolve_canvas(
        probe,
        args.width.map(usize::from),
        args.height.map(usize::from),
        limits,
    )?;

    let request = request
        .with_title(args.title.clone())
        .with_orientation(args.chart.unwrap_or(config.chart.kind))
        .with_bounds(canvas.width, canvas.height);

    let chart = Renderer::new(config.style.highlight).render(&request)?;
    chart.write_to(out)?;

    Ok(PlotReport {
        config_source: loaded.source,
        canvas,
        layout: chart.layout(),
        warnings: chart.warnings().to_vec(),
    })
}

fn print_report(output: &ErrorOutput, report: &PlotReport) {
    match &report.config_source {
        Some(path) => output.print_info(&format!("config: {}", path.display())),
        None => output.print_info("config: built-in defaults"),
    }
    output.print_info(&format!(
        "canvas: {}x{}",
        report.canvas.width, report.canvas.height
    ));
    output.print_info(&report.layout.to_string());
}

#[cfg(test)]
#[path = "plot_tests.rs"]
mod tests;
