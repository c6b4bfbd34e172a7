use std::cell::Cell;

use super::*;

struct FixedProbe {
    size: Option<(usize, usize)>,
    calls: Cell<usize>,
}

impl FixedProbe {
    fn new(size: Option<(usize, usize)>) -> Self {
        Self {
            size,
            calls: Cell::new(0),
        }
    }
}

impl TerminalProbe for FixedProbe {
    fn size(&self) -> io::Result<(usize, usize)> {
        self.calls.set(self.calls.get() + 1);
        self.size
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not a terminal"))
    }
}

const LIMITS: CanvasLimits = CanvasLimits {
    max_width: 800,
    max_height: 20,
};

#[test]
fn probed_size_is_capped() {
    let probe = FixedProbe::new(Some((1000, 50)));
    let canvas = resolve_canvas(&probe, None, None, LIMITS).unwrap();
    assert_eq!(
        canvas,
        Canvas {
            width: 800,
            height: 20
        }
    );
}

#[test]
fn small_terminal_is_used_as_is() {
    let probe = FixedProbe::new(Some((60, 12)));
    let canvas = resolve_canvas(&probe, None, None, LIMITS).unwrap();
    assert_eq!(
        canvas,
        Canvas {
            width: 60,
            height: 12
        }
    );
}

#[test]
fn explicit_dimensions_skip_probe() {
    let probe = FixedProbe::new(None);
    let canvas = resolve_canvas(&probe, Some(1200), Some(40), LIMITS).unwrap();
    assert_eq!(
        canvas,
        Canvas {
            width: 1200,
            height: 40
        }
    );
    assert_eq!(probe.calls.get(), 0);
}

#[test]
fn one_explicit_dimension_still_probes() {
    let probe = FixedProbe::new(Some((100, 30)));
    let canvas = resolve_canvas(&probe, Some(40), None, LIMITS).unwrap();
    assert_eq!(
        canvas,
        Canvas {
            width: 40,
            height: 20
        }
    );
    assert_eq!(probe.calls.get(), 1);
}

#[test]
fn probe_failure_is_fatal() {
    let probe = FixedProbe::new(None);
    let err = resolve_canvas(&probe, None, Some(10), LIMITS).unwrap_err();
    assert!(matches!(err, PlotError::TerminalSize(_)));
}

#[test]
fn zero_size_is_fatal() {
    let probe = FixedProbe::new(Some((0, 0)));
    let err = resolve_canvas(&probe, None, None, LIMITS).unwrap_err();
    assert!(matches!(err, PlotError::TerminalSize(_)));
}
