use serde::{Deserialize, Serialize};

use crate::render::Highlight;
use crate::request::Orientation;

/// Width cap applied to the probed terminal width.
pub const DEFAULT_MAX_WIDTH: usize = 800;

/// Height cap applied to the probed terminal height.
pub const DEFAULT_MAX_HEIGHT: usize = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

/// Chart defaults [chart].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartConfig {
    /// Orientation used when `-c` is not given.
    #[serde(default)]
    pub kind: Orientation,

    /// Upper bound for the probed terminal width.
    #[serde(default = "default_max_width")]
    pub max_width: usize,

    /// Upper bound for the probed terminal height.
    #[serde(default = "default_max_height")]
    pub max_height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            kind: Orientation::default(),
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

/// Output styling [style].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleConfig {
    /// Colour of bar and column glyphs.
    #[serde(default)]
    pub highlight: Highlight,
}

const fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

const fn default_max_height() -> usize {
    DEFAULT_MAX_HEIGHT
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
