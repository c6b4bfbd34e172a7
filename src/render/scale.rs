use super::text::round_half_up;

/// Converts values into glyph counts for one render.
///
/// Holds `max / budget`, or nothing when the largest value is zero, in which
/// case every value maps to zero glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleUnit(Option<f64>);

impl ScaleUnit {
    /// Builds the unit for a series whose largest value is `max_value`,
    /// drawn into `budget` glyphs. A zero budget is treated as 1.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(max_value: f64, budget: usize) -> Self {
        if max_value > 0.0 {
            Self(Some(max_value / budget.max(1) as f64))
        } else {
            Self(None)
        }
    }

    /// Value represented by one glyph, `None` for an all-zero series.
    #[must_use]
    pub const fn unit(self) -> Option<f64> {
        self.0
    }

    /// Glyph count of `value`: `floor(value / unit + 0.5)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn glyphs(self, value: f64) -> usize {
        self.0.map_or(0, |unit| round_half_up(value / unit) as usize)
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
