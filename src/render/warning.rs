use std::fmt;

/// Non-fatal problems found while laying out a chart.
///
/// Rendering continues; the caller decides how to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderWarning {
    /// Labels and value text leave no room for bars.
    LabelsTooLong,
    /// The display is too short for proportional columns.
    HeightTooSmall,
    /// A column annotation does not fit even in scientific notation.
    NotEnoughSpace,
    /// A column label was cut to the column width.
    LabelsTruncated,
}

impl RenderWarning {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LabelsTooLong => "labels are too long to display chart values proportionally",
            Self::HeightTooSmall => "display is too short to show chart values proportionally",
            Self::NotEnoughSpace => "not enough space to display values",
            Self::LabelsTruncated => "labels truncated",
        }
    }

    /// Hint shown under the warning.
    #[must_use]
    pub const fn suggestion(self) -> &'static str {
        match self {
            Self::LabelsTooLong => "Use shorter labels or a wider --width",
            Self::HeightTooSmall => "Use a taller --height",
            Self::NotEnoughSpace | Self::LabelsTruncated => {
                "Use fewer values, a wider --width, or -c bar"
            }
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
