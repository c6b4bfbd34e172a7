use serde::{Deserialize, Serialize};

/// ANSI escape sequences written into chart lines.
pub mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Fixed foreground colour used for bar and column glyphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Red,
    Green,
    Yellow,
    #[default]
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Highlight {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }

    /// Wraps `text` in this colour and a reset.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{}", self.escape(), ansi::RESET)
    }
}

/// Wraps `text` in bold and a reset.
#[must_use]
pub fn bold(text: &str) -> String {
    format!("{}{text}{}", ansi::BOLD, ansi::RESET)
}
