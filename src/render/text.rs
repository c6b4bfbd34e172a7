//! Number formatting and fixed-width text helpers.
//!
//! Widths are measured in `char`s: one display column per character.

/// Rounds half-up (`floor(x + 0.5)`), saturating at the `u64` range.
///
/// Only for glyph counts; printed numbers go through [`format_integer`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_half_up(value: f64) -> u64 {
    (value + 0.5).floor().max(0.0) as u64
}

/// The value rounded half-up and printed as an integer, at any magnitude.
#[must_use]
pub fn format_integer(value: f64) -> String {
    format!("{:.0}", (value + 0.5).floor())
}

/// Number of characters [`format_integer`] prints for `value`.
#[must_use]
pub fn digit_width(value: f64) -> usize {
    format_integer(value).len()
}

/// Scientific notation with a signed, at least two digit exponent (`1.0e+06`).
#[must_use]
pub fn scientific(value: f64, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return raw;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Centers `text` in `width` columns; the extra space of an odd padding goes right.
/// Text wider than `width` is returned unchanged.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Numeric annotation for a column cell, or `None` when nothing fits.
///
/// Falls back to scientific notation with one decimal above 7 columns and
/// zero decimals above 5.
#[must_use]
pub fn annotation(value: f64, width: usize) -> Option<String> {
    let plain = format_integer(value);
    if plain.len() <= width {
        return Some(center(&plain, width));
    }

    let compact = if width > 7 {
        scientific(value, 1)
    } else if width > 5 {
        scientific(value, 0)
    } else {
        return None;
    };

    (compact.len() <= width).then(|| center(&compact, width))
}

/// Fits a label into `width` columns, returning the text and whether it was cut.
#[must_use]
pub fn fit_label(label: &str, width: usize) -> (String, bool) {
    if label.chars().count() <= width {
        return (center(label, width), false);
    }
    let mut cut: String = label.chars().take(width.saturating_sub(1)).collect();
    cut.push('.');
    (cut, true)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
