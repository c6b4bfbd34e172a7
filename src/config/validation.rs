//! Configuration semantic validation.

use crate::config::Config;
use crate::{PlotError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a size cap is zero.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.chart.max_width == 0 {
        return Err(PlotError::Config(
            "chart.max_width must be at least 1".to_string(),
        ));
    }
    if config.chart.max_height == 0 {
        return Err(PlotError::Config(
            "chart.max_height must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
