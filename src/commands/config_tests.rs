use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{format_config_text, run_config_show_impl, run_config_validate_impl};
use crate::cli::ConfigOutputFormat;
use crate::config::{Config, LoadResult};
use crate::render::Highlight;
use crate::request::Orientation;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_config_nonexistent_file_returns_error() {
    let result = run_config_validate_impl(Path::new("nonexistent_config.toml"));
    assert!(result.unwrap_err().to_string().contains("not found"));
}

#[test]
fn validate_config_invalid_toml_returns_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "this is not valid { toml }");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn validate_config_valid_minimal_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "# minimal valid config\n");
    assert!(run_config_validate_impl(&path).is_ok());
}

#[test]
fn validate_config_rejects_zero_height() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[chart]\nmax_height = 0\n");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(err.to_string().contains("max_height"));
}

#[test]
fn validate_config_rejects_unknown_highlight() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[style]\nhighlight = \"purple\"\n");
    assert!(run_config_validate_impl(&path).is_err());
}

#[test]
fn show_text_lists_sections_and_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[chart]\nkind = \"col\"\nmax_width = 120\n");

    let output = run_config_show_impl(Some(&path), ConfigOutputFormat::Text, false).unwrap();
    assert!(output.starts_with("=== Effective Configuration ===\n"));
    assert!(output.contains(&format!("# source: {}", path.display())));
    assert!(output.contains("  kind = \"column\""));
    assert!(output.contains("  max_width = 120"));
    assert!(output.contains("  max_height = 20"));
    assert!(output.contains("  highlight = \"blue\""));
}

#[test]
fn show_json_round_trips_into_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[style]\nhighlight = \"green\"\n");

    let output = run_config_show_impl(Some(&path), ConfigOutputFormat::Json, false).unwrap();
    let config: Config = serde_json::from_str(&output).unwrap();
    assert_eq!(config.style.highlight, Highlight::Green);
    assert_eq!(config.chart.kind, Orientation::Bar);
}

#[test]
fn show_with_no_config_uses_defaults() {
    let output = run_config_show_impl(
        Some(Path::new("missing.toml")),
        ConfigOutputFormat::Text,
        true,
    )
    .unwrap();
    assert!(output.contains("# source: built-in defaults"));
}

#[test]
fn format_config_text_defaults() {
    let loaded = LoadResult {
        config: Config::default(),
        source: None,
    };
    let text = format_config_text(&loaded);
    assert_eq!(
        text,
        "=== Effective Configuration ===\n\
         # source: built-in defaults\n\
         \n\
         [chart]\n  \
         kind = \"bar\"\n  \
         max_width = 800\n  \
         max_height = 20\n\
         \n\
         [style]\n  \
         highlight = \"blue\"\n"
    );
}
