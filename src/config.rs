//! Configuration file support for project-dependents.
//!
//! Provides YAML-based configuration through `project-dependents.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use project_dependents::application::dto::OutputFormat;
use project_dependents::shared::Result;

pub const CONFIG_FILENAME: &str = "project-dependents.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub excluded_configurations: Option<Vec<String>>,
    pub output_formats: Option<Vec<String>>,
    pub depth: Option<i64>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed output formats; validation guarantees every entry parses.
    pub fn formats(&self) -> Option<Vec<OutputFormat>> {
        self.output_formats.as_ref().map(|formats| {
            formats
                .iter()
                .filter_map(|f| OutputFormat::from_str(f).ok())
                .collect()
        })
    }

    /// Depth as an unsigned value; validation guarantees it is positive.
    pub fn max_depth(&self) -> Option<usize> {
        self.depth.and_then(|d| usize::try_from(d).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(depth) = config.depth {
        if depth < 1 {
            bail!(
                "Invalid config: depth must be a positive integer, got {}.\n\n\
                 💡 Hint: Remove 'depth' to list dependents without a limit.",
                depth
            );
        }
    }

    if let Some(ref formats) = config.output_formats {
        for (i, format) in formats.iter().enumerate() {
            if let Err(e) = OutputFormat::from_str(format) {
                bail!("Invalid config: output_formats[{}]: {}", i, e);
            }
        }
    }

    if let Some(ref excluded) = config.excluded_configurations {
        for (i, name) in excluded.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: excluded_configurations[{}] must not be empty.\n\n\
                     💡 Hint: Use configuration names such as \"testImplementation\".",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
