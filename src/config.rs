//! Configuration file support for eol-report.
//!
//! Provides YAML-based configuration through `eol-report.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::eol_analysis::services::SortField;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "eol-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Dataset file path or http(s) URL
    pub data_source: Option<String>,
    pub format: Option<String>,
    /// JSON-lines file receiving submitted support requests
    pub support_log: Option<PathBuf>,
    /// Initially active sort column of package lists
    pub default_sort: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// `format` parsed; only call on a validated config
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }

    /// `default_sort` parsed; only call on a validated config
    pub fn sort_field(&self) -> Option<SortField> {
        self.default_sort
            .as_deref()
            .and_then(|s| SortField::from_str(s).ok())
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
    if let Some(ref data_source) = config.data_source {
        if data_source.trim().is_empty() {
            bail!(
                "Invalid config: data_source must not be empty.\n\n\
                 💡 Hint: Set data_source to a dataset path (e.g., \"data.json\") or an http(s) URL, or remove the field."
            );
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref default_sort) = config.default_sort {
        if let Err(e) = SortField::from_str(default_sort) {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
