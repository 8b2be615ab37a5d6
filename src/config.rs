// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::parser::syntax::{
    CliSyntax, END_DATE_MARKERS, PREFIX_END_DATE, PREFIX_START_DATE, PREFIX_TAG, REMOVE_KEYWORD,
    START_DATE_MARKERS,
};
use anyhow::{Context, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

fn default_start_prefix() -> String {
    PREFIX_START_DATE.to_string()
}
fn default_end_prefix() -> String {
    PREFIX_END_DATE.to_string()
}
fn default_tag_prefix() -> String {
    PREFIX_TAG.to_string()
}

fn default_start_markers() -> Vec<String> {
    START_DATE_MARKERS.iter().map(|m| m.to_string()).collect()
}
fn default_end_markers() -> Vec<String> {
    END_DATE_MARKERS.iter().map(|m| m.to_string()).collect()
}

fn default_removal_keyword() -> String {
    REMOVE_KEYWORD.to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_start_prefix")]
    pub start_date_prefix: String,
    #[serde(default = "default_end_prefix")]
    pub end_date_prefix: String,
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default = "default_start_markers")]
    pub start_date_markers: Vec<String>,
    #[serde(default = "default_end_markers")]
    pub end_date_markers: Vec<String>,

    #[serde(default = "default_removal_keyword")]
    pub removal_keyword: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_date_prefix: default_start_prefix(),
            end_date_prefix: default_end_prefix(),
            tag_prefix: default_tag_prefix(),
            start_date_markers: default_start_markers(),
            end_date_markers: default_end_markers(),
            removal_keyword: default_removal_keyword(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading, parsing or validation fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::info!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }
        err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
        })
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        self.validate()?;
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)
            .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
        Ok(())
    }

    /// Prefixes must be non-empty and distinct, markers may not belong to
    /// both date groups.
    pub fn validate(&self) -> Result<()> {
        let prefixes = [
            &self.start_date_prefix,
            &self.end_date_prefix,
            &self.tag_prefix,
        ];
        if prefixes.iter().any(|p| p.trim().is_empty()) {
            anyhow::bail!("Flag prefixes must not be empty");
        }
        let unique: HashSet<&String> = prefixes.iter().copied().collect();
        if unique.len() != prefixes.len() {
            anyhow::bail!("Flag prefixes must be distinct");
        }

        if self.removal_keyword.trim().is_empty() {
            anyhow::bail!("Removal keyword must not be empty");
        }

        let start: HashSet<String> = self
            .start_date_markers
            .iter()
            .map(|m| m.to_lowercase())
            .collect();
        if let Some(shared) = self
            .end_date_markers
            .iter()
            .find(|m| start.contains(&m.to_lowercase()))
        {
            anyhow::bail!("Date marker '{}' is both a start and an end marker", shared);
        }
        Ok(())
    }

    /// Parser vocabulary with markers and keyword lower-cased.
    pub fn syntax(&self) -> CliSyntax {
        let lower = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        CliSyntax {
            start_prefix: self.start_date_prefix.clone(),
            end_prefix: self.end_date_prefix.clone(),
            tag_prefix: self.tag_prefix.clone(),
            start_markers: lower(&self.start_date_markers),
            end_markers: lower(&self.end_date_markers),
            removal_keyword: self.removal_keyword.trim().to_lowercase(),
        }
    }
}
