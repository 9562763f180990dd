//! Bridge configuration (`bridge.toml`).

use crate::{BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables of the import/export orchestration.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Run duplicate removal on import.
    pub deduplicate: bool,
    /// Joins the hierarchy levels of an organization (company, department,
    /// team) into one company value.
    pub organisation_separator: String,
    /// Flag the first surviving entry of a category as main when none is.
    pub assign_main_entry: bool,
    /// Export event dates that are neither birthdays nor anniversaries to the
    /// interchange format as anniversaries instead of skipping them.
    pub export_other_dates: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            deduplicate: true,
            organisation_separator: " - ".to_string(),
            assign_main_entry: true,
            export_other_dates: false,
        }
    }
}

impl BridgeConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> BridgeResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> BridgeResult<()> {
        if self.organisation_separator.is_empty() {
            return Err(BridgeError::Config("organisation_separator must not be empty".into()));
        }
        Ok(())
    }
}
