//! Engine settings loaded from JSON.
//!
//! Missing fields fall back to the defaults, so `{}` is a valid settings
//! document.

use serde::{Deserialize, Serialize};

use hotelbook_logic::config::{
    validate_config, validate_layout, AllocationConfig, ConfigError, HotelLayout,
};

use crate::repository::InventoryError;

/// Allocation thresholds plus building layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub allocation: AllocationConfig,
    pub layout: HotelLayout,
}

/// Error loading settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Document is not valid JSON for `Settings`.
    Json(serde_json::Error),
    /// Parsed but failed validation.
    Invalid(Vec<ConfigError>),
    /// Layout could not be turned into a room inventory.
    Inventory(InventoryError),
}

impl From<InventoryError> for SettingsError {
    fn from(e: InventoryError) -> Self {
        SettingsError::Inventory(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Json(e) => write!(f, "Settings parse error: {}", e),
            SettingsError::Invalid(errors) => {
                write!(f, "Invalid settings:")?;
                for e in errors {
                    write!(f, " {};", e)?;
                }
                Ok(())
            }
            SettingsError::Inventory(e) => write!(f, "Inventory error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    /// Parse and validate a settings document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        let errors = settings.validate();
        if !errors.is_empty() {
            return Err(SettingsError::Invalid(errors));
        }
        Ok(settings)
    }

    /// All validation errors across both sections.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = validate_config(&self.allocation);
        errors.extend(validate_layout(&self.layout));
        errors
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
