//! Analytics configuration
//!
//! Everything the palette and roster lookups need that is not season data
//! itself. Defaults match the dashboard; a YAML file can override any subset:
//!
//! ```yaml
//! latest_season: 2025
//! default_roster_season: 2024
//! teammate_contrast_color: "#FFFFFF"
//! fallback_colors: ["#EF4444", "#3B82F6"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::{AnalyticsError, Result};

/// Default palette cycled for drivers with no season colour.
pub const DEFAULT_FALLBACK_COLORS: [&str; 10] = [
    "#EF4444", "#3B82F6", "#22C55E", "#EAB308", "#A855F7", "#EC4899", "#F97316", "#14B8A6",
    "#6366F1", "#84CC16",
];

/// Analytics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Season whose colours are used when a driver is missing from the requested season
    pub latest_season: u16,
    /// Season whose team roster is used for seasons with no roster
    pub default_roster_season: u16,
    /// Colours cycled for drivers with no mapping at all
    pub fallback_colors: Vec<String>,
    /// Colour given to the second driver when comparing two teammates
    pub teammate_contrast_color: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            latest_season: 2025,
            default_roster_season: 2024,
            fallback_colors: DEFAULT_FALLBACK_COLORS.iter().map(|c| c.to_string()).collect(),
            teammate_contrast_color: "#FFFFFF".to_string(),
        }
    }
}

impl AnalyticsConfig {
    /// Parse configuration from YAML. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)
            .map_err(|e| AnalyticsError::Config { details: format!("YAML parsing failed: {}", e) })?;
        config.validate()?;
        debug!(?config, "Loaded analytics configuration");
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| AnalyticsError::file_error(path.to_path_buf(), e))?;
        info!("Loading analytics configuration from {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_colors.is_empty() {
            return Err(AnalyticsError::Config {
                details: "fallback_colors must contain at least one colour".to_string(),
            });
        }
        Ok(())
    }
}
