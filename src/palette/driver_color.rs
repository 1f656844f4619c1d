//! Per-season driver colours

use tracing::trace;

use super::seasons::DRIVER_COLORS;
use super::teams::TeamRoster;
use crate::config::{AnalyticsConfig, DEFAULT_FALLBACK_COLORS};

/// Cycles through a fallback palette for drivers without a season colour.
///
/// The position is owned by whoever renders a chart, so two charts never
/// disturb each other's colour assignment and tests stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackColors {
    palette: Vec<String>,
    issued: usize,
}

impl Default for FallbackColors {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_COLORS.iter().map(|c| c.to_string()).collect())
    }
}

impl FallbackColors {
    /// An empty palette falls back to the built-in one.
    pub fn new(palette: Vec<String>) -> Self {
        if palette.is_empty() {
            return Self::default();
        }
        Self { palette, issued: 0 }
    }

    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.fallback_colors.clone())
    }

    /// Next colour in the cycle.
    pub fn next_color(&mut self) -> String {
        let color = self.palette[self.issued % self.palette.len()].clone();
        self.issued += 1;
        color
    }

    /// How many colours have been handed out.
    pub fn issued(&self) -> usize {
        self.issued
    }

    pub fn reset(&mut self) {
        self.issued = 0;
    }
}

/// Colour assignment for drivers on charts
#[derive(Debug, Clone, Default)]
pub struct DriverPalette {
    config: AnalyticsConfig,
}

impl DriverPalette {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Colour listed for `driver` in `season`, if any.
    pub fn season_color(driver: &str, season: u16) -> Option<&'static str> {
        DRIVER_COLORS
            .iter()
            .find(|(year, _)| *year == season)
            .and_then(|(_, drivers)| drivers.iter().find(|(code, _)| *code == driver))
            .map(|(_, color)| *color)
    }

    /// Colour for `driver`: the season's colour, else the latest season's, else the
    /// next fallback colour.
    pub fn color(&self, driver: &str, season: u16, fallback: &mut FallbackColors) -> String {
        if let Some(color) = Self::season_color(driver, season) {
            return color.to_string();
        }
        if let Some(color) = Self::season_color(driver, self.config.latest_season) {
            trace!(driver, season, latest = self.config.latest_season, "Using latest season colour");
            return color.to_string();
        }
        let color = fallback.next_color();
        trace!(driver, season, %color, "Using fallback colour");
        color
    }

    /// Colours for a two-driver comparison. Teammates share a livery colour, so
    /// the second driver gets the contrast colour instead.
    pub fn comparison_colors(
        &self,
        driver_a: &str,
        driver_b: &str,
        season: u16,
        roster: &TeamRoster,
        fallback: &mut FallbackColors,
    ) -> (String, String) {
        let color_a = self.color(driver_a, season, fallback);
        let color_b = if roster.are_teammates(driver_a, driver_b, season) {
            self.config.teammate_contrast_color.clone()
        } else {
            self.color(driver_b, season, fallback)
        };
        (color_a, color_b)
    }
}
