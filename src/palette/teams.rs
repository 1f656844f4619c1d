//! Team rosters and teammate line styles

use serde::Serialize;
use std::collections::BTreeMap;

use super::seasons::TEAM_ROSTERS;
use crate::config::AnalyticsConfig;

type Roster = &'static [(&'static str, &'static [&'static str])];

/// Team membership lookups by season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRoster {
    default_season: u16,
}

impl Default for TeamRoster {
    fn default() -> Self {
        Self::from_config(&AnalyticsConfig::default())
    }
}

impl TeamRoster {
    pub fn new(default_season: u16) -> Self {
        Self { default_season }
    }

    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.default_roster_season)
    }

    /// Teams for `season`, or for the default season when `season` has no roster.
    pub fn roster(&self, season: u16) -> Roster {
        find_roster(season).or_else(|| find_roster(self.default_season)).unwrap_or(&[])
    }

    /// Whether some team lists both drivers in `season`.
    pub fn are_teammates(&self, driver_a: &str, driver_b: &str, season: u16) -> bool {
        self.roster(season)
            .iter()
            .any(|(_, drivers)| lists(drivers, driver_a) && lists(drivers, driver_b))
    }

    /// First team listing `driver` in `season`.
    pub fn team_of(&self, driver: &str, season: u16) -> Option<&'static str> {
        self.roster(season)
            .iter()
            .find(|(_, drivers)| lists(drivers, driver))
            .map(|(team, _)| *team)
    }

    /// Group the selected drivers by team, preserving selection order inside
    /// each team. Drivers without a team are left out.
    pub fn group_by_team<S: AsRef<str>>(
        &self,
        drivers: &[S],
        season: u16,
    ) -> BTreeMap<&'static str, Vec<String>> {
        let mut groups: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for driver in drivers {
            let driver = driver.as_ref();
            if let Some(team) = self.team_of(driver, season) {
                groups.entry(team).or_default().push(driver.to_string());
            }
        }
        groups
    }
}

fn lists(drivers: &[&str], driver: &str) -> bool {
    drivers.iter().any(|d| *d == driver)
}

fn find_roster(season: u16) -> Option<Roster> {
    TEAM_ROSTERS.iter().find(|(year, _)| *year == season).map(|(_, roster)| *roster)
}

/// Stroke settings for one driver's line on a multi-driver chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct LineStyle {
    /// SVG `stroke-dasharray`, `None` for a solid line
    pub dash: Option<&'static str>,
    pub width: f32,
}

impl LineStyle {
    pub const SOLID: LineStyle = LineStyle { dash: None, width: 2.5 };
    pub const DASHED: LineStyle = LineStyle { dash: Some("5,3"), width: 2.5 };
    pub const DOTTED: LineStyle = LineStyle { dash: Some("2,2"), width: 3.0 };
}

/// Line style that tells `driver` apart from the other selected drivers of
/// the same team. `teammates` is the team's group from [`TeamRoster::group_by_team`].
pub fn line_style<S: AsRef<str>>(driver: &str, teammates: &[S]) -> LineStyle {
    if teammates.len() <= 1 {
        return LineStyle::SOLID;
    }
    match teammates.iter().position(|t| t.as_ref() == driver).map(|i| i % 3) {
        Some(1) => LineStyle::DASHED,
        Some(2) => LineStyle::DOTTED,
        _ => LineStyle::SOLID,
    }
}
