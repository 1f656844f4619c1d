//! Telemetry channel identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AnalyticsError;

/// One measured quantity sampled over lap distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Speed in km/h
    Speed,
    /// Throttle application, 0-100 %
    Throttle,
    /// Brake application, 0-100 %
    Brake,
    /// Engine speed
    Rpm,
    /// Selected gear
    Gear,
    /// DRS state, 0 closed / 1 open
    Drs,
}

impl Channel {
    /// Every channel, in dashboard order.
    pub const ALL: [Channel; 6] =
        [Channel::Speed, Channel::Throttle, Channel::Brake, Channel::Rpm, Channel::Gear, Channel::Drs];

    /// JSON key the backend uses for this channel's value in telemetry rows.
    pub fn wire_key(self) -> &'static str {
        match self {
            Channel::Speed => "Speed",
            Channel::Throttle => "Throttle",
            Channel::Brake => "Brake",
            Channel::Rpm => "RPM",
            Channel::Gear => "nGear",
            Channel::Drs => "DRS",
        }
    }

    /// Lowercase name used in backend routes and fixture paths.
    pub fn route_name(self) -> &'static str {
        match self {
            Channel::Speed => "speed",
            Channel::Throttle => "throttle",
            Channel::Brake => "brake",
            Channel::Rpm => "rpm",
            Channel::Gear => "gear",
            Channel::Drs => "drs",
        }
    }

    /// Display units for axis labels.
    pub fn units(self) -> &'static str {
        match self {
            Channel::Speed => "km/h",
            Channel::Throttle | Channel::Brake => "%",
            Channel::Rpm => "rev/min",
            Channel::Gear | Channel::Drs => "",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

impl FromStr for Channel {
    type Err = AnalyticsError;

    /// Accepts route names or wire keys, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Channel::ALL
            .into_iter()
            .find(|c| {
                c.route_name().eq_ignore_ascii_case(needle)
                    || c.wire_key().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| AnalyticsError::UnknownChannel { name: s.to_string() })
    }
}
