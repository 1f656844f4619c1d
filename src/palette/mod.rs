//! Chart colours and line styles.
//!
//! Drivers are coloured by their team's livery for the season. When a driver is
//! unknown for the season the latest season is consulted, and after that a
//! fallback palette is cycled through a caller-owned [`FallbackColors`].
//! Teammates share a colour, so multi-driver charts distinguish them by
//! [`line_style`] and two-driver comparisons swap in a contrast colour.

mod compound;
mod driver_color;
mod seasons;
mod teams;

pub use compound::{COMPOUND_COLORS, UNKNOWN_COMPOUND_COLOR, compound_color};
pub use driver_color::{DriverPalette, FallbackColors};
pub use teams::{LineStyle, TeamRoster, line_style};
