//! Core types for telemetry and stint data.
//!
//! These are the domain forms of what the analytics backend returns. Wire
//! decoding lives in [`crate::schema`]; everything here is already validated
//! and ready for the numeric code in [`crate::telemetry`] and [`crate::stint`].
//!
//! - [`TelemetrySample`] is one `(distance, value)` point of one channel
//! - [`Channel`] names the measured quantity and its wire key
//! - [`LapSelector`] picks the fastest lap or a numbered lap
//! - [`Stint`] and [`LapDetail`] carry green-flag lap timing per tyre stint
//! - [`LapPosition`] is one driver's running order at the end of a lap
//!
//! ## Usage Example
//!
//! ```rust
//! use slipstream::types::{Channel, LapSelector, TelemetrySample};
//!
//! let channel: Channel = "throttle".parse().unwrap();
//! assert_eq!(channel.wire_key(), "Throttle");
//!
//! let lap: LapSelector = "fastest".parse().unwrap();
//! assert_eq!(lap, LapSelector::Fastest);
//!
//! let sample = TelemetrySample::new(125.0, 98.5);
//! assert_eq!(sample.value, Some(98.5));
//! ```

mod channel;
mod lap;
mod sample;
mod stint;

pub use channel::Channel;
pub use lap::{LapDetail, LapPosition, LapSelector};
pub use sample::TelemetrySample;
pub use stint::{SessionKey, Stint};
