//! # Backend Payload Decoding
//!
//! The analytics backend speaks JSON. This module turns its payloads into the
//! domain types in [`crate::types`]:
//!
//! | Endpoint                         | Shape                                           | Decoder                  |
//! |----------------------------------|-------------------------------------------------|--------------------------|
//! | `/api/telemetry/<channel>`       | `[{ "Distance": f64, "<WireKey>": f64 \| null }]` | [`decode_telemetry`]     |
//! | `/api/stint-analysis`            | `[{ driverCode, stintNumber, ..., lapDetails }]` | [`decode_stints`]        |
//! | `/api/laps/driver`               | `{ "laps": [u32] }`                              | [`decode_lap_numbers`]   |
//! | `/api/lapdata/positions`         | `[{ "LapNumber": u32, "<DRIVER>": u32 \| null }]` | [`decode_lap_positions`] |
//!
//! Decoding is the only place backend data can be rejected. Once decoded, the
//! numeric code never fails.

mod laps;
mod positions;
mod stints;
mod telemetry;

pub use laps::{LapNumbers, decode_lap_numbers};
pub use positions::{LapPositionRow, decode_lap_positions};
pub use stints::decode_stints;
pub use telemetry::{TelemetryRow, decode_telemetry, encode_telemetry};
