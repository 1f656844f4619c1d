//! Telemetry source implementations

pub mod fixture;

pub use fixture::FixtureSource;
