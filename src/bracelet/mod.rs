// CLASSIFICATION: COMMUNITY
// Filename: bracelet/mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-19

//! Bracelet telemetry simulation.

pub mod haptic;
pub mod mqtt;
pub mod payload;
pub mod sim;
pub mod sweep;

pub use payload::Telemetry;
pub use sim::{BraceletSimulator, SinkError, TelemetrySink};
pub use sweep::DistanceSweep;
