// CLASSIFICATION: COMMUNITY
// Filename: bracelet/payload.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-19

//! Telemetry wire payload.
//!
//! Field names on the wire match the firmware and the backend subscriber
//! (`deviceId`, `distance`, `pulse`, `battery`); distances are centimetres,
//! pulse is beats per minute, battery is a percentage.

use serde::{Deserialize, Serialize};

/// One published bracelet reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telemetry {
    #[serde(rename = "deviceId")]
    pub device_id: String,
    #[serde(rename = "distance")]
    pub distance_cm: u32,
    #[serde(rename = "pulse")]
    pub pulse_bpm: u32,
    #[serde(rename = "battery")]
    pub battery_pct: u8,
}
