// CLASSIFICATION: COMMUNITY
// Filename: monitor.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-21

//! Telemetry topic monitor.
//!
//! Backend-side counterpart of the bracelet: subscribes to the telemetry
//! topic, decodes each reading, and flags pulse values above the stress
//! threshold. Persistence and push notification are out of scope; the
//! warning is a log line.

use serde_json::Error as JsonError;

use crate::bracelet::payload::Telemetry;

/// Pulse above this is treated as a high-stress reading.
pub const DEFAULT_STRESS_BPM: u32 = 120;

/// A decoded reading with its stress classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressReading {
    pub telemetry: Telemetry,
    pub high_stress: bool,
}

/// Decode one published payload and classify it.
///
/// Malformed payloads return the decode error so the caller can log and
/// skip them; a bad reading must not take the monitor down.
pub fn classify_payload(bytes: &[u8], stress_bpm: u32) -> Result<StressReading, JsonError> {
    let telemetry: Telemetry = serde_json::from_slice(bytes)?;
    let high_stress = telemetry.pulse_bpm > stress_bpm;
    Ok(StressReading {
        telemetry,
        high_stress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(pulse: u32) -> Vec<u8> {
        serde_json::to_vec(&Telemetry {
            device_id: "BRAC-001".into(),
            distance_cm: 120,
            pulse_bpm: pulse,
            battery_pct: 85,
        })
        .unwrap()
    }

    #[test]
    fn pulse_above_threshold_flags_stress() {
        let reading = classify_payload(&payload(121), DEFAULT_STRESS_BPM).unwrap();
        assert!(reading.high_stress);
    }

    #[test]
    fn threshold_itself_is_calm() {
        let reading = classify_payload(&payload(120), DEFAULT_STRESS_BPM).unwrap();
        assert!(!reading.high_stress);
    }

    #[test]
    fn simulated_band_never_flags() {
        for pulse in 70..=110 {
            let reading = classify_payload(&payload(pulse), DEFAULT_STRESS_BPM).unwrap();
            assert!(!reading.high_stress);
        }
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(classify_payload(b"not json", DEFAULT_STRESS_BPM).is_err());
    }
}
