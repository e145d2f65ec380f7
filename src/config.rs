// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-19

//! Bracelet simulator configuration.
//!
//! Defaults carry the firmware constants; each field can be overridden via
//! `DEAFNAV_*` environment variables, and the CLI flags override both.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Broker, topic and sweep parameters for the bracelet simulator.
#[derive(Debug, Clone)]
pub struct BraceletConfig {
    pub broker_host: String,
    pub broker_port: u16,
    pub topic: String,
    pub client_id: String,
    pub device_id: String,
    /// Reported battery charge, constant across the sweep.
    pub battery_pct: u8,
    /// Sweep start distance in centimetres.
    pub start_cm: u32,
    /// Sweep floor in centimetres, never reached.
    pub floor_cm: u32,
    /// Decrement applied per tick.
    pub step_cm: u32,
    /// Readings strictly below this distance trigger the haptic alert.
    pub alert_cm: u32,
    /// Pause between published readings.
    pub interval: Duration,
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

impl Default for BraceletConfig {
    fn default() -> Self {
        let broker_port = env::var("DEAFNAV_BROKER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1883);
        Self {
            broker_host: env_or("DEAFNAV_BROKER_HOST", "localhost"),
            broker_port,
            topic: env_or("DEAFNAV_TOPIC", "deafnav/telemetry"),
            client_id: env_or("DEAFNAV_CLIENT_ID", "DeafNav_Simulated_Bracelet"),
            device_id: env_or("DEAFNAV_DEVICE_ID", "BRAC-001"),
            battery_pct: 85,
            start_cm: 300,
            floor_cm: 10,
            step_cm: 20,
            alert_cm: 50,
            interval: Duration::from_secs(1),
        }
    }
}

/// Errors produced when validating a simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("distance step must be non-zero")]
    ZeroStep,
    #[error("alert threshold {alert_cm}cm exceeds sweep start {start_cm}cm")]
    AlertAboveStart { alert_cm: u32, start_cm: u32 },
}

impl BraceletConfig {
    /// Reject parameter combinations that would stall or silence the sweep.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_cm == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.alert_cm > self.start_cm {
            return Err(ConfigError::AlertAboveStart {
                alert_cm: self.alert_cm,
                start_cm: self.start_cm,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_firmware_constants() {
        let cfg = BraceletConfig::default();
        assert_eq!(cfg.topic, "deafnav/telemetry");
        assert_eq!(cfg.device_id, "BRAC-001");
        assert_eq!(cfg.battery_pct, 85);
        assert_eq!(cfg.start_cm, 300);
        assert_eq!(cfg.floor_cm, 10);
        assert_eq!(cfg.step_cm, 20);
        assert_eq!(cfg.alert_cm, 50);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_step_rejected() {
        let cfg = BraceletConfig {
            step_cm: 0,
            ..BraceletConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::ZeroStep)));
    }

    #[test]
    fn alert_above_start_rejected() {
        let cfg = BraceletConfig {
            alert_cm: 400,
            ..BraceletConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::AlertAboveStart { .. })
        ));
    }
}
