// CLASSIFICATION: COMMUNITY
// Filename: bracelet/sim.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-08-21

//! Bracelet simulator loop.
//!
//! Walks the distance sweep, draws a pulse per tick, and hands each
//! reading to a [`TelemetrySink`]. The sink seam keeps the loop testable
//! without a broker; the MQTT implementation lives in [`super::mqtt`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use log::{debug, info, warn};
use rand::Rng;
use thiserror::Error;

use crate::bracelet::haptic::{should_alert, vibration_intensity};
use crate::bracelet::payload::Telemetry;
use crate::bracelet::sweep::DistanceSweep;
use crate::config::BraceletConfig;

/// Pulse range in beats per minute, inclusive on both ends.
pub const PULSE_RANGE_BPM: (u32, u32) = (70, 110);

/// Errors surfaced by a telemetry sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("broker connection lost: {0}")]
    Connection(String),
    #[error("payload encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Destination for published readings.
pub trait TelemetrySink {
    fn publish(&mut self, telemetry: &Telemetry) -> Result<(), SinkError>;
}

/// Replays approach sweeps until stopped or the sink fails.
pub struct BraceletSimulator {
    cfg: BraceletConfig,
}

impl BraceletSimulator {
    pub fn new(cfg: BraceletConfig) -> Self {
        Self { cfg }
    }

    /// One full approach sweep. Returns early when `stop` is raised.
    pub fn run_sweep(
        &self,
        sink: &mut dyn TelemetrySink,
        stop: &AtomicBool,
    ) -> Result<(), SinkError> {
        let mut rng = rand::thread_rng();
        let sweep = DistanceSweep::new(self.cfg.start_cm, self.cfg.floor_cm, self.cfg.step_cm);
        for distance_cm in sweep {
            if stop.load(Ordering::Relaxed) {
                return Ok(());
            }
            let pulse_bpm = rng.gen_range(PULSE_RANGE_BPM.0..=PULSE_RANGE_BPM.1);
            let telemetry = Telemetry {
                device_id: self.cfg.device_id.clone(),
                distance_cm,
                pulse_bpm,
                battery_pct: self.cfg.battery_pct,
            };
            sink.publish(&telemetry)?;
            info!("Sending: Dist: {distance_cm}cm, Pulse: {pulse_bpm}bpm");
            if should_alert(distance_cm, self.cfg.alert_cm) {
                warn!("[HAPTIC ALERT] High Intensity Vibration Triggered!");
                debug!(
                    "vibration duty {} at {distance_cm}cm",
                    vibration_intensity(distance_cm)
                );
            }
            if !self.cfg.interval.is_zero() {
                thread::sleep(self.cfg.interval);
            }
        }
        Ok(())
    }

    /// Unbounded outer loop of sweeps, exiting cleanly when `stop` is raised.
    pub fn run(&self, sink: &mut dyn TelemetrySink, stop: &AtomicBool) -> Result<(), SinkError> {
        while !stop.load(Ordering::Relaxed) {
            self.run_sweep(sink, stop)?;
        }
        Ok(())
    }
}
