// CLASSIFICATION: COMMUNITY
// Filename: bracelet/mqtt.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-08-21

//! MQTT telemetry sink.
//!
//! Connects once with the configured client id and publishes JSON payloads
//! at QoS 0. rumqttc's event loop is drained on a background thread; the
//! first connection error it sees is parked and re-surfaced from the next
//! `publish`, so an unreachable broker fails the simulator loop instead of
//! being retried silently.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::{debug, error, info};
use rumqttc::{Client, Connection, MqttOptions, QoS};

use crate::bracelet::payload::Telemetry;
use crate::bracelet::sim::{SinkError, TelemetrySink};
use crate::config::BraceletConfig;

const KEEP_ALIVE: Duration = Duration::from_secs(5);
const REQUEST_QUEUE: usize = 16;

/// Publishing half of an MQTT session.
pub struct MqttSink {
    client: Client,
    topic: String,
    fault: Arc<Mutex<Option<String>>>,
}

impl MqttSink {
    /// Open a session against the configured broker.
    pub fn connect(cfg: &BraceletConfig) -> Self {
        let mut options = MqttOptions::new(&cfg.client_id, &cfg.broker_host, cfg.broker_port);
        options.set_keep_alive(KEEP_ALIVE);
        let (client, connection) = Client::new(options, REQUEST_QUEUE);
        let fault = Arc::new(Mutex::new(None));
        spawn_drain(connection, Arc::clone(&fault));
        info!(
            "connecting to mqtt broker {}:{} as {}",
            cfg.broker_host, cfg.broker_port, cfg.client_id
        );
        Self {
            client,
            topic: cfg.topic.clone(),
            fault,
        }
    }

    fn take_fault(&self) -> Option<String> {
        self.fault.lock().ok().and_then(|mut g| g.take())
    }

    /// Close the session. Further publishes will fail.
    pub fn disconnect(&mut self) -> Result<(), SinkError> {
        self.client
            .disconnect()
            .map_err(|e| SinkError::Connection(e.to_string()))
    }
}

impl TelemetrySink for MqttSink {
    fn publish(&mut self, telemetry: &Telemetry) -> Result<(), SinkError> {
        if let Some(fault) = self.take_fault() {
            return Err(SinkError::Connection(fault));
        }
        let body = serde_json::to_vec(telemetry)?;
        self.client
            .publish(&self.topic, QoS::AtMostOnce, false, body)
            .map_err(|e| SinkError::Connection(e.to_string()))
    }
}

fn spawn_drain(mut connection: Connection, fault: Arc<Mutex<Option<String>>>) {
    thread::spawn(move || {
        for event in connection.iter() {
            match event {
                Ok(ev) => debug!("mqtt event: {ev:?}"),
                Err(e) => {
                    error!("mqtt connection error: {e}");
                    if let Ok(mut guard) = fault.lock() {
                        *guard = Some(e.to_string());
                    }
                    break;
                }
            }
        }
    });
}
