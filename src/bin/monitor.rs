// CLASSIFICATION: COMMUNITY
// Filename: bin/monitor.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-21

use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use rumqttc::{Client, Event, MqttOptions, Packet, QoS};

use deafnav::config::BraceletConfig;
use deafnav::monitor::{classify_payload, DEFAULT_STRESS_BPM};

#[derive(Parser)]
#[command(about = "Watch DeafNav telemetry for high-stress readings")]
struct Args {
    /// Broker hostname
    #[arg(long)]
    broker: Option<String>,
    /// Broker port
    #[arg(long)]
    port: Option<u16>,
    /// Telemetry topic
    #[arg(long)]
    topic: Option<String>,
    /// Pulse threshold in bpm
    #[arg(long, default_value_t = DEFAULT_STRESS_BPM)]
    stress_bpm: u32,
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let defaults = BraceletConfig::default();
    let host = args.broker.unwrap_or(defaults.broker_host);
    let port = args.port.unwrap_or(defaults.broker_port);
    let topic = args.topic.unwrap_or(defaults.topic);

    let mut options = MqttOptions::new("DeafNav_Backend_Monitor", &host, port);
    options.set_keep_alive(Duration::from_secs(5));
    let (client, mut connection) = Client::new(options, 16);
    client.subscribe(&topic, QoS::AtMostOnce)?;
    info!("monitoring {topic} on {host}:{port}");

    let interrupt_client = client.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt_client.disconnect();
    })?;

    for event in connection.iter() {
        match event? {
            Event::Incoming(Packet::Publish(publish)) => {
                match classify_payload(&publish.payload, args.stress_bpm) {
                    Ok(reading) => {
                        let t = &reading.telemetry;
                        info!(
                            "{}: dist {}cm pulse {}bpm battery {}%",
                            t.device_id, t.distance_cm, t.pulse_bpm, t.battery_pct
                        );
                        if reading.high_stress {
                            warn!("HIGH STRESS DETECTED on {} ({}bpm)", t.device_id, t.pulse_bpm);
                        }
                    }
                    Err(err) => warn!("skipping malformed payload: {err}"),
                }
            }
            Event::Outgoing(rumqttc::Outgoing::Disconnect) => break,
            _ => {}
        }
    }

    info!("monitor stopped");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
