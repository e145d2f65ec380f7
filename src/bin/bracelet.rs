// CLASSIFICATION: COMMUNITY
// Filename: bin/bracelet.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-08-21

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use env_logger::Env;
use log::info;

use deafnav::bracelet::mqtt::MqttSink;
use deafnav::bracelet::BraceletSimulator;
use deafnav::config::BraceletConfig;

#[derive(Parser)]
#[command(about = "DeafNav bracelet telemetry simulator")]
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
    /// Reported device identifier
    #[arg(long)]
    device_id: Option<String>,
    /// Sweep start distance in cm
    #[arg(long)]
    start: Option<u32>,
    /// Sweep step in cm
    #[arg(long)]
    step: Option<u32>,
    /// Haptic alert threshold in cm
    #[arg(long)]
    alert: Option<u32>,
    /// Pause between readings
    #[arg(long)]
    interval: Option<humantime::Duration>,
}

impl Args {
    fn into_config(self) -> BraceletConfig {
        let mut cfg = BraceletConfig::default();
        if let Some(broker) = self.broker {
            cfg.broker_host = broker;
        }
        if let Some(port) = self.port {
            cfg.broker_port = port;
        }
        if let Some(topic) = self.topic {
            cfg.topic = topic;
        }
        if let Some(device_id) = self.device_id {
            cfg.device_id = device_id;
        }
        if let Some(start) = self.start {
            cfg.start_cm = start;
        }
        if let Some(step) = self.step {
            cfg.step_cm = step;
        }
        if let Some(alert) = self.alert {
            cfg.alert_cm = alert;
        }
        if let Some(interval) = self.interval {
            cfg.interval = interval.into();
        }
        cfg
    }
}

fn run() -> anyhow::Result<()> {
    let cfg = Args::parse().into_config();
    cfg.validate()?;

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::Relaxed))?;

    let mut sink = MqttSink::connect(&cfg);
    info!("DeafNav Bracelet Simulator Started...");

    let simulator = BraceletSimulator::new(cfg);
    simulator.run(&mut sink, &stop)?;

    info!("Stopping simulator...");
    sink.disconnect()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
