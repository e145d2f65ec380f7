// CLASSIFICATION: COMMUNITY
// Filename: tests/config_env.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-08-21

use deafnav::config::BraceletConfig;
use serial_test::serial;

#[test]
#[serial]
fn env_overrides_broker_and_topic() {
    std::env::set_var("DEAFNAV_BROKER_HOST", "broker.example");
    std::env::set_var("DEAFNAV_BROKER_PORT", "8883");
    std::env::set_var("DEAFNAV_TOPIC", "deafnav/test");
    let cfg = BraceletConfig::default();
    std::env::remove_var("DEAFNAV_BROKER_HOST");
    std::env::remove_var("DEAFNAV_BROKER_PORT");
    std::env::remove_var("DEAFNAV_TOPIC");
    assert_eq!(cfg.broker_host, "broker.example");
    assert_eq!(cfg.broker_port, 8883);
    assert_eq!(cfg.topic, "deafnav/test");
}

#[test]
#[serial]
fn unparsable_port_falls_back() {
    std::env::set_var("DEAFNAV_BROKER_PORT", "not-a-port");
    let cfg = BraceletConfig::default();
    std::env::remove_var("DEAFNAV_BROKER_PORT");
    assert_eq!(cfg.broker_port, 1883);
}

#[test]
#[serial]
fn defaults_without_env() {
    for key in [
        "DEAFNAV_BROKER_HOST",
        "DEAFNAV_BROKER_PORT",
        "DEAFNAV_TOPIC",
        "DEAFNAV_CLIENT_ID",
        "DEAFNAV_DEVICE_ID",
    ] {
        std::env::remove_var(key);
    }
    let cfg = BraceletConfig::default();
    assert_eq!(cfg.broker_host, "localhost");
    assert_eq!(cfg.broker_port, 1883);
    assert_eq!(cfg.client_id, "DeafNav_Simulated_Bracelet");
}
