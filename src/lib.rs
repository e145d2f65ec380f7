// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-08-21

//! DeafNav companion tooling.
//!
//! Three small programs share this library: a scripted sign-language
//! translation stub, a bracelet telemetry simulator publishing synthetic
//! readings over MQTT, and a monitor that watches the telemetry topic for
//! high-stress pulse readings.

pub mod bracelet;
pub mod config;
pub mod monitor;
pub mod translator;
