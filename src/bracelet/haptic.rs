// CLASSIFICATION: COMMUNITY
// Filename: bracelet/haptic.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-20

//! Haptic alert decisions.
//!
//! The wristband firmware drives its vibration motor with an 8-bit PWM
//! duty mapped linearly from proximity: contact is full intensity, the
//! 200 cm sensing edge is duty 50, anything farther is off. The simulator
//! reuses that mapping for its printed alert; no motor is actuated.

/// Outer edge of the proximity sensing range in centimetres.
pub const SENSE_RANGE_CM: u32 = 200;

/// PWM duty at the sensing edge.
const EDGE_DUTY: u32 = 50;

/// Vibration duty for a distance reading, 0 when out of range.
pub fn vibration_intensity(distance_cm: u32) -> u8 {
    if distance_cm > SENSE_RANGE_CM {
        return 0;
    }
    // Linear map of 0..=200 cm onto 255..=50.
    let duty = 255 - distance_cm * (255 - EDGE_DUTY) / SENSE_RANGE_CM;
    duty as u8
}

/// Whether a reading is close enough to warrant the high-intensity alert.
pub fn should_alert(distance_cm: u32, alert_cm: u32) -> bool {
    distance_cm < alert_cm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_is_full_intensity() {
        assert_eq!(vibration_intensity(0), 255);
    }

    #[test]
    fn sensing_edge_is_duty_fifty() {
        assert_eq!(vibration_intensity(SENSE_RANGE_CM), 50);
    }

    #[test]
    fn out_of_range_is_off() {
        assert_eq!(vibration_intensity(SENSE_RANGE_CM + 1), 0);
        assert_eq!(vibration_intensity(300), 0);
    }

    #[test]
    fn intensity_never_increases_with_distance() {
        let mut last = u8::MAX;
        for d in 0..=SENSE_RANGE_CM {
            let duty = vibration_intensity(d);
            assert!(duty <= last);
            last = duty;
        }
    }

    #[test]
    fn alert_threshold_is_strict() {
        assert!(should_alert(49, 50));
        assert!(!should_alert(50, 50));
        assert!(!should_alert(51, 50));
    }
}
