// CLASSIFICATION: COMMUNITY
// Filename: bracelet/sweep.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-19

//! Simulated train-approach distance sweep.

/// Arithmetic sequence from `start_cm` down to but not including
/// `floor_cm`, decrementing by `step_cm` per tick.
#[derive(Debug, Clone)]
pub struct DistanceSweep {
    next: u32,
    floor: u32,
    step: u32,
}

impl DistanceSweep {
    pub fn new(start_cm: u32, floor_cm: u32, step_cm: u32) -> Self {
        Self {
            next: start_cm,
            floor: floor_cm,
            step: step_cm,
        }
    }
}

impl Iterator for DistanceSweep {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        // A zero step would never terminate; config validation rejects it
        // upstream, but guard here as well.
        if self.step == 0 || self.next <= self.floor {
            return None;
        }
        let current = self.next;
        self.next = current.saturating_sub(self.step);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_descends_to_twenty() {
        let distances: Vec<u32> = DistanceSweep::new(300, 10, 20).collect();
        assert_eq!(distances.first(), Some(&300));
        assert_eq!(distances.last(), Some(&20));
        assert_eq!(distances.len(), 15);
        for pair in distances.windows(2) {
            assert_eq!(pair[0] - pair[1], 20);
        }
    }

    #[test]
    fn floor_is_exclusive() {
        let distances: Vec<u32> = DistanceSweep::new(30, 10, 20).collect();
        assert_eq!(distances, vec![30]);
    }

    #[test]
    fn coarse_step_variant() {
        // The firmware copy of the simulator stepped by 30.
        let distances: Vec<u32> = DistanceSweep::new(300, 10, 30).collect();
        assert_eq!(distances.first(), Some(&300));
        assert_eq!(distances.last(), Some(&30));
        assert!(distances.iter().all(|d| *d > 10));
    }

    #[test]
    fn start_at_floor_is_empty() {
        assert_eq!(DistanceSweep::new(10, 10, 20).count(), 0);
    }

    #[test]
    fn zero_step_is_empty() {
        assert_eq!(DistanceSweep::new(300, 10, 0).count(), 0);
    }
}
