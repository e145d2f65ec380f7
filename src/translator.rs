// CLASSIFICATION: COMMUNITY
// Filename: translator.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-08-20

//! Scripted sign-language translation stub.
//!
//! Replays a fixed six-event translation sequence for any input path. The
//! path is accepted verbatim and never opened; the scripted output is the
//! whole contract until the real vision pipeline lands.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// A single recognized sign paired with its spoken-language rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslationEvent {
    /// Video offset in seconds.
    pub timestamp: f32,
    pub gloss: &'static str,
    pub word: &'static str,
}

/// The fixed translation script, in playback order.
pub const SCRIPT: [TranslationEvent; 6] = [
    TranslationEvent { timestamp: 2.0, gloss: "EU", word: "Connecting" },
    TranslationEvent { timestamp: 2.5, gloss: "EUROPE", word: "Europe" },
    TranslationEvent { timestamp: 3.2, gloss: "INFRASTRUCTURE", word: "Facility" },
    TranslationEvent { timestamp: 6.0, gloss: "TRANSPORT", word: "Investing" },
    TranslationEvent { timestamp: 7.0, gloss: "NETWORK", word: "Trans-European" },
    TranslationEvent { timestamp: 8.0, gloss: "SUSTAINABLE", word: "Transport Network" },
];

/// Format one event line exactly as the wire log expects it.
pub fn event_line(event: &TranslationEvent) -> String {
    format!(
        "[{:.1}s] Detected Gesture: {} -> Translated: {}",
        event.timestamp, event.gloss, event.word
    )
}

/// Replays [`SCRIPT`] to a writer with a configurable pause per tick.
pub struct Translator {
    tick: Duration,
}

impl Translator {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    fn pause(&self) {
        if !self.tick.is_zero() {
            thread::sleep(self.tick);
        }
    }

    /// Emit the full scripted sequence for `video_path`.
    ///
    /// The path is echoed into the init line but otherwise unused; any
    /// string is accepted.
    pub fn run<W: Write>(&self, video_path: &str, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "[INFO] Initializing Vision AI for Sign Language Translation on: {video_path}"
        )?;
        writeln!(out, "[INFO] Loading YOLOv8 weights and MediaPipe Hand Tracking...")?;
        out.flush()?;
        self.pause();

        writeln!(out, "[INFO] Model loaded successfully. Starting inference sequence...")?;
        out.flush()?;

        for event in &SCRIPT {
            self.pause();
            writeln!(out, "{}", event_line(event))?;
            out.flush()?;
        }

        writeln!(out, "[INFO] Inference complete. Generating SRT/VTT artifact...")?;
        out.flush()?;
        Ok(())
    }
}
