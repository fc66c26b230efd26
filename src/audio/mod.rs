//! Audio cues.
//!
//! Cues are short synthesized tones so the binary carries no audio assets.
//! Playback is fire-and-forget on a detached thread: a missing or busy audio
//! device must never block or fail a state transition, so errors are logged
//! at debug level and dropped.

use anyhow::Result;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Secret theme unlocked.
    Unlocked,
    /// Doom-mode blast on Enter or click.
    Blast,
}

/// Play a cue on a background thread and return immediately.
pub fn play(cue: Cue) {
    std::thread::spawn(move || {
        if let Err(e) = play_blocking(cue) {
            tracing::debug!("audio cue failed: {e:#}");
        }
    });
}

fn play_blocking(cue: Cue) -> Result<()> {
    // Keep _stream alive for the full duration — dropping it stops audio.
    let (_stream, stream_handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&stream_handle)?;
    match cue {
        Cue::Unlocked => {
            // Rising two-tone chime, kept quiet like the original cue.
            sink.append(tone(659.25, 90, 0.1));
            sink.append(tone(880.0, 180, 0.1));
        }
        Cue::Blast => {
            sink.append(tone(110.0, 60, 0.3));
            sink.append(tone(55.0, 120, 0.3));
        }
    }
    sink.sleep_until_end();
    Ok(())
}

fn tone(freq: f32, millis: u64, volume: f32) -> impl Source<Item = f32> {
    SineWave::new(freq)
        .take_duration(Duration::from_millis(millis))
        .amplify(volume)
}
