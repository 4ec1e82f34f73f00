//! Step-driven preview playback.
//!
//! The driver schedules each step of a playback sequence at a fixed tempo
//! interval against an external sample-based instrument. It never synthesizes
//! audio itself; the [`Instrument`] trait is the seam to whatever engine the
//! host provides.
//!
//! Steps fire in sequence order on a single worker thread. Cancellation is
//! cooperative and non-preemptive: [`PlaybackHandle::stop`] guarantees that no
//! future step fires, but a note already triggered decays naturally, matching
//! sample engines that cannot retract a note-on. Callers that allow only one
//! active preview per UI slot must stop the previous handle before starting a
//! new one; the driver does not enforce that discipline.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::TabError;

/// Soundfont used when a requested name has nothing registered.
pub const DEFAULT_SOUNDFONT: &str = "Keylimba";

/// An external sample-based instrument.
///
/// `gain` is a linear amplitude factor already combined from the soundfont's
/// own gain and the user volume.
pub trait Instrument: Send + Sync {
    /// Trigger a note by pitch name ("C#4"). Fire-and-forget.
    fn play(&self, pitch: &str, gain: f32);
}

struct SoundfontEntry {
    instrument: Arc<dyn Instrument>,
    gain: f32,
}

/// Registry of named soundfont instruments with their per-font gain.
///
/// Lookups for unknown names fall back to [`DEFAULT_SOUNDFONT`]; a lookup
/// that resolves to nothing at all means the instrument engine never loaded,
/// which is the crate's one hard failure.
#[derive(Default)]
pub struct Soundbank {
    fonts: HashMap<String, SoundfontEntry>,
}

impl Soundbank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        gain: f32,
        instrument: Arc<dyn Instrument>,
    ) {
        self.fonts
            .insert(name.into(), SoundfontEntry { instrument, gain });
    }

    fn resolve(&self, name: &str) -> Result<(Arc<dyn Instrument>, f32), TabError> {
        let entry = self
            .fonts
            .get(name)
            .or_else(|| self.fonts.get(DEFAULT_SOUNDFONT))
            .ok_or_else(|| {
                TabError::EngineUnavailable(format!(
                    "no instrument registered for soundfont '{name}'"
                ))
            })?;
        Ok((Arc::clone(&entry.instrument), entry.gain))
    }
}

/// Per-playback parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackOptions {
    /// Tempo in beats per minute.
    pub bpm: u32,
    /// Volume percent, 0-100.
    pub volume: u8,
    /// Soundfont name to resolve in the soundbank.
    pub soundfont: String,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            bpm: 120,
            volume: 75,
            soundfont: DEFAULT_SOUNDFONT.to_string(),
        }
    }
}

impl PlaybackOptions {
    /// Fixed per-step duration in milliseconds.
    ///
    /// The effective tempo is clamped to at least 30 BPM and the step to at
    /// least 40 ms so a bogus tempo cannot cause runaway scheduling.
    pub fn step_ms(&self) -> u64 {
        let bpm = self.bpm.max(30);
        ((60_000.0 / f64::from(bpm)).round() as u64).max(40)
    }
}

/// Cancellation handle for an in-flight preview.
pub struct PlaybackHandle {
    cancelled: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl PlaybackHandle {
    /// Stop scheduling future steps. Steps already fired are unaffected.
    pub fn stop(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Block until every remaining step has fired or the session was stopped.
    pub fn wait(mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Plays note sequences against a [`Soundbank`].
pub struct PreviewPlayer {
    soundbank: Soundbank,
}

impl PreviewPlayer {
    pub fn new(soundbank: Soundbank) -> Self {
        Self { soundbank }
    }

    /// Schedule every step of `sequence` at `index * step_ms` from now.
    ///
    /// Fails fast with [`TabError::EngineUnavailable`] when no instrument can
    /// be resolved. The returned handle cancels cooperatively; dropping it
    /// without calling [`PlaybackHandle::stop`] lets the preview run to its
    /// natural end.
    pub fn play(
        &self,
        sequence: Vec<Option<String>>,
        options: &PlaybackOptions,
    ) -> Result<PlaybackHandle, TabError> {
        let (instrument, font_gain) = self.soundbank.resolve(&options.soundfont)?;
        let gain = font_gain * f32::from(options.volume.min(100)) / 100.0;
        let step = Duration::from_millis(options.step_ms());

        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let worker = thread::spawn(move || {
            let started = Instant::now();
            for (index, entry) in sequence.into_iter().enumerate() {
                let due = started + step.saturating_mul(index as u32);
                let now = Instant::now();
                if due > now {
                    thread::sleep(due - now);
                }
                if flag.load(Ordering::Relaxed) {
                    return;
                }
                if let Some(pitch) = entry {
                    instrument.play(&pitch, gain);
                }
            }
        });

        Ok(PlaybackHandle {
            cancelled,
            worker: Some(worker),
        })
    }
}
