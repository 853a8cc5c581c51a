//! Onset detection port and its envelope-based adapter.
//!
//! The rest of the crate only ever talks to the [`OnsetDetector`] trait;
//! [`EnvelopeDetector`] is the one concrete backend, decoding with `rodio`
//! and finding onsets with the `beat-detector` crate.

use std::path::Path;

use crate::error::Result;

mod decode;
mod envelope;

pub use envelope::EnvelopeDetector;

/// Onset detection backend: decodes a file and reports where the rhythmic
/// events are. Implementations own their decode pass, so the duration they
/// report always matches the samples the onsets came from.
pub trait OnsetDetector: Send + Sync {
    /// Analyze `path`. Onset times are ascending seconds but carry no other
    /// guarantees: they may be empty, start after zero, or run past the end
    /// of the track. Normalization deals with all of that.
    fn detect(&self, path: &Path) -> Result<Detection>;

    /// Name of this backend, for logging.
    fn name(&self) -> &'static str;
}

/// Everything one detection pass produces.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Estimated tempo in beats per minute, `0.0` when unknown. Reported for
    /// downstream consumers; normalization never reads it.
    pub tempo_bpm: f32,
    /// Onset times in seconds, ascending.
    pub onsets: Vec<f64>,
    /// Track duration in seconds, from the same decode pass as the onsets.
    pub duration: f64,
}
