use std::iter;
use std::path::Path;

use beat_detector::BeatDetector;
use log::debug;

use crate::config::DetectorSettings;
use crate::error::Result;

use super::decode::decode_mono;
use super::{Detection, OnsetDetector};

/// How much audio each detector update receives (milliseconds). The
/// underlying envelope tracker is built around 20-40 ms of fresh data per
/// call, which is what live capture would deliver.
const DEFAULT_CHUNK_MS: u64 = 40;

/// Onset detection through `beat-detector`'s envelope tracking, fed from a
/// whole decoded file instead of a live input stream.
pub struct EnvelopeDetector {
    chunk_ms: u64,
    lowpass: bool,
}

impl EnvelopeDetector {
    pub fn new() -> Self {
        Self {
            chunk_ms: DEFAULT_CHUNK_MS,
            lowpass: true,
        }
    }

    pub fn from_settings(settings: &DetectorSettings) -> Self {
        Self {
            chunk_ms: settings.chunk_ms.max(1),
            lowpass: settings.lowpass,
        }
    }
}

impl Default for EnvelopeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl OnsetDetector for EnvelopeDetector {
    fn detect(&self, path: &Path) -> Result<Detection> {
        let audio = decode_mono(path)?;
        let rate = audio.sample_rate as f64;
        let duration = audio.duration();

        let mut detector = BeatDetector::new(audio.sample_rate as f32, self.lowpass);
        let chunk_len = ((rate * self.chunk_ms as f64 / 1000.0) as usize).max(1);

        let mut indices: Vec<usize> = Vec::new();
        for chunk in audio.samples.chunks(chunk_len) {
            if let Some(info) = detector.update_and_detect_beat(chunk.iter().copied()) {
                indices.push(info.max.total_index);
            }
        }
        // Each update reports at most one beat; keep polling with no new
        // audio until the trailing window is exhausted.
        while let Some(info) = detector.update_and_detect_beat(iter::empty()) {
            indices.push(info.max.total_index);
        }
        indices.dedup();

        let onsets: Vec<f64> = indices.iter().map(|&i| i as f64 / rate).collect();
        let tempo_bpm = estimate_tempo(&onsets);
        debug!(
            "{}: {} onsets over {duration:.3}s, tempo {tempo_bpm:.1} bpm",
            path.display(),
            onsets.len()
        );

        Ok(Detection {
            tempo_bpm,
            onsets,
            duration,
        })
    }

    fn name(&self) -> &'static str {
        "envelope"
    }
}

/// Tempo from the median inter-onset gap, `0.0` below two onsets. The median
/// shrugs off the occasional missed or doubled beat.
pub(super) fn estimate_tempo(onsets: &[f64]) -> f32 {
    if onsets.len() < 2 {
        return 0.0;
    }
    let mut gaps: Vec<f64> = onsets.windows(2).map(|w| w[1] - w[0]).collect();
    gaps.sort_by(f64::total_cmp);
    let median = gaps[gaps.len() / 2];
    if median > 0.0 { (60.0 / median) as f32 } else { 0.0 }
}
