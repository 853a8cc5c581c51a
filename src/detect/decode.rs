use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use rodio::{Decoder, Source};

use crate::error::{ParseError, Result};

/// Mono samples from one decode pass.
pub(super) struct DecodedAudio {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Track duration in seconds, derived from this buffer so it can never
    /// disagree with the samples the detector sees.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Decode `path` into mono i16 samples. Interleaved channels are averaged
/// per frame.
pub(super) fn decode_mono(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| ParseError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sample_rate = decoder.sample_rate();
    let channels = decoder.channels().max(1) as usize;

    let mut samples: Vec<i16> = Vec::new();
    let mut frame: Vec<f32> = Vec::with_capacity(channels);
    for sample in decoder {
        frame.push(sample);
        if frame.len() == channels {
            let mixed = frame.drain(..).sum::<f32>() / channels as f32;
            samples.push((mixed.clamp(-1.0, 1.0) * i16::MAX as f32) as i16);
        }
    }

    debug!(
        "decoded {}: {} mono samples at {} Hz",
        path.display(),
        samples.len(),
        sample_rate
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
    })
}
