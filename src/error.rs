use std::path::PathBuf;

use thiserror::Error;

/// Failures a parser can surface to the host.
///
/// Unsupported or missing input paths are deliberately not represented here:
/// the discovery functions treat those as an expected filtering condition and
/// return `None` instead of an error.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but could not be decoded into audio samples.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// Detection and normalization left fewer than two boundaries.
    #[error("no beats detected in {}", path.display())]
    NoBeats { path: PathBuf },

    /// Writing detected beats back to an audio container is not supported.
    #[error("writing beats for audio detection not supported")]
    WriteUnsupported,
}

pub type Result<T> = std::result::Result<T, ParseError>;
