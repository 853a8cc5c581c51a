use std::io;
use std::path::{Path, PathBuf};

use crate::beats::BeatOption;
use crate::error::{ParseError, Result};

/// The host's generic input-parser contract. Object safe so the host can
/// hold every parser variant behind one registry.
///
/// `write_file` is part of the contract even though not every variant can
/// write; read-only variants report [`ParseError::WriteUnsupported`] instead
/// of being special-cased by the host.
pub trait BeatInput {
    /// File-chooser filter line for this variant.
    fn file_desc(&self) -> &'static str;

    /// Extensions this variant accepts, without the dot, matched
    /// case-insensitively.
    fn extensions(&self) -> &'static [&'static str];

    /// Display name, set by `read_file`.
    fn name(&self) -> &str;

    /// Source path, set by `read_file`.
    fn song(&self) -> Option<&Path>;

    fn options(&self) -> &[BeatOption];

    fn options_mut(&mut self) -> &mut [BeatOption];

    /// Bind this parser to `path` and register its boundary options.
    fn read_file(&mut self, path: &Path) -> Result<()>;

    /// Write `option`'s boundaries back out in this variant's format.
    fn write_file(&self, option: &BeatOption, path: &Path) -> Result<()>;
}

/// Input parser that derives beat boundaries from an audio recording.
/// Registers a single lazily-loaded `"detected"` option and never supports
/// writing.
#[derive(Debug, Default)]
pub struct AudioInput {
    name: String,
    song: Option<PathBuf>,
    options: Vec<BeatOption>,
}

impl AudioInput {
    pub const EXTENSIONS: &'static [&'static str] = &["mp3", "wav", "ogg"];

    /// Filter line for the host's file chooser: label, then the matching
    /// glob patterns after the pipe.
    pub const FILE_DESC: &'static str = "Audio file (*.mp3, *.wav, *.ogg)|*.mp3;*.wav;*.ogg";

    pub fn new() -> Self {
        Self::default()
    }
}

impl BeatInput for AudioInput {
    fn file_desc(&self) -> &'static str {
        Self::FILE_DESC
    }

    fn extensions(&self) -> &'static [&'static str] {
        Self::EXTENSIONS
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn song(&self) -> Option<&Path> {
        self.song.as_deref()
    }

    fn options(&self) -> &[BeatOption] {
        &self.options
    }

    fn options_mut(&mut self) -> &mut [BeatOption] {
        &mut self.options
    }

    fn read_file(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(ParseError::Io {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        self.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        self.song = Some(path.to_path_buf());
        self.options.push(BeatOption::detected(path));
        Ok(())
    }

    fn write_file(&self, _option: &BeatOption, _path: &Path) -> Result<()> {
        Err(ParseError::WriteUnsupported)
    }
}
