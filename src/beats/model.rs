use std::path::{Path, PathBuf};

use log::debug;

use crate::detect::OnsetDetector;
use crate::error::{ParseError, Result};

use super::normalize::normalize_boundaries;

/// Priority level of detector-derived options. Negative marks them as
/// derived rather than authoritative, so hand-authored boundary sets from
/// sibling parsers always outrank them.
pub const DETECTED_LEVEL: i32 = -1;

/// Name every detector-derived option carries.
pub const DETECTED_NAME: &str = "detected";

/// Finished, ordered sequence of boundary timestamps (seconds).
///
/// Always holds at least two ascending entries, so it describes at least one
/// segment. Constructed once and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BeatList(Vec<f64>);

impl BeatList {
    /// Wrap an already-normalized boundary sequence. Returns `None` when the
    /// sequence is shorter than two entries or not ascending.
    pub fn new(times: Vec<f64>) -> Option<Self> {
        let valid = times.len() >= 2 && times.windows(2).all(|w| w[0] <= w[1]);
        valid.then_some(Self(times))
    }

    pub fn times(&self) -> &[f64] {
        &self.0
    }

    /// Number of segments the boundaries describe, always at least one.
    pub fn segment_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Position of the final boundary, i.e. the track duration.
    pub fn duration(&self) -> f64 {
        self.0[self.0.len() - 1]
    }
}

/// Load lifecycle of a [`BeatOption`]. `Failed` is distinct from `Unloaded`
/// so a failed attempt is never mistaken for one that has not happened yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded(BeatList),
    Failed,
}

/// One named candidate boundary set for a source file, populated lazily by
/// [`BeatOption::load`].
#[derive(Debug, Clone)]
pub struct BeatOption {
    level: i32,
    name: String,
    path: PathBuf,
    state: LoadState,
}

impl BeatOption {
    pub fn new(level: i32, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            level,
            name: name.into(),
            path: path.into(),
            state: LoadState::Unloaded,
        }
    }

    /// The option an audio parser registers: level [`DETECTED_LEVEL`], named
    /// [`DETECTED_NAME`].
    pub fn detected(path: impl Into<PathBuf>) -> Self {
        Self::new(DETECTED_LEVEL, DETECTED_NAME, path)
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The boundary list, once [`BeatOption::load`] has succeeded.
    pub fn beat_list(&self) -> Option<&BeatList> {
        match &self.state {
            LoadState::Loaded(list) => Some(list),
            _ => None,
        }
    }

    /// Run detection and normalization on the bound path and store the
    /// result. A loaded option is final: repeated calls return `Ok` without
    /// touching the detector again. After a failure the host may call again
    /// to retry; the option never retries on its own.
    pub fn load(&mut self, detector: &dyn OnsetDetector) -> Result<()> {
        if matches!(self.state, LoadState::Loaded(_)) {
            return Ok(());
        }
        match self.run_detection(detector) {
            Ok(list) => {
                self.state = LoadState::Loaded(list);
                Ok(())
            }
            Err(err) => {
                self.state = LoadState::Failed;
                Err(err)
            }
        }
    }

    fn run_detection(&self, detector: &dyn OnsetDetector) -> Result<BeatList> {
        debug!(
            "loading {} with the {} detector",
            self.path.display(),
            detector.name()
        );
        let detection = detector.detect(&self.path)?;
        normalize_boundaries(&detection.onsets, detection.duration)
            .and_then(BeatList::new)
            .ok_or_else(|| ParseError::NoBeats {
                path: self.path.clone(),
            })
    }
}
