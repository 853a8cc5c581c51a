use std::path::{Path, PathBuf};

use log::debug;

use crate::beats::{BeatList, DETECTED_LEVEL, normalize_boundaries};
use crate::detect::OnsetDetector;

use super::parser::AudioInput;

/// What [`find_options`] reports about an option variant before any
/// detection work has happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub level: i32,
    pub name: String,
}

pub(super) fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            AudioInput::EXTENSIONS.iter().any(|e| *e == ext)
        })
        .unwrap_or(false)
}

/// Best-effort probe: run full detection and normalization on `path` and
/// return the boundary list.
///
/// Every failure flattens into `None` (missing or unsupported path,
/// undecodable file, too few boundaries) so batch callers can filter
/// silently. A host committing to a file uses [`crate::beats::BeatOption::load`]
/// instead, which reports errors.
pub fn process_input(path: &Path, detector: &dyn OnsetDetector) -> Option<(PathBuf, BeatList)> {
    if !path.is_file() || !is_supported(path) {
        return None;
    }

    let detection = match detector.detect(path) {
        Ok(detection) => detection,
        Err(err) => {
            debug!("probe of {} failed: {err}", path.display());
            return None;
        }
    };

    let times = normalize_boundaries(&detection.onsets, detection.duration)?;
    let list = BeatList::new(times)?;
    Some((path.to_path_buf(), list))
}

/// Enumerate the option variants `path` would offer: a single
/// detector-derived entry named after the file. Never decodes or detects,
/// so it stays cheap enough to call on everything.
pub fn find_options(path: &Path) -> Option<Vec<OptionDescriptor>> {
    if !path.is_file() || !is_supported(path) {
        return None;
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    Some(vec![OptionDescriptor {
        level: DETECTED_LEVEL,
        name,
    }])
}
