use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/battuta/config.toml` or `~/.config/battuta/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `BATTUTA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub detector: DetectorSettings,
    pub scan: ScanSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            detector: DetectorSettings::default(),
            scan: ScanSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectorSettings {
    /// How much audio to feed the detector per update (milliseconds).
    /// The envelope tracker is tuned for 20-40 ms of fresh data per call.
    pub chunk_ms: u64,
    /// Whether to lowpass-filter samples before envelope tracking.
    /// Disable only for material that is already band-limited.
    pub lowpass: bool,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            chunk_ms: 40,
            lowpass: true,
        }
    }
}

/// Directory-walking behavior for the batch probe. The accepted file
/// extensions are not configurable; each parser variant declares its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            recursive: true,
            follow_links: true,
            include_hidden: true,
            max_depth: None,
        }
    }
}
