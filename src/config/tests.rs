use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn defaults_match_detector_tuning() {
    let s = Settings::default();
    assert_eq!(s.detector.chunk_ms, 40);
    assert!(s.detector.lowpass);
    assert!(s.scan.recursive);
    assert!(s.scan.follow_links);
    assert!(s.scan.include_hidden);
    assert_eq!(s.scan.max_depth, None);
}

#[test]
fn resolve_config_path_prefers_battuta_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("BATTUTA_CONFIG_PATH", "/tmp/battuta-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/battuta-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("battuta")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("battuta")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[detector]
chunk_ms = 25
lowpass = false

[scan]
recursive = false
include_hidden = false
follow_links = false
max_depth = 3
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("BATTUTA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("BATTUTA__DETECTOR__CHUNK_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.detector.chunk_ms, 25);
    assert!(!s.detector.lowpass);
    assert!(!s.scan.recursive);
    assert!(!s.scan.include_hidden);
    assert!(!s.scan.follow_links);
    assert_eq!(s.scan.max_depth, Some(3));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[detector]
chunk_ms = 25
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("BATTUTA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("BATTUTA__DETECTOR__CHUNK_MS", "10");

    let s = Settings::load().unwrap();
    assert_eq!(s.detector.chunk_ms, 10);
}

#[test]
fn validate_rejects_zero_chunk() {
    let mut s = Settings::default();
    s.detector.chunk_ms = 0;
    assert!(s.validate().is_err());
    s.detector.chunk_ms = 1;
    assert!(s.validate().is_ok());
}
