//! Batch probing front end.
//!
//! Walks the given paths, filters candidates through [`find_options`], and
//! probes each one with [`process_input`], printing one report line per
//! file. A single file argument instead goes through the full parser path:
//! [`AudioInput::read_file`] plus [`crate::beats::BeatOption::load`], with
//! the normalized boundary list printed afterwards.

use std::env;
use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::tag::ItemKey;
use walkdir::WalkDir;

use crate::config::{self, ScanSettings};
use crate::detect::{EnvelopeDetector, OnsetDetector};
use crate::input::{AudioInput, BeatInput, find_options, process_input};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();
    let detector = EnvelopeDetector::from_settings(&settings.detector);

    let args: Vec<String> = env::args().skip(1).collect();

    if args.len() == 1 && Path::new(&args[0]).is_file() {
        return inspect_file(Path::new(&args[0]), &detector);
    }

    let roots = if args.is_empty() {
        vec![".".to_string()]
    } else {
        args
    };
    for root in &roots {
        probe_tree(Path::new(root), &settings.scan, &detector);
    }
    Ok(())
}

fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("battuta: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            eprintln!("battuta: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk `root` and print one line per supported audio file: either its
/// boundary stats or a "skipped" note when no usable beats come out.
fn probe_tree(root: &Path, scan: &ScanSettings, detector: &dyn OnsetDetector) {
    let mut walker = WalkDir::new(root).follow_links(scan.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if scan.recursive {
        scan.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| scan.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || (!scan.include_hidden && is_hidden(path)) {
            continue;
        }
        let Some(descriptors) = find_options(path) else {
            continue;
        };
        let name = &descriptors[0].name;

        match process_input(path, detector) {
            Some((_, list)) => {
                let line = format!(
                    "{name}: {} boundaries over {:.2}s",
                    list.times().len(),
                    list.duration()
                );
                match tag_title(path) {
                    Some(title) => println!("{line}  [{title}]"),
                    None => println!("{line}"),
                }
            }
            None => println!("{name}: skipped (no usable beats)"),
        }
    }
}

/// Full parser path for one file, the way a host session would drive it.
fn inspect_file(path: &Path, detector: &EnvelopeDetector) -> Result<(), Box<dyn std::error::Error>> {
    let detection = detector.detect(path)?;
    println!(
        "{}: {} raw onsets, tempo {:.1} bpm, {:.2}s",
        path.display(),
        detection.onsets.len(),
        detection.tempo_bpm,
        detection.duration
    );

    let mut parser = AudioInput::new();
    parser.read_file(path)?;
    if let Some(option) = parser.options_mut().first_mut() {
        option.load(detector)?;
    }

    let list = parser
        .options()
        .first()
        .and_then(|o| o.beat_list())
        .ok_or("no beat list after load")?;
    println!("{} ({} segments):", parser.name(), list.segment_count());
    for t in list.times() {
        println!("  {t:.3}");
    }
    Ok(())
}

fn tag_title(path: &Path) -> Option<String> {
    let tagged = lofty::read_from_path(path).ok()?;
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;
    tag.get_string(&ItemKey::TrackTitle)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
