//! Beat-boundary input parsing for segment and timeline editors.
//!
//! An audio file moves through three stages: the [`detect`] module decodes
//! it and finds raw onset times, the [`beats`] module normalizes those into
//! a boundary list that partitions `[0, duration]`, and the [`input`] module
//! exposes the result through the host framework's parser contract. The
//! parser is read-only: it derives boundaries from audio but never writes
//! them back.

pub mod beats;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod input;

pub use beats::{BeatList, BeatOption, EDGE_TOLERANCE, LoadState, normalize_boundaries};
pub use detect::{Detection, EnvelopeDetector, OnsetDetector};
pub use error::{ParseError, Result};
pub use input::{AudioInput, BeatInput, OptionDescriptor, find_options, process_input};
