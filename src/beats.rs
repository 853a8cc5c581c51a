//! Beat-boundary data model and normalization.
//!
//! [`normalize_boundaries`] turns the raw onset times a detector reports into
//! a closed `[0, duration]` partition; [`BeatList`] holds the finished
//! sequence and [`BeatOption`] tracks one named candidate set through its
//! unloaded/loaded/failed lifecycle.

mod model;
mod normalize;

pub use model::{BeatList, BeatOption, DETECTED_LEVEL, DETECTED_NAME, LoadState};
pub use normalize::{EDGE_TOLERANCE, normalize_boundaries};
