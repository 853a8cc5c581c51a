//! The host framework's input-parser contract and its audio variant.
//!
//! [`BeatInput`] is the generic parser interface the host keeps a registry
//! of; [`AudioInput`] is the variant that derives boundaries from an audio
//! file. The free functions [`process_input`] and [`find_options`] are the
//! host's cheap probing entry points that work without a full parser
//! instance.

mod discover;
mod parser;

pub use discover::{OptionDescriptor, find_options, process_input};
pub use parser::{AudioInput, BeatInput};
