//! Configuration loader and schema types.
//!
//! This module exposes the schema for detector tuning and scan behavior,
//! plus helpers to load configuration from disk and environment.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
