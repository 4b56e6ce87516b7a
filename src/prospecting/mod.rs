//! Synthetic prospect lists
//!
//! Fabricates illustrative business contacts for a city and a niche. Names
//! and streets are picked deterministically from locale tables; only the
//! phone digits and street numbers come from a [`DigitSource`]. Nothing here
//! is sourced from a real directory.

mod digits;
mod generator;
mod tables;

pub use digits::{DigitSource, RngDigits, SequenceDigits, ThreadRngDigits};
pub use generator::{ProspectGenerator, ProspectRecord};
pub use tables::ProspectTables;
