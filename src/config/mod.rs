//! Studio configuration
//!
//! YAML-backed settings (agency identity, prospecting batch size, locale
//! tables, download directory) resolved from a config directory.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ProspectingConfig, StudioConfig};
