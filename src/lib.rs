//! ZanluNet Studio
//!
//! Tooling behind the agency dashboard: text generators (prompts, SaaS
//! briefs, contracts, outreach messages) composed from the template
//! registry in `zanlu-templates`, a synthetic prospect-list generator, and
//! the presentation shell that wires them to identity, notifications and
//! export.
//!
//! # Example
//!
//! ```rust
//! use zanlu_studio::prospecting::{ProspectGenerator, ProspectTables};
//!
//! let mut generator = ProspectGenerator::new(ProspectTables::builtin().unwrap());
//! let prospects = generator.generate("Curitiba", "Restaurante", 60);
//! assert_eq!(prospects.len(), 60);
//! assert_eq!(prospects[15].name, "Restaurante e Pizzaria 2");
//! ```

pub mod config;
pub mod error;
pub mod prospecting;
pub mod shell;

pub use zanlu_templates as templates;

pub use config::{ConfigLoader, StudioConfig};
pub use error::{ExportError, IdentityError, Result, StudioError};
