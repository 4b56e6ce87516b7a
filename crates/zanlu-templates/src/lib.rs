//! Generator Templates for ZanluNet Studio
//!
//! Every generator in the studio (prompts, SaaS briefs, contracts, outreach
//! messages) is a form plus a table of templates. A request is a snapshot of
//! the form; the composer validates it, resolves a template from the
//! registry by the request's category path, substitutes field values and
//! places optional sections around the body.
//!
//! Key concepts:
//! - Templates are static data: a literal with `{field}` placeholders or a
//!   pure render function
//! - Lookups that miss return a typed `NotFound`, never a blank string
//! - Optional fields that are empty leave no trace in the output
//!
//! # Example
//!
//! ```rust
//! use zanlu_templates::{compose, CompositionRequest, GeneratorId, TemplateRegistry};
//!
//! let registry = TemplateRegistry::new();
//! let request = CompositionRequest::new(GeneratorId::Prompt)
//!     .with_text("projectType", "landing-page")
//!     .with_text("visualStyle", "Minimalista Clean")
//!     .with_text("niche", "Educação/Cursos");
//!
//! let document = compose(&registry, &request).unwrap();
//! assert!(document.text.contains("NICHO: Educação/Cursos"));
//! ```

pub mod catalog;
mod composer;
mod definition;
mod error;
mod registry;
mod request;
mod validation;

pub use composer::{
    bullet_list, compose, placeholders, render_section, strip_blank_edges, substitute,
    ComposedDocument,
};
pub use definition::{
    EnumOption, FieldKind, FieldSpec, GeneratorDefinition, GeneratorId, Placement, Section,
    SectionBody,
};
pub use error::{ComposeError, NotFound, ValidationError};
pub use registry::{CategoryPath, Lookup, TemplateEntry, TemplateRegistry, TemplateTable};
pub use request::{CompositionRequest, FieldValue, Resolved, ResolvedFields};
pub use validation::{format_missing_fields_prompt, validate};
