//! Composition errors

use thiserror::Error;

use crate::definition::GeneratorId;
use crate::registry::CategoryPath;

/// Required fields left empty (or set outside their closed enumeration)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", missing.join(", "))]
pub struct ValidationError {
    /// Field names in form order
    pub missing: Vec<String>,
}

/// No template configured for a category path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no {generator} template for {path}")]
pub struct NotFound {
    pub generator: GeneratorId,
    pub path: CategoryPath,
    /// Text the caller shows instead of a document
    pub sentinel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("unknown generator: {0}")]
    UnknownGenerator(GeneratorId),
}

impl ComposeError {
    /// Missing field names, empty for non-validation errors
    pub fn missing_fields(&self) -> &[String] {
        match self {
            ComposeError::Validation(e) => &e.missing,
            _ => &[],
        }
    }
}
