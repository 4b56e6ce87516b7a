//! Field definitions for generator forms
//!
//! Each generator declares the fields its form collects, which of them select
//! the template (the category axes), and which optional sections are appended
//! around the resolved body.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::CategoryPath;

/// The text generators served by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorId {
    /// Prompt for an AI site builder, keyed by project type
    Prompt,
    /// Free-form SaaS brief built from a questionnaire
    SaasBrief,
    /// Contracts and proposals, keyed by contract type
    Contract,
    /// Outreach messages, keyed by message kind and niche
    Message,
}

impl GeneratorId {
    pub fn all() -> &'static [GeneratorId] {
        &[
            GeneratorId::Prompt,
            GeneratorId::SaasBrief,
            GeneratorId::Contract,
            GeneratorId::Message,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GeneratorId::Prompt => "prompt",
            GeneratorId::SaasBrief => "saas_brief",
            GeneratorId::Contract => "contract",
            GeneratorId::Message => "message",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "prompt" | "prompts" | "geradorprompts" => Some(GeneratorId::Prompt),
            "saasbrief" | "saas" | "criarsaas" => Some(GeneratorId::SaasBrief),
            "contract" | "contracts" | "contrato" | "geradorcontratos" => {
                Some(GeneratorId::Contract)
            }
            "message" | "messages" | "mensagem" | "mensagensprontas" => Some(GeneratorId::Message),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kinds of form fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-line free text
    Text,

    /// Multi-line free text
    MultilineText,

    /// Dropdown with exactly one value from a closed set
    SingleSelect { options: Vec<EnumOption> },

    /// Any subset of a closed set, rendered in the set's order
    MultiSelect { options: Vec<EnumOption> },
}

impl FieldKind {
    /// Enumerated options, empty for free-text kinds
    pub fn options(&self) -> &[EnumOption] {
        match self {
            FieldKind::SingleSelect { options } | FieldKind::MultiSelect { options } => options,
            FieldKind::Text | FieldKind::MultilineText => &[],
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(
            self,
            FieldKind::SingleSelect { .. } | FieldKind::MultiSelect { .. }
        )
    }
}

/// One option of a select field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumOption {
    pub value: String,
    pub label: String,
}

impl EnumOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value
    pub fn same(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Definition of a single form field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field identifier, also the `{placeholder}` name in templates
    pub name: String,

    /// Human-readable label
    pub label: String,

    /// The field kind
    #[serde(flatten)]
    pub kind: FieldKind,

    /// Is this field required?
    #[serde(default)]
    pub required: bool,

    /// Placeholder text shown in an empty input
    #[serde(default)]
    pub placeholder: Option<String>,

    /// Value used when the request leaves the field empty
    #[serde(default)]
    pub default: Option<String>,
}

impl FieldSpec {
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn multiline(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::MultilineText)
    }

    pub fn select(name: &str, label: &str, options: Vec<EnumOption>) -> Self {
        Self::new(name, label, FieldKind::SingleSelect { options })
    }

    pub fn multi_select(name: &str, label: &str, options: Vec<EnumOption>) -> Self {
        Self::new(name, label, FieldKind::MultiSelect { options })
    }

    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            placeholder: None,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    /// Does the closed set of this field contain `value`?
    pub fn allows(&self, value: &str) -> bool {
        self.kind.options().iter().any(|o| o.value == value)
    }
}

/// Where an optional section goes relative to the resolved body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// Source of an optional section's text
#[derive(Clone, Copy)]
pub enum SectionBody {
    /// The value of one field, verbatim for text and bulleted for multi-select
    Field(&'static str),

    /// Fixed text, always rendered
    Static(&'static str),

    /// Computed from the resolved fields; `None` drops the section
    Render(fn(&crate::request::ResolvedFields) -> Option<String>),
}

impl fmt::Debug for SectionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionBody::Field(name) => f.debug_tuple("Field").field(name).finish(),
            SectionBody::Static(_) => f.write_str("Static(..)"),
            SectionBody::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// An optional block placed around the body
#[derive(Debug, Clone)]
pub struct Section {
    /// Heading line printed above the body (e.g. "FUNCIONALIDADES:")
    pub heading: Option<&'static str>,
    pub body: SectionBody,
    pub placement: Placement,
}

impl Section {
    pub fn field(heading: &'static str, field: &'static str) -> Self {
        Self {
            heading: Some(heading),
            body: SectionBody::Field(field),
            placement: Placement::After,
        }
    }

    pub fn fixed(text: &'static str) -> Self {
        Self {
            heading: None,
            body: SectionBody::Static(text),
            placement: Placement::After,
        }
    }

    pub fn render(f: fn(&crate::request::ResolvedFields) -> Option<String>) -> Self {
        Self {
            heading: None,
            body: SectionBody::Render(f),
            placement: Placement::After,
        }
    }

    pub fn before(mut self) -> Self {
        self.placement = Placement::Before;
        self
    }
}

/// A complete generator form
#[derive(Debug, Clone)]
pub struct GeneratorDefinition {
    pub id: GeneratorId,

    /// Human-readable name
    pub name: String,

    /// What the generator produces
    pub description: String,

    /// Field definitions in form order
    pub fields: Vec<FieldSpec>,

    /// Fields whose values form the category path (zero, one or two)
    pub axes: Vec<&'static str>,

    /// Optional sections in output order
    pub sections: Vec<Section>,

    /// Text shown when no template exists for the selected path
    pub not_found: &'static str,
}

impl GeneratorDefinition {
    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.required)
    }

    /// Category path for a set of resolved values
    ///
    /// Generators without axes use the single `default` key.
    pub fn category_path(&self, fields: &crate::request::ResolvedFields) -> CategoryPath {
        let mut keys = self.axes.iter().map(|axis| fields.text(axis).to_string());
        match (keys.next(), keys.next()) {
            (None, _) => CategoryPath::single(CategoryPath::DEFAULT_KEY),
            (Some(primary), None) => CategoryPath::single(primary),
            (Some(primary), Some(secondary)) => CategoryPath::pair(primary, secondary),
        }
    }
}
