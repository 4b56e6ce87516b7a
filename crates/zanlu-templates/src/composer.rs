//! Template Composer
//!
//! Turns a `CompositionRequest` into document text: validate, resolve the
//! template for the request's category path, substitute `{field}`
//! placeholders, then place the generator's optional sections around the body.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::definition::{GeneratorDefinition, GeneratorId, Placement, Section, SectionBody};
use crate::error::ComposeError;
use crate::registry::{CategoryPath, Lookup, TemplateEntry, TemplateRegistry};
use crate::request::{CompositionRequest, Resolved, ResolvedFields};
use crate::validation::validate;

/// Output of a successful composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedDocument {
    pub generator: GeneratorId,
    /// Category path the template was resolved from
    pub path: CategoryPath,
    pub text: String,
    /// Timestamp of the request snapshot
    pub composed_at: DateTime<FixedOffset>,
}

/// Compose a document from a request
///
/// Pure: the same request against the same registry always yields the same
/// text.
pub fn compose(
    registry: &TemplateRegistry,
    request: &CompositionRequest,
) -> Result<ComposedDocument, ComposeError> {
    let table = registry
        .get(request.generator)
        .ok_or(ComposeError::UnknownGenerator(request.generator))?;
    let definition = &table.definition;

    validate(&definition.fields, &request.values)?;

    let fields = request.resolve(definition);
    let path = definition.category_path(&fields);

    let entry = match table.lookup(&path) {
        Lookup::Found(entry) => entry,
        Lookup::NotFound(not_found) => return Err(not_found.into()),
    };

    let body = match entry {
        TemplateEntry::Literal(text) => substitute(text, &fields),
        TemplateEntry::Render(render) => render(&fields),
    };
    let body = strip_blank_edges(&body);

    let text = assemble(definition, body, &fields);
    info!(
        generator = %definition.id,
        %path,
        chars = text.chars().count(),
        "composed document"
    );

    Ok(ComposedDocument {
        generator: definition.id,
        path,
        text,
        composed_at: request.requested_at,
    })
}

fn assemble(definition: &GeneratorDefinition, body: &str, fields: &ResolvedFields) -> String {
    let blocks: Vec<String> = rendered_sections(definition, fields, Placement::Before)
        .chain(std::iter::once(body.to_string()))
        .chain(rendered_sections(definition, fields, Placement::After))
        .collect();

    debug!(generator = %definition.id, blocks = blocks.len(), "assembled sections");
    blocks.join("\n\n")
}

fn rendered_sections<'a>(
    definition: &'a GeneratorDefinition,
    fields: &'a ResolvedFields,
    placement: Placement,
) -> impl Iterator<Item = String> + 'a {
    definition
        .sections
        .iter()
        .filter(move |s| s.placement == placement)
        .filter_map(move |s| render_section(s, fields))
}

/// Render one optional section, `None` when its backing field is empty
pub fn render_section(section: &Section, fields: &ResolvedFields) -> Option<String> {
    let body = match section.body {
        SectionBody::Field(name) => match fields.get(name)? {
            Resolved::Text(text) => text.trim_end().to_string(),
            Resolved::List(items) => bullet_list(items),
        },
        SectionBody::Static(text) => text.to_string(),
        SectionBody::Render(render) => render(fields)?,
    };

    if body.trim().is_empty() {
        return None;
    }

    Some(match section.heading {
        Some(heading) => format!("{}\n{}", heading, body),
        None => body,
    })
}

/// Render items as "- item" lines
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitute `{field}` placeholders with resolved values
///
/// Only well-formed identifiers between braces are placeholders; any other
/// brace is copied through. Empty fields substitute as empty text.
pub fn substitute(template: &str, fields: &ResolvedFields) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        match placeholder_at(after) {
            Some(name) => {
                match fields.get(name) {
                    Some(Resolved::Text(value)) => result.push_str(value),
                    Some(Resolved::List(items)) => result.push_str(&items.join(", ")),
                    None => {}
                }
                rest = &after[name.len() + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Placeholder names referenced by a template, in order of appearance
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match placeholder_at(after) {
            Some(name) => {
                names.push(name);
                rest = &after[name.len() + 1..];
            }
            None => rest = after,
        }
    }
    names
}

/// Identifier terminated by `}` at the start of `s`
fn placeholder_at(s: &str) -> Option<&str> {
    let end = s.find('}')?;
    let name = &s[..end];
    let mut chars = name.chars();
    let first = chars.next()?;
    let is_ident =
        first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_ident.then_some(name)
}

/// Drop blank lines at the start and end of a template, keep everything else
pub fn strip_blank_edges(text: &str) -> &str {
    let lines: Vec<&str> = text.split('\n').collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());

    match (first, last) {
        (Some(first), Some(last)) => {
            let start: usize = lines[..first].iter().map(|l| l.len() + 1).sum();
            let end: usize = lines[..=last].iter().map(|l| l.len() + 1).sum::<usize>() - 1;
            &text[start..end]
        }
        _ => "",
    }
}
