//! Required-field validation
//!
//! Pure function over the latest request snapshot. A field is missing when it
//! is absent, blank, an empty set, or holds a value outside its closed set.

use std::collections::BTreeMap;

use crate::definition::{FieldKind, FieldSpec};
use crate::error::ValidationError;
use crate::request::FieldValue;

pub fn validate(
    fields: &[FieldSpec],
    values: &BTreeMap<String, FieldValue>,
) -> Result<(), ValidationError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|spec| spec.required && !is_satisfied(spec, values.get(&spec.name)))
        .map(|spec| spec.name.clone())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

fn is_satisfied(spec: &FieldSpec, value: Option<&FieldValue>) -> bool {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return false;
    };

    match (&spec.kind, value) {
        (FieldKind::SingleSelect { .. }, FieldValue::Text(v)) => spec.allows(v),
        (FieldKind::MultiSelect { .. }, FieldValue::Selection(set)) => {
            set.iter().any(|v| spec.allows(v))
        }
        (FieldKind::Text | FieldKind::MultilineText, FieldValue::Text(_)) => true,
        _ => false,
    }
}

/// Format missing fields as a prompt for the user
pub fn format_missing_fields_prompt(fields: &[FieldSpec], error: &ValidationError) -> String {
    if error.missing.is_empty() {
        return String::new();
    }

    let mut prompt = String::from("Preencha os campos obrigatórios:\n");
    for name in &error.missing {
        let label = fields
            .iter()
            .find(|f| &f.name == name)
            .map(|f| f.label.as_str())
            .unwrap_or(name);
        prompt.push_str(&format!("- {}\n", label));
    }
    prompt
}
