//! Composition requests
//!
//! A `CompositionRequest` is an immutable snapshot of one form. Every `with_*`
//! call returns a new snapshot, so validation always runs over a complete
//! state rather than a half-edited one.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::definition::{FieldKind, GeneratorDefinition, GeneratorId};

/// Value entered for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Selection(BTreeSet<String>),
}

impl FieldValue {
    /// Empty string (after trimming) or empty set
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Selection(set) => set.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Selection(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Selection(set) => {
                let items: Vec<&str> = set.iter().map(String::as_str).collect();
                f.write_str(&items.join(", "))
            }
        }
    }
}

/// Snapshot of one generation attempt
///
/// `requested_at` keeps the offset it was stamped with, so the issue date is
/// the calendar day of whoever generated the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionRequest {
    pub generator: GeneratorId,
    pub values: BTreeMap<String, FieldValue>,
    pub requested_at: DateTime<FixedOffset>,
}

impl CompositionRequest {
    pub fn new(generator: GeneratorId) -> Self {
        Self {
            generator,
            values: BTreeMap::new(),
            requested_at: Local::now().fixed_offset(),
        }
    }

    /// Set a text or single-select value
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Replace a multi-select value
    pub fn with_selection<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = values.into_iter().map(Into::into).collect();
        self.values.insert(name.into(), FieldValue::Selection(set));
        self
    }

    /// Toggle one member of a multi-select value
    pub fn toggled(mut self, name: &str, option: &str) -> Self {
        let entry = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::Selection(BTreeSet::new()));
        if matches!(entry, FieldValue::Text(_)) {
            *entry = FieldValue::Selection(BTreeSet::new());
        }
        if let FieldValue::Selection(set) = entry {
            if !set.remove(option) {
                set.insert(option.to_string());
            }
        }
        self
    }

    /// Clear a field
    pub fn without(mut self, name: &str) -> Self {
        self.values.remove(name);
        self
    }

    /// Pin the snapshot timestamp
    pub fn at<Tz: TimeZone>(mut self, requested_at: DateTime<Tz>) -> Self {
        self.requested_at = requested_at.fixed_offset();
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Normalize against a generator definition
    ///
    /// Applies defaults, drops select values outside their closed set and
    /// orders multi-select members by the enumerated order.
    pub fn resolve(&self, definition: &GeneratorDefinition) -> ResolvedFields {
        let mut values = BTreeMap::new();

        for spec in &definition.fields {
            let raw = self.values.get(&spec.name).filter(|v| !v.is_empty());
            let resolved = match (&spec.kind, raw) {
                (FieldKind::MultiSelect { options }, Some(FieldValue::Selection(set))) => {
                    let ordered: Vec<String> = options
                        .iter()
                        .filter(|o| set.contains(&o.value))
                        .map(|o| o.value.clone())
                        .collect();
                    (!ordered.is_empty()).then_some(Resolved::List(ordered))
                }
                (FieldKind::MultiSelect { .. }, _) => None,
                (FieldKind::SingleSelect { .. }, Some(FieldValue::Text(v))) => {
                    spec.allows(v).then(|| Resolved::Text(v.clone()))
                }
                (FieldKind::Text | FieldKind::MultilineText, Some(FieldValue::Text(v))) => {
                    Some(Resolved::Text(v.clone()))
                }
                _ => None,
            };

            let resolved = resolved.or_else(|| spec.default.clone().map(Resolved::Text));
            if let Some(resolved) = resolved {
                values.insert(spec.name.clone(), resolved);
            }
        }

        ResolvedFields {
            values,
            requested_at: self.requested_at,
        }
    }
}

/// A normalized field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Text(String),
    /// Multi-select members in canonical order
    List(Vec<String>),
}

/// Field values after normalization; only non-empty entries are present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    values: BTreeMap<String, Resolved>,
    requested_at: DateTime<FixedOffset>,
}

impl ResolvedFields {
    /// Text value, or an empty string when the field is empty
    pub fn text(&self, name: &str) -> &str {
        self.opt_text(name).unwrap_or_default()
    }

    pub fn opt_text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Resolved::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Multi-select members in canonical order
    pub fn list(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(Resolved::List(items)) => items,
            _ => &[],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Resolved> {
        self.values.get(name)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn requested_at(&self) -> DateTime<FixedOffset> {
        self.requested_at
    }

    /// Calendar date in the requester's own offset
    pub fn issued_on(&self) -> NaiveDate {
        self.requested_at.date_naive()
    }

    /// Issue date in the dd/mm/yyyy form used in documents
    pub fn issued_on_display(&self) -> String {
        self.issued_on().format("%d/%m/%Y").to_string()
    }
}
