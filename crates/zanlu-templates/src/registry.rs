//! Template Registry - built-in templates for every generator

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::catalog;
use crate::definition::{GeneratorDefinition, GeneratorId};
use crate::error::NotFound;
use crate::request::ResolvedFields;

/// One or two category keys selecting a template
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryPath {
    pub primary: String,
    #[serde(default)]
    pub secondary: Option<String>,
}

impl CategoryPath {
    /// Key used by generators whose template does not depend on a select
    pub const DEFAULT_KEY: &'static str = "default";

    pub fn single(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
        }
    }

    pub fn pair(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: Some(secondary.into()),
        }
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => f.write_str(&self.primary),
        }
    }
}

/// A template: literal text with `{field}` placeholders, or a render function
#[derive(Clone, Copy)]
pub enum TemplateEntry {
    Literal(&'static str),
    Render(fn(&ResolvedFields) -> String),
}

impl fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateEntry::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            TemplateEntry::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Result of a registry lookup
#[derive(Debug)]
pub enum Lookup<'a> {
    Found(&'a TemplateEntry),
    NotFound(NotFound),
}

/// Templates and form definition for one generator
pub struct TemplateTable {
    pub definition: GeneratorDefinition,
    entries: HashMap<CategoryPath, TemplateEntry>,
}

impl TemplateTable {
    pub fn new(definition: GeneratorDefinition) -> Self {
        Self {
            definition,
            entries: HashMap::new(),
        }
    }

    pub fn with(mut self, path: CategoryPath, entry: TemplateEntry) -> Self {
        self.entries.insert(path, entry);
        self
    }

    pub fn lookup(&self, path: &CategoryPath) -> Lookup<'_> {
        match self.entries.get(path) {
            Some(entry) => Lookup::Found(entry),
            None => {
                debug!(generator = %self.definition.id, %path, "template lookup miss");
                Lookup::NotFound(NotFound {
                    generator: self.definition.id,
                    path: path.clone(),
                    sentinel: self.definition.not_found,
                })
            }
        }
    }

    /// Configured paths, sorted
    pub fn paths(&self) -> Vec<&CategoryPath> {
        let mut paths: Vec<_> = self.entries.keys().collect();
        paths.sort();
        paths
    }

    pub fn entries(&self) -> impl Iterator<Item = (&CategoryPath, &TemplateEntry)> {
        self.entries.iter()
    }
}

pub struct TemplateRegistry {
    tables: HashMap<GeneratorId, TemplateTable>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtins();
        registry
    }

    pub fn empty() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn register(&mut self, table: TemplateTable) {
        self.tables.insert(table.definition.id, table);
    }

    pub fn get(&self, id: GeneratorId) -> Option<&TemplateTable> {
        self.tables.get(&id)
    }

    pub fn definition(&self, id: GeneratorId) -> Option<&GeneratorDefinition> {
        self.get(id).map(|t| &t.definition)
    }

    /// Registered tables in `GeneratorId` order
    pub fn list(&self) -> Vec<&TemplateTable> {
        let mut tables: Vec<_> = self.tables.values().collect();
        tables.sort_by_key(|t| t.definition.id);
        tables
    }

    /// Look up a template by one or two keys
    pub fn lookup(&self, id: GeneratorId, primary: &str, secondary: Option<&str>) -> Lookup<'_> {
        let path = match secondary {
            Some(secondary) => CategoryPath::pair(primary, secondary),
            None => CategoryPath::single(primary),
        };
        match self.get(id) {
            Some(table) => table.lookup(&path),
            None => Lookup::NotFound(NotFound {
                generator: id,
                path,
                sentinel: "Gerador não encontrado",
            }),
        }
    }

    fn register_builtins(&mut self) {
        self.register(catalog::prompt::table());
        self.register(catalog::saas::table());
        self.register(catalog::contract::table());
        self.register(catalog::message::table());
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::FieldKind;

    #[test]
    fn test_builtins_cover_every_generator() {
        let registry = TemplateRegistry::new();
        for id in GeneratorId::all() {
            assert!(registry.get(*id).is_some(), "missing table for {id}");
        }
        assert_eq!(registry.list().len(), GeneratorId::all().len());
    }

    #[test]
    fn test_one_axis_lookup() {
        let registry = TemplateRegistry::new();
        assert!(matches!(
            registry.lookup(GeneratorId::Prompt, "landing-page", None),
            Lookup::Found(TemplateEntry::Literal(_))
        ));
        assert!(matches!(
            registry.lookup(GeneratorId::Contract, "venda-site", None),
            Lookup::Found(TemplateEntry::Render(_))
        ));
    }

    #[test]
    fn test_two_axis_lookup_and_miss() {
        let registry = TemplateRegistry::new();
        assert!(matches!(
            registry.lookup(GeneratorId::Message, "curta", Some("Salão")),
            Lookup::Found(_)
        ));

        match registry.lookup(GeneratorId::Message, "followup", Some("Construtora")) {
            Lookup::NotFound(nf) => {
                assert_eq!(nf.path, CategoryPath::pair("followup", "Construtora"));
                assert_eq!(nf.sentinel, "Mensagem não encontrada");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_primary_key_is_not_found() {
        let registry = TemplateRegistry::new();
        assert!(matches!(
            registry.lookup(GeneratorId::Contract, "nda", None),
            Lookup::NotFound(_)
        ));
    }

    #[test]
    fn test_axis_values_are_enumerated_options() {
        let registry = TemplateRegistry::new();
        for table in registry.list() {
            let def = &table.definition;
            for (path, _) in table.entries() {
                let keys = std::iter::once(&path.primary).chain(path.secondary.as_ref());
                for (axis, key) in def.axes.iter().zip(keys) {
                    let field = def.field(axis).unwrap();
                    assert!(matches!(field.kind, FieldKind::SingleSelect { .. }));
                    assert!(field.allows(key), "{} has no option {key}", def.id);
                }
            }
        }
    }

    #[test]
    fn test_literal_placeholders_name_declared_fields() {
        let registry = TemplateRegistry::new();
        for table in registry.list() {
            for (path, entry) in table.entries() {
                let TemplateEntry::Literal(text) = entry else {
                    continue;
                };
                for name in crate::composer::placeholders(text) {
                    assert!(
                        table.definition.field(name).is_some(),
                        "{}/{path} references unknown field {name}",
                        table.definition.id
                    );
                }
            }
        }
    }
}
