//! Locale tables: business names per niche, streets and area codes per city

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BUILTIN_TABLES: &str = include_str!("../../config/prospecting.yaml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProspectTables {
    /// Name used when the niche has no list
    pub fallback_name: String,
    /// Area code used when the city is unknown
    pub default_area_code: String,
    /// Streets used when the city has no list
    pub default_streets: Vec<String>,
    #[serde(default)]
    pub names_by_category: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub area_codes: BTreeMap<String, String>,
    #[serde(default)]
    pub streets_by_city: BTreeMap<String, Vec<String>>,
}

impl ProspectTables {
    /// Tables shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_TABLES)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let tables: ProspectTables = serde_yaml::from_str(content)?;
        tables.validate()?;
        Ok(tables)
    }

    fn validate(&self) -> Result<()> {
        if self.fallback_name.trim().is_empty() {
            bail!("fallback_name must not be empty");
        }
        if self.default_streets.is_empty() {
            bail!("default_streets must list at least one street");
        }
        if !is_area_code(&self.default_area_code) {
            bail!("default_area_code must be two digits");
        }
        if let Some((city, code)) = self.area_codes.iter().find(|(_, c)| !is_area_code(c)) {
            bail!("area code for {} must be two digits, got {:?}", city, code);
        }
        Ok(())
    }

    /// Business names for a niche, or the single fallback name
    pub fn names_for(&self, category: &str) -> &[String] {
        match self.names_by_category.get(category) {
            Some(names) if !names.is_empty() => names.as_slice(),
            _ => std::slice::from_ref(&self.fallback_name),
        }
    }

    /// Streets for a city, or the default street list
    pub fn streets_for(&self, city: &str) -> &[String] {
        match self.streets_by_city.get(city) {
            Some(streets) if !streets.is_empty() => streets.as_slice(),
            _ => self.default_streets.as_slice(),
        }
    }

    pub fn area_code_for(&self, city: &str) -> &str {
        self.area_codes
            .get(city)
            .map(String::as_str)
            .unwrap_or(&self.default_area_code)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.names_by_category.keys().map(String::as_str)
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.area_codes.keys().map(String::as_str)
    }
}

fn is_area_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_digit())
}
