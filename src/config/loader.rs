//! Configuration loader
//!
//! Loads `studio.yaml` and the prospecting locale tables from a config
//! directory.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::types::StudioConfig;
use crate::prospecting::ProspectTables;

const STUDIO_FILE: &str = "studio.yaml";

pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Create loader from STUDIO_CONFIG_DIR env var or default to "config"
    ///
    /// Path resolution order:
    /// 1. STUDIO_CONFIG_DIR environment variable (explicit override)
    /// 2. Relative "config" path (running from the repository root)
    /// 3. CARGO_MANIFEST_DIR/config (tests and `cargo run`)
    pub fn from_env() -> Self {
        if let Ok(dir) = std::env::var("STUDIO_CONFIG_DIR") {
            return Self::new(dir);
        }

        if Path::new("config").join(STUDIO_FILE).exists() {
            return Self::new("config");
        }

        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let config_path = Path::new(&manifest_dir).join("config");
            if config_path.join(STUDIO_FILE).exists() {
                return Self::new(config_path);
            }
        }

        // Missing files fall back to defaults, so "config" is safe here
        Self::new("config")
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load `studio.yaml`; a missing file yields the defaults
    pub fn load_studio(&self) -> Result<StudioConfig> {
        let path = self.config_dir.join(STUDIO_FILE);
        if !path.exists() {
            debug!("{} not found, using default studio config", path.display());
            return Ok(StudioConfig::default());
        }

        info!("Loading studio configuration from {}", path.display());
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: StudioConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        self.validate_studio(&config)?;
        Ok(config)
    }

    /// Load the prospecting locale tables named by `config`
    ///
    /// Falls back to the embedded tables when no file is configured. A
    /// configured file that is missing is an error.
    pub fn load_prospect_tables(&self, config: &StudioConfig) -> Result<ProspectTables> {
        let Some(relative) = &config.prospecting.tables_file else {
            debug!("No tables_file configured, using built-in locale tables");
            return ProspectTables::builtin();
        };

        let path = self.config_dir.join(relative);
        info!("Loading prospecting tables from {}", path.display());
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let tables = ProspectTables::from_yaml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        info!(
            "Loaded {} categories, {} cities with area codes",
            tables.names_by_category.len(),
            tables.area_codes.len()
        );
        Ok(tables)
    }

    fn validate_studio(&self, config: &StudioConfig) -> Result<()> {
        if config.agency_name.trim().is_empty() {
            bail!("agency_name must not be empty");
        }
        if config.prospecting.batch_size == 0 {
            bail!("prospecting.batch_size must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_studio_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::new(dir.path()).load_studio().unwrap();
        assert_eq!(config, StudioConfig::default());
    }

    #[test]
    fn test_invalid_batch_size_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(STUDIO_FILE),
            "prospecting:\n  batch_size: 0\n",
        )
        .unwrap();

        let err = ConfigLoader::new(dir.path()).load_studio().unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STUDIO_FILE), "prospecting: [unclosed").unwrap();

        let err = ConfigLoader::new(dir.path()).load_studio().unwrap_err();
        assert!(format!("{err:#}").contains("studio.yaml"));
    }

    #[test]
    fn test_tables_file_overrides_builtin() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("sul.yaml"),
            r#"
fallback_name: Negócio
default_area_code: "51"
default_streets: [Rua da Praia]
names_by_category:
  Hotel: [Pousada do Lago]
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(STUDIO_FILE),
            "prospecting:\n  tables_file: sul.yaml\n",
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path());
        let config = loader.load_studio().unwrap();
        let tables = loader.load_prospect_tables(&config).unwrap();
        assert_eq!(tables.default_area_code, "51");
        assert_eq!(tables.names_for("Hotel"), ["Pousada do Lago".to_string()]);
    }

    #[test]
    fn test_missing_tables_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut config = StudioConfig::default();
        config.prospecting.tables_file = Some("nowhere.yaml".into());

        let err = ConfigLoader::new(dir.path())
            .load_prospect_tables(&config)
            .unwrap_err();
        assert!(format!("{err:#}").contains("nowhere.yaml"));
    }

    #[test]
    fn test_repository_config_loads() {
        let loader = ConfigLoader::new(concat!(env!("CARGO_MANIFEST_DIR"), "/config"));
        let config = loader.load_studio().unwrap();
        let tables = loader.load_prospect_tables(&config).unwrap();
        assert_eq!(config.prospecting.batch_size, 60);
        assert_eq!(tables.area_code_for("Curitiba"), "41");
    }
}
