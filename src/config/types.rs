//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use zanlu_templates::catalog::DEFAULT_AGENCY_NAME;

/// Batch size of one prospecting run
pub const DEFAULT_BATCH_SIZE: usize = 60;

/// Root of `studio.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Agency that signs contracts and outreach messages
    pub agency_name: String,
    /// Where downloaded artifacts are written (relative to the working dir)
    pub downloads_dir: PathBuf,
    pub prospecting: ProspectingConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            agency_name: DEFAULT_AGENCY_NAME.to_string(),
            downloads_dir: PathBuf::from("downloads"),
            prospecting: ProspectingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProspectingConfig {
    pub batch_size: usize,
    /// Locale tables file, relative to the config directory.
    /// The embedded tables are used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables_file: Option<PathBuf>,
}

impl Default for ProspectingConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            tables_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: StudioConfig = serde_yaml::from_str("agency_name: Estúdio Norte\n").unwrap();
        assert_eq!(config.agency_name, "Estúdio Norte");
        assert_eq!(config.prospecting.batch_size, 60);
        assert_eq!(config.prospecting.tables_file, None);
        assert_eq!(config.downloads_dir, PathBuf::from("downloads"));
    }

    #[test]
    fn test_nested_prospecting_section() {
        let yaml = r#"
prospecting:
  batch_size: 12
  tables_file: locales/sul.yaml
"#;
        let config: StudioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.agency_name, DEFAULT_AGENCY_NAME);
        assert_eq!(config.prospecting.batch_size, 12);
        assert_eq!(
            config.prospecting.tables_file,
            Some(PathBuf::from("locales/sul.yaml"))
        );
    }
}
