//! Clipboard and file export

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ExportError;

/// Where generated text leaves the studio
pub trait ArtifactSink {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ExportError>;

    fn download_as_text_file(&mut self, filename: &str, content: &str) -> Result<(), ExportError>;
}

/// Download name for a contract: `contrato-<client>.txt`, each whitespace
/// character replaced by `-`, lowercased
pub fn contract_file_name(client_name: &str) -> String {
    let slug: String = client_name
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("contrato-{}.txt", slug.to_lowercase())
}

/// Clipboard held in memory, downloads written to a directory
#[derive(Debug)]
pub struct LocalArtifacts {
    downloads_dir: PathBuf,
    clipboard: Option<String>,
    downloads: Vec<PathBuf>,
}

impl LocalArtifacts {
    pub fn new(downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            downloads_dir: downloads_dir.into(),
            clipboard: None,
            downloads: Vec::new(),
        }
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Files written so far, oldest first
    pub fn downloads(&self) -> &[PathBuf] {
        &self.downloads
    }
}

impl ArtifactSink for LocalArtifacts {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ExportError> {
        debug!(chars = text.chars().count(), "copied to clipboard");
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn download_as_text_file(&mut self, filename: &str, content: &str) -> Result<(), ExportError> {
        validate_file_name(filename)?;

        std::fs::create_dir_all(&self.downloads_dir)?;
        let path = self.downloads_dir.join(filename);
        std::fs::write(&path, content)?;

        info!("Saved {} ({} bytes)", path.display(), content.len());
        self.downloads.push(path);
        Ok(())
    }
}

fn validate_file_name(filename: &str) -> Result<(), ExportError> {
    let bad = filename.trim().is_empty()
        || filename.contains(['/', '\\'])
        || filename == "."
        || filename == "..";
    if bad {
        return Err(ExportError::InvalidFileName(filename.to_string()));
    }
    Ok(())
}
