//! File-backed document sources.
//!
//! Reads the rules catalog and character sheets as JSON from disk using
//! `tokio::fs`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use pointforge_domain::{CatalogDocument, Character, RulesCatalog};
use serde::de::DeserializeOwned;
use tokio::fs;

use super::ports::{CatalogSource, CharacterSource, SourceError};

async fn read_json<T: DeserializeOwned>(kind: &'static str, path: &Path) -> Result<T, SourceError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| SourceError::io(kind, path, e))?;
    serde_json::from_str(&content).map_err(|e| SourceError::json(path, e))
}

/// A catalog stored as one `{ "abilities": [...], "modifiers": [...] }` file.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogFile {
    async fn load_catalog(&self) -> Result<RulesCatalog, SourceError> {
        let document: CatalogDocument = read_json("catalog", &self.path).await?;
        Ok(RulesCatalog::from_document(document))
    }
}

/// A directory of `<id>.json` character sheets.
#[derive(Debug, Clone)]
pub struct JsonCharacterDirectory {
    root: PathBuf,
}

impl JsonCharacterDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Split a sheet path into its directory source and character id.
    pub fn for_file(path: &Path) -> Option<(Self, String)> {
        let id = path.file_stem()?.to_str()?.to_string();
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Some((Self::new(root), id))
    }

    /// Path for an id, refusing anything that would leave the directory.
    fn path_for(&self, id: &str) -> Option<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !id.starts_with('.');
        valid.then(|| self.root.join(format!("{id}.json")))
    }
}

#[async_trait]
impl CharacterSource for JsonCharacterDirectory {
    async fn load_character(&self, id: &str) -> Result<Character, SourceError> {
        let path = self
            .path_for(id)
            .ok_or_else(|| SourceError::not_found("character", id))?;
        read_json("character", &path).await
    }
}
