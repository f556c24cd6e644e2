use std::path::Path;
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::documents::readers::DocumentKind;
use crate::models::document::{Document, DocumentInfo};

/// Reads every supported file in `dir`, in directory enumeration order.
///
/// Unreadable files are logged and come back with empty text. A missing or
/// unreadable directory yields no documents.
pub fn load_documents(dir: &Path) -> Vec<Document> {
    if !dir.is_dir() {
        debug!("Documents directory {} not found", dir.display());
        return Vec::new();
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list documents directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut documents = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(kind) = DocumentKind::from_path(&path) else {
            continue;
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let extraction = kind.extract(&path);
        if extraction.is_failed() {
            warn!("Failed to read {kind:?} document {name}: {extraction:?}");
        }

        documents.push(Document {
            name,
            extracted_text: extraction.into_text(),
        });
    }

    documents
}

/// Joins documents into one corpus: a header line per file, blank line between files.
/// Blank documents are skipped.
pub fn build_corpus(documents: &[Document]) -> String {
    documents
        .iter()
        .filter(|d| !d.extracted_text.trim().is_empty())
        .map(|d| format!("--- DOCUMENTO: {} ---\n{}", d.name, d.extracted_text.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `load_documents` + `build_corpus`. Never fails; empty when nothing is readable.
pub fn load_corpus(dir: &Path) -> String {
    build_corpus(&load_documents(dir))
}

/// Metadata for every regular file in `dir`, sorted by name. Symlinks are followed.
pub fn list_documents(dir: &Path) -> Result<Vec<DocumentInfo>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir).context("Failed to list documents directory")? {
        let entry = entry.context("Failed to read directory entry")?;
        let Ok(metadata) = std::fs::metadata(entry.path()) else {
            // Dangling symlink.
            continue;
        };
        if !metadata.is_file() {
            continue;
        }

        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();

        documents.push(DocumentInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            modified,
        });
    }

    documents.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(documents)
}
