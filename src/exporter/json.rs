// file: src/exporter/json.rs
// description: writes document artifacts to the export directory with a json manifest

use crate::config::ExportConfig;
use crate::error::{Result, WorkflowError};
use crate::models::{Document, FileAttachment};
use crate::registry::DocumentRegistry;
use crate::utils::Validator;
use chrono::Utc;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct ArtifactExporter {
    output_dir: PathBuf,
    write_manifest: bool,
    pretty: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedArtifact {
    pub file_name: String,
    pub path: PathBuf,
    pub mime_type: String,
    pub size: u64,
    pub checksum: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_documents: usize,
    pub current_document_id: Option<String>,
    pub files: Vec<ExportedArtifact>,
    pub documents: Vec<Document>,
}

impl ArtifactExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| WorkflowError::FileOperation {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self {
            output_dir,
            write_manifest: true,
            pretty: true,
        })
    }

    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        Ok(Self::new(&config.output_dir)?.with_manifest(config.write_manifest))
    }

    pub fn with_manifest(mut self, write_manifest: bool) -> Self {
        self.write_manifest = write_manifest;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes a single in-memory artifact, replacing any file of the same name.
    pub fn write_file(&self, file: &FileAttachment) -> Result<ExportedArtifact> {
        let file_name = Validator::sanitize_file_component(&file.file_name);
        self.write_as(file, file_name)
    }

    fn write_as(&self, file: &FileAttachment, file_name: String) -> Result<ExportedArtifact> {
        let path = self.output_dir.join(&file_name);

        fs::write(&path, &file.bytes).map_err(|source| WorkflowError::FileOperation {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {} ({} bytes)", path.display(), file.size);

        Ok(ExportedArtifact {
            file_name,
            path,
            mime_type: file.mime_type.clone(),
            size: file.size,
            checksum: file.checksum.clone(),
            document_id: None,
        })
    }

    /// Documents without an attached file export nothing.
    pub fn export_document(&self, document: &Document) -> Result<Option<ExportedArtifact>> {
        let Some(file) = &document.file else {
            debug!("Document {} has no file to export", document.id);
            return Ok(None);
        };

        let mut artifact = self.write_file(file)?;
        artifact.document_id = Some(document.id.clone());
        info!("Exported {} to {}", document.name, artifact.path.display());
        Ok(Some(artifact))
    }

    pub fn export_session(&self, registry: &DocumentRegistry) -> Result<ExportManifest> {
        info!("Starting export to {:?}", self.output_dir);

        let mut files = Vec::new();
        let mut taken = HashSet::new();
        for document in registry.documents() {
            let Some(file) = &document.file else {
                debug!("Document {} has no file to export", document.id);
                continue;
            };

            let file_name = unique_file_name(&file.file_name, &mut taken);
            let mut artifact = self.write_as(file, file_name)?;
            artifact.document_id = Some(document.id.clone());
            files.push(artifact);
        }

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_documents: registry.len(),
            current_document_id: registry.current_document().map(|d| d.id.clone()),
            files,
            documents: registry.documents().to_vec(),
        };

        if self.write_manifest {
            self.write_manifest_file(&manifest)?;
        }

        info!(
            "Export complete: {} documents, {} files",
            manifest.total_documents,
            manifest.files.len()
        );
        Ok(manifest)
    }

    fn write_manifest_file(&self, manifest: &ExportManifest) -> Result<PathBuf> {
        let path = self.output_dir.join(MANIFEST_FILE);
        let contents = if self.pretty {
            serde_json::to_string_pretty(manifest)?
        } else {
            serde_json::to_string(manifest)?
        };

        fs::write(&path, contents).map_err(|source| WorkflowError::FileOperation {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Same-day documents for the same client share a base name; later ones get
/// `-1`, `-2`, ... before the extension.
fn unique_file_name(file_name: &str, taken: &mut HashSet<String>) -> String {
    let base = Validator::sanitize_file_component(file_name);
    if taken.insert(base.clone()) {
        return base;
    }

    let (stem, extension) = match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (base.as_str(), None),
    };

    let mut counter = 1;
    loop {
        let candidate = match extension {
            Some(ext) => format!("{}-{}.{}", stem, counter, ext),
            None => format!("{}-{}", stem, counter),
        };
        if taken.insert(candidate.clone()) {
            warn!("Export name {} already used, writing {}", base, candidate);
            return candidate;
        }
        counter += 1;
    }
}
