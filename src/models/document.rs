// file: src/models/document.rs
// description: core document model with metadata and in-memory file artifact
// reference: internal data structures

use crate::error::{Result, WorkflowError};
use crate::models::ContractType;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Serialize-only: the attached file's bytes are not written out, so a
/// serialized document cannot be restored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    pub content: String,
    pub metadata: DocumentMetadata,
    pub file: Option<FileAttachment>,
}

/// Descriptive fields attached to a document. All values are strings; keys
/// outside the well-known set live in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// In-memory binary payload, the exportable artifact of a document.
/// Serialized without its bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    pub checksum: String,
    #[serde(skip_serializing)]
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: String, contract_type: ContractType, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            contract_type,
            content,
            metadata: DocumentMetadata::default(),
            file: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_file(mut self, file: FileAttachment) -> Self {
        self.file = Some(file);
        self
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }
}

impl DocumentMetadata {
    pub fn get(&self, key: &str) -> Option<&str> {
        let known = match key {
            "template_type" => &self.template_type,
            "enterprise_name" => &self.enterprise_name,
            "client_name" => &self.client_name,
            "effective_date" => &self.effective_date,
            "contract_duration" => &self.contract_duration,
            "notice_period" => &self.notice_period,
            "generated_at" => &self.generated_at,
            "analyzed_at" => &self.analyzed_at,
            _ => return self.extra.get(key).map(String::as_str),
        };
        known.as_deref()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = Some(value.into());
        match key.as_str() {
            "template_type" => self.template_type = value,
            "enterprise_name" => self.enterprise_name = value,
            "client_name" => self.client_name = value,
            "effective_date" => self.effective_date = value,
            "contract_duration" => self.contract_duration = value,
            "notice_period" => self.notice_period = value,
            "generated_at" => self.generated_at = value,
            "analyzed_at" => self.analyzed_at = value,
            _ => {
                if let Some(value) = value {
                    self.extra.insert(key, value);
                }
            }
        }
    }
}

impl FileAttachment {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let checksum = Self::compute_hash(&bytes);
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            checksum,
            bytes,
        }
    }

    /// Reads a file from disk the way a browser file picker would hand it
    /// over: whole content in memory, no inspection.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| WorkflowError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let mime_type = mime_for_extension(path.extension().and_then(|e| e.to_str()));
        Ok(Self::new(file_name, mime_type, bytes))
    }

    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    fn compute_hash(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{:x}", hasher.finalize())
    }
}

fn mime_for_extension(extension: Option<&str>) -> &'static str {
    match extension.map(|e| e.to_lowercase()).as_deref() {
        Some("docx") => crate::config::WORD_MIME_TYPE,
        Some("doc") => "application/msword",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
