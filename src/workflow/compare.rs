// file: src/workflow/compare.rs
// description: compare page controller, change review with approve/refer decisions
// reference: current-document hand-off, no write-back to the registry

use crate::error::{Result, WorkflowError};
use crate::exporter::artifact;
use crate::models::{Change, ChangeStatus, FileAttachment};
use crate::session::Session;
use crate::utils::{Validator, simulate_work};
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Original,
    Revised,
}

#[derive(Debug, Default)]
pub struct ComparePage {
    original: Option<FileAttachment>,
    revised: Option<FileAttachment>,
    changes: Vec<Change>,
}

impl ComparePage {
    /// Opens the page. A current document with a file fills the original
    /// slot.
    pub fn mount(session: &Session) -> Self {
        let original = session
            .registry()
            .current_document()
            .and_then(|doc| doc.file.clone());

        if let Some(file) = &original {
            debug!("Compare pre-populated with {}", file.file_name);
        }

        Self {
            original,
            ..Self::default()
        }
    }

    pub fn select_file(&mut self, slot: Slot, file: FileAttachment) {
        match slot {
            Slot::Original => self.original = Some(file),
            Slot::Revised => self.revised = Some(file),
        }
    }

    pub fn upload(&mut self, slot: Slot, path: &Path, session: &Session) -> Result<()> {
        Validator::validate_upload_extension(path, &session.config().upload.accepted_extensions)?;
        let file = FileAttachment::from_path(path)?;
        info!("Selected {} as {:?} ({} bytes)", file.file_name, slot, file.size);
        self.select_file(slot, file);
        Ok(())
    }

    pub fn file(&self, slot: Slot) -> Option<&FileAttachment> {
        match slot {
            Slot::Original => self.original.as_ref(),
            Slot::Revised => self.revised.as_ref(),
        }
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub async fn compare(&mut self, session: &Session) -> Result<&[Change]> {
        let (Some(original), Some(revised)) = (&self.original, &self.revised) else {
            let missing = [
                ("original document", self.original.is_none()),
                ("comparison document", self.revised.is_none()),
            ];
            return Err(WorkflowError::missing(
                missing.into_iter().filter(|(_, absent)| *absent).map(|(label, _)| label),
            ));
        };

        simulate_work(
            "Comparing Documents...",
            session.config().timing.compare_delay(),
            session.show_progress(),
        )
        .await;

        self.changes = session.comparator().compare(original, revised);
        info!("Comparison found {} changes", self.changes.len());
        Ok(&self.changes)
    }

    pub fn approve(&mut self, change_id: &str) -> Result<&Change> {
        let change = self.change_mut(change_id)?;
        change.approve();
        Ok(change)
    }

    pub fn refer(&mut self, change_id: &str, remarks: &str) -> Result<&Change> {
        let change = self.change_mut(change_id)?;
        change.refer(remarks);
        Ok(change)
    }

    pub fn count(&self, status: ChangeStatus) -> usize {
        self.changes.iter().filter(|c| c.status == status).count()
    }

    /// The decisions so far as a downloadable report.
    pub fn report(&self, session: &Session) -> FileAttachment {
        let export = &session.config().export;
        let content = artifact::comparison_report(&self.changes);
        let file_name = artifact::comparison_file_name(Utc::now().date_naive(), &export.file_extension);
        FileAttachment::new(file_name, export.mime_type.clone(), content.into_bytes())
    }

    fn change_mut(&mut self, change_id: &str) -> Result<&mut Change> {
        self.changes
            .iter_mut()
            .find(|c| c.id == change_id)
            .ok_or_else(|| WorkflowError::UnknownChange(change_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, TimingConfig};
    use crate::models::{ContractType, Document};

    fn session() -> Session {
        let mut config = Config::default_config();
        config.timing = TimingConfig::instant();
        Session::new(config)
    }

    fn file(name: &str) -> FileAttachment {
        FileAttachment::new(name, "text/plain", name.as_bytes().to_vec())
    }

    #[test]
    fn test_mount_uses_current_file() {
        let mut session = session();
        let document = Document::new("a".into(), ContractType::Msa, String::new())
            .with_file(file("contract.docx"));
        session.registry_mut().add_document(document.clone());
        session.registry_mut().set_current_document(Some(document));

        let page = ComparePage::mount(&session);
        assert_eq!(page.file(Slot::Original).map(|f| f.file_name.as_str()), Some("contract.docx"));
        assert!(page.file(Slot::Revised).is_none());
    }

    #[test]
    fn test_mount_ignores_current_without_file() {
        let mut session = session();
        let document = Document::new("a".into(), ContractType::Msa, String::new());
        session.registry_mut().set_current_document(Some(document));

        let page = ComparePage::mount(&session);
        assert!(page.file(Slot::Original).is_none());
    }

    #[tokio::test]
    async fn test_compare_requires_both_files() {
        let session = session();
        let mut page = ComparePage::mount(&session);
        page.select_file(Slot::Original, file("a.docx"));

        let err = page.compare(&session).await.unwrap_err();
        assert!(matches!(&err, WorkflowError::MissingInput(fields) if fields == &["comparison document"]));
        assert!(page.changes().is_empty());
    }

    #[tokio::test]
    async fn test_compare_does_not_touch_registry() {
        let mut session = session();
        let document = Document::new("a".into(), ContractType::Msa, String::new())
            .with_file(file("v1.docx"));
        session.registry_mut().add_document(document.clone());
        session.registry_mut().set_current_document(Some(document));
        let revision = session.registry().revision();

        let mut page = ComparePage::mount(&session);
        page.select_file(Slot::Revised, file("v2.docx"));
        let changes = page.compare(&session).await.unwrap();

        assert_eq!(changes.len(), 4);
        assert_eq!(session.registry().revision(), revision);
        assert_eq!(session.registry().len(), 1);
    }

    #[tokio::test]
    async fn test_decisions_and_report() {
        let session = session();
        let mut page = ComparePage::default();
        page.select_file(Slot::Original, file("v1.docx"));
        page.select_file(Slot::Revised, file("v2.docx"));
        page.compare(&session).await.unwrap();

        page.approve("2").unwrap();
        page.approve("4").unwrap();
        let referred = page.refer("3", "Keep the 2x cap").unwrap();
        assert_eq!(referred.remarks.as_deref(), Some("Keep the 2x cap"));

        assert_eq!(page.count(ChangeStatus::Approved), 2);
        assert_eq!(page.count(ChangeStatus::Referred), 1);
        assert_eq!(page.count(ChangeStatus::Pending), 1);

        let report = page.report(&session);
        assert!(report.file_name.starts_with("contract_comparison_"));
        let text = report.as_text();
        assert!(text.contains("APPROVED CHANGES (2):"));
        assert!(text.contains("Remarks: Keep the 2x cap"));
    }

    #[tokio::test]
    async fn test_unknown_change_id() {
        let session = session();
        let mut page = ComparePage::default();
        page.select_file(Slot::Original, file("v1.docx"));
        page.select_file(Slot::Revised, file("v2.docx"));
        page.compare(&session).await.unwrap();

        let err = page.approve("99").unwrap_err();
        assert!(matches!(err, WorkflowError::UnknownChange(id) if id == "99"));
    }
}
