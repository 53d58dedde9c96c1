// file: src/workflow/review.rs
// description: review page controller, checklist evaluation written back to the registry
// reference: current-document hand-off from the generate flow

use crate::error::{Result, WorkflowError};
use crate::models::{ContractType, Document, EvaluationItem, EvaluationSummary, FileAttachment};
use crate::session::Session;
use crate::utils::{Validator, simulate_work};
use chrono::Utc;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct ReviewPage {
    selected_file: Option<FileAttachment>,
    contract_type: Option<ContractType>,
    source_document_id: Option<String>,
    evaluation: Vec<EvaluationItem>,
}

impl ReviewPage {
    /// Opens the page, picking up the current document when there is one.
    pub fn mount(session: &Session) -> Self {
        let mut page = Self::default();
        page.sync_from_current(session);
        page
    }

    /// Pre-populates file and contract type from the current document. A
    /// file the user already selected is left alone.
    pub fn sync_from_current(&mut self, session: &Session) {
        if self.selected_file.is_some() {
            return;
        }
        let Some(current) = session.registry().current_document() else {
            return;
        };

        debug!("Review pre-populated from document {}", current.id);
        self.selected_file = current.file.clone();
        self.contract_type = Some(current.contract_type);
        self.source_document_id = Some(current.id.clone());
    }

    /// Selecting a file by hand detaches the page from any registry document.
    pub fn select_file(&mut self, file: FileAttachment) {
        self.selected_file = Some(file);
        self.source_document_id = None;
    }

    pub fn upload(&mut self, path: &Path, session: &Session) -> Result<()> {
        Validator::validate_upload_extension(path, &session.config().upload.accepted_extensions)?;
        let file = FileAttachment::from_path(path)?;
        info!("Selected {} for review ({} bytes)", file.file_name, file.size);
        self.select_file(file);
        Ok(())
    }

    pub fn select_contract_type(&mut self, contract_type: ContractType) {
        self.contract_type = Some(contract_type);
    }

    pub fn selected_file(&self) -> Option<&FileAttachment> {
        self.selected_file.as_ref()
    }

    pub fn contract_type(&self) -> Option<ContractType> {
        self.contract_type
    }

    pub fn source_document_id(&self) -> Option<&str> {
        self.source_document_id.as_deref()
    }

    pub fn can_analyze(&self) -> bool {
        self.selected_file.is_some() && self.contract_type.is_some()
    }

    pub fn evaluation(&self) -> &[EvaluationItem] {
        &self.evaluation
    }

    pub fn summary(&self) -> EvaluationSummary {
        EvaluationSummary::from_items(&self.evaluation)
    }

    /// Runs the checklist and records the result on the reviewed document,
    /// which becomes current. A hand-picked upload is registered as a new
    /// document.
    pub async fn analyze(&mut self, session: &mut Session) -> Result<Document> {
        let (file, contract_type) = match (&self.selected_file, self.contract_type) {
            (Some(file), Some(contract_type)) => (file.clone(), contract_type),
            (file, contract_type) => {
                let mut missing = Vec::new();
                if file.is_none() {
                    missing.push("contract document");
                }
                if contract_type.is_none() {
                    missing.push("contract type");
                }
                return Err(WorkflowError::missing(missing));
            }
        };

        simulate_work(
            "Analyzing Contract...",
            session.config().timing.analyze_delay(),
            session.show_progress(),
        )
        .await;

        self.evaluation = session.evaluator().evaluate(contract_type, &file);
        let summary = self.summary();

        let mut document = self.reviewed_document(session, &file, contract_type);
        let metadata = &mut document.metadata;
        metadata.insert("analyzed_at", Utc::now().to_rfc3339());
        metadata.insert("evaluation_contract_type", contract_type.as_str());
        metadata.insert("evaluation_good", summary.good.to_string());
        metadata.insert("evaluation_warning", summary.warning.to_string());
        metadata.insert("evaluation_critical", summary.critical.to_string());
        document.file = Some(file);

        info!(
            "Review of {} complete: {} good, {} warning, {} critical",
            document.id, summary.good, summary.warning, summary.critical
        );

        let registry = session.registry_mut();
        registry.add_document(document.clone());
        registry.set_current_document(Some(document.clone()));

        self.source_document_id = Some(document.id.clone());
        Ok(document)
    }

    fn reviewed_document(
        &self,
        session: &Session,
        file: &FileAttachment,
        contract_type: ContractType,
    ) -> Document {
        let registry = session.registry();
        let existing = self.source_document_id.as_deref().and_then(|id| {
            registry.get_document_by_id(id).or_else(|| {
                registry
                    .current_document()
                    .filter(|current| current.id == id)
            })
        });

        match existing {
            Some(document) => document.clone(),
            None => Document::new(
                file.file_name.clone(),
                contract_type,
                format!("[Uploaded contract: {}]", file.file_name),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, TimingConfig};
    use crate::models::EvaluationStatus;
    use crate::workflow::generate::{GenerateForm, GeneratePage};
    use std::fs;
    use tempfile::tempdir;

    fn session() -> Session {
        let mut config = Config::default_config();
        config.timing = TimingConfig::instant();
        Session::new(config)
    }

    async fn generated(session: &mut Session, template: &str) -> Document {
        let form = GenerateForm {
            template_type: template.to_string(),
            enterprise_name: "Acme".to_string(),
            client_name: "Beta".to_string(),
            effective_date: "2024-01-01".to_string(),
            contract_duration: "2".to_string(),
            notice_period: "3".to_string(),
        };
        GeneratePage::with_form(form).generate(session).await.unwrap()
    }

    #[test]
    fn test_mount_without_current_is_blank() {
        let session = session();
        let page = ReviewPage::mount(&session);
        assert!(page.selected_file().is_none());
        assert!(page.contract_type().is_none());
        assert!(!page.can_analyze());
    }

    #[tokio::test]
    async fn test_mount_prefills_from_current() {
        let mut session = session();
        let document = generated(&mut session, "nda").await;

        let page = ReviewPage::mount(&session);
        assert_eq!(page.selected_file(), document.file.as_ref());
        assert_eq!(page.contract_type(), Some(ContractType::Nda));
        assert_eq!(page.source_document_id(), Some(document.id.as_str()));
        assert!(page.can_analyze());
    }

    #[tokio::test]
    async fn test_local_selection_is_not_overwritten() {
        let mut session = session();
        generated(&mut session, "nda").await;

        let mut page = ReviewPage::default();
        let upload = FileAttachment::new("mine.txt", "text/plain", b"mine".to_vec());
        page.select_file(upload.clone());
        page.sync_from_current(&session);

        assert_eq!(page.selected_file(), Some(&upload));
        assert!(page.contract_type().is_none());
        assert!(page.source_document_id().is_none());
    }

    #[tokio::test]
    async fn test_analyze_updates_same_document() {
        let mut session = session();
        let document = generated(&mut session, "nda").await;

        let mut page = ReviewPage::mount(&session);
        let reviewed = page.analyze(&mut session).await.unwrap();

        assert_eq!(reviewed.id, document.id);
        assert_eq!(session.registry().len(), 1);
        assert_eq!(page.evaluation().len(), 3);
        assert_eq!(page.evaluation()[2].status, EvaluationStatus::Critical);

        let stored = session.registry().get_document_by_id(&document.id).unwrap();
        assert!(stored.metadata.analyzed_at.is_some());
        assert_eq!(stored.metadata.generated_at, document.metadata.generated_at);
        assert_eq!(stored.metadata.get("evaluation_critical"), Some("1"));
        assert_eq!(session.registry().current_document(), Some(stored));
    }

    #[tokio::test]
    async fn test_changing_type_uses_other_table() {
        let mut session = session();
        generated(&mut session, "nda").await;

        let mut page = ReviewPage::mount(&session);
        page.select_contract_type(ContractType::Vendor);
        page.analyze(&mut session).await.unwrap();

        assert_eq!(page.evaluation().len(), 5);
        assert_eq!(page.summary().total(), 5);
    }

    #[tokio::test]
    async fn test_analyze_requires_file_and_type() {
        let mut session = session();
        let mut page = ReviewPage::default();

        let err = page.analyze(&mut session).await.unwrap_err();
        match err {
            WorkflowError::MissingInput(fields) => {
                assert_eq!(fields, vec!["contract document", "contract type"])
            }
            other => panic!("unexpected error: {other}"),
        }

        page.select_contract_type(ContractType::Msa);
        let err = page.analyze(&mut session).await.unwrap_err();
        assert!(err.is_missing_input());
        assert!(session.registry().is_empty());
    }

    #[tokio::test]
    async fn test_uploaded_file_registers_new_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("supplier.pdf");
        fs::write(&path, b"%PDF").unwrap();

        let mut session = session();
        let mut page = ReviewPage::mount(&session);
        page.upload(&path, &session).unwrap();
        page.select_contract_type(ContractType::Vendor);

        let document = page.analyze(&mut session).await.unwrap();
        assert_eq!(session.registry().len(), 1);
        assert_eq!(document.name, "supplier.pdf");
        assert_eq!(document.contract_type, ContractType::Vendor);
        assert_eq!(session.registry().current_document(), Some(&document));
    }

    #[test]
    fn test_upload_rejects_unaccepted_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scan.png");
        fs::write(&path, b"png").unwrap();

        let session = session();
        let mut page = ReviewPage::default();
        let err = page.upload(&path, &session).unwrap_err();
        assert!(matches!(err, WorkflowError::UnsupportedFile { .. }));
        assert!(page.selected_file().is_none());
    }
}
