// file: src/workflow/generate.rs
// description: generate page controller, template form to registered document
// reference: form validation followed by simulated generation

use crate::error::{Result, WorkflowError};
use crate::exporter::artifact;
use crate::models::{ContractTerms, ContractType, Document, DocumentMetadata, FileAttachment};
use crate::session::Session;
use crate::utils::{Validator, simulate_work};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Raw form input, kept as strings the way the fields were typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateForm {
    pub template_type: String,
    pub enterprise_name: String,
    pub client_name: String,
    pub effective_date: String,
    pub contract_duration: String,
    pub notice_period: String,
}

impl GenerateForm {
    pub const FIELDS: [&'static str; 6] = [
        "template_type",
        "enterprise_name",
        "client_name",
        "effective_date",
        "contract_duration",
        "notice_period",
    ];

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = match name {
            "template_type" => &mut self.template_type,
            "enterprise_name" => &mut self.enterprise_name,
            "client_name" => &mut self.client_name,
            "effective_date" => &mut self.effective_date,
            "contract_duration" => &mut self.contract_duration,
            "notice_period" => &mut self.notice_period,
            other => {
                return Err(WorkflowError::InvalidInput {
                    field: other.to_string(),
                    message: format!("unknown form field, expected one of {}", Self::FIELDS.join(", ")),
                });
            }
        };
        *slot = value.into();
        Ok(())
    }

    pub fn validate(&self) -> Result<ContractTerms> {
        Validator::require_fields(&[
            ("document template", self.template_type.as_str()),
            ("enterprise name", self.enterprise_name.as_str()),
            ("client name", self.client_name.as_str()),
            ("effective date", self.effective_date.as_str()),
            ("contract duration", self.contract_duration.as_str()),
            ("notice period", self.notice_period.as_str()),
        ])?;

        let contract_type: ContractType = self.template_type.parse()?;
        if !contract_type.has_template() {
            return Err(WorkflowError::InvalidInput {
                field: "document template".to_string(),
                message: format!("no generation template for {}", contract_type.label()),
            });
        }

        Validator::validate_date("effective date", &self.effective_date)?;
        let effective_date = NaiveDate::parse_from_str(self.effective_date.trim(), "%Y-%m-%d")
            .map_err(|e| WorkflowError::InvalidInput {
                field: "effective date".to_string(),
                message: e.to_string(),
            })?;

        let (min_years, max_years) = ContractTerms::DURATION_YEARS;
        let duration_years = Validator::parse_in_range(
            "contract duration",
            &self.contract_duration,
            min_years,
            max_years,
        )?;

        let (min_months, max_months) = ContractTerms::NOTICE_MONTHS;
        let notice_months =
            Validator::parse_in_range("notice period", &self.notice_period, min_months, max_months)?;

        Ok(ContractTerms {
            contract_type,
            enterprise_name: self.enterprise_name.trim().to_string(),
            client_name: self.client_name.trim().to_string(),
            effective_date,
            duration_years,
            notice_months,
        })
    }
}

#[derive(Debug, Default)]
pub struct GeneratePage {
    form: GenerateForm,
    last_generated: Option<String>,
}

impl GeneratePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: GenerateForm) -> Self {
        Self {
            form,
            last_generated: None,
        }
    }

    pub fn form(&self) -> &GenerateForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut GenerateForm {
        &mut self.form
    }

    pub fn last_generated(&self) -> Option<&str> {
        self.last_generated.as_deref()
    }

    /// Validates the form, waits out the generation delay, then registers the
    /// new document and makes it current.
    pub async fn generate(&mut self, session: &mut Session) -> Result<Document> {
        let terms = self.form.validate()?;

        simulate_work(
            "Generating Document...",
            session.config().timing.generate_delay(),
            session.show_progress(),
        )
        .await;

        let document = build_document(&terms, session);
        info!(
            "Generated {} for {} ({})",
            terms.contract_type.as_str(),
            terms.client_name,
            document.id
        );

        let registry = session.registry_mut();
        registry.add_document(document.clone());
        registry.set_current_document(Some(document.clone()));

        self.last_generated = Some(document.id.clone());
        Ok(document)
    }
}

fn build_document(terms: &ContractTerms, session: &Session) -> Document {
    let generated_at = Utc::now();
    let export = &session.config().export;

    let content = artifact::contract_text(terms);
    let file_name = artifact::contract_file_name(
        terms.contract_type,
        &terms.client_name,
        generated_at.date_naive(),
        &export.file_extension,
    );
    let file = FileAttachment::new(file_name, export.mime_type.clone(), content.clone().into_bytes());

    let mut metadata = DocumentMetadata::default();
    metadata.insert("template_type", terms.contract_type.as_str());
    metadata.insert("enterprise_name", terms.enterprise_name.clone());
    metadata.insert("client_name", terms.client_name.clone());
    metadata.insert("effective_date", terms.effective_date.format("%Y-%m-%d").to_string());
    metadata.insert("contract_duration", terms.duration_years.to_string());
    metadata.insert("notice_period", terms.notice_months.to_string());
    metadata.insert("generated_at", generated_at.to_rfc3339());

    let name = format!(
        "{} - {} ({})",
        terms.contract_type.label(),
        terms.client_name,
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    Document::new(name, terms.contract_type, content)
        .with_metadata(metadata)
        .with_file(file)
}
