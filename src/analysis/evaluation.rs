// file: src/analysis/evaluation.rs
// description: static checklist tables used to evaluate contracts by type
// reference: lookup-table strategy, swappable behind ContractEvaluator

use crate::analysis::ContractEvaluator;
use crate::models::{ContractType, EvaluationItem, EvaluationStatus, FileAttachment};
use std::collections::HashMap;
use tracing::debug;

/// Answers come from a fixed table keyed by contract type; the uploaded file
/// is never read. Types without a table use the MSA checklist.
pub struct StaticEvaluator {
    tables: HashMap<ContractType, Vec<EvaluationItem>>,
    fallback: ContractType,
}

impl StaticEvaluator {
    pub fn new() -> Self {
        let mut tables = HashMap::new();
        tables.insert(ContractType::Msa, msa_checklist());
        tables.insert(ContractType::Nda, nda_checklist());

        Self {
            tables,
            fallback: ContractType::Msa,
        }
    }

    pub fn with_table(mut self, contract_type: ContractType, items: Vec<EvaluationItem>) -> Self {
        self.tables.insert(contract_type, items);
        self
    }

    pub fn has_table(&self, contract_type: ContractType) -> bool {
        self.tables.contains_key(&contract_type)
    }
}

impl ContractEvaluator for StaticEvaluator {
    fn evaluate(&self, contract_type: ContractType, file: &FileAttachment) -> Vec<EvaluationItem> {
        debug!(
            "Evaluating {} ({} bytes) against the {} checklist",
            file.file_name, file.size, contract_type
        );

        self.tables
            .get(&contract_type)
            .or_else(|| self.tables.get(&self.fallback))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for StaticEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn msa_checklist() -> Vec<EvaluationItem> {
    vec![
        EvaluationItem::new(
            "1",
            "Are the service scope and deliverables clearly defined?",
            "Yes, the contract clearly outlines all service deliverables, timelines, and acceptance criteria in Section 3.1-3.4.",
            EvaluationStatus::Good,
        ),
        EvaluationItem::new(
            "2",
            "Is there adequate intellectual property protection?",
            "Partially addressed. While IP ownership is mentioned, work-for-hire clauses could be more comprehensive.",
            EvaluationStatus::Warning,
        ),
        EvaluationItem::new(
            "3",
            "Are liability limitations properly structured?",
            "Critical issue: Liability cap is set too high at 2x contract value. Industry standard is typically 1x annual fees.",
            EvaluationStatus::Critical,
        ),
        EvaluationItem::new(
            "4",
            "Does the contract include proper termination clauses?",
            "Yes, termination rights are well-defined with 30-day notice period and proper wind-down procedures.",
            EvaluationStatus::Good,
        ),
        EvaluationItem::new(
            "5",
            "Are payment terms and conditions favorable?",
            "Payment terms are reasonable with 30-day NET terms, but late payment penalties should be included.",
            EvaluationStatus::Warning,
        ),
    ]
}

fn nda_checklist() -> Vec<EvaluationItem> {
    vec![
        EvaluationItem::new(
            "1",
            "Is confidential information properly defined?",
            "Yes, confidential information is broadly and appropriately defined in Section 1 with proper exclusions.",
            EvaluationStatus::Good,
        ),
        EvaluationItem::new(
            "2",
            "Are the permitted uses of confidential information clear?",
            "The permitted uses are somewhat vague and could be more specific to avoid potential disputes.",
            EvaluationStatus::Warning,
        ),
        EvaluationItem::new(
            "3",
            "Is the term and duration appropriate?",
            "Critical concern: 10-year confidentiality period is excessive for this type of business relationship.",
            EvaluationStatus::Critical,
        ),
    ]
}
