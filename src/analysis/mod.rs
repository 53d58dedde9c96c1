// file: src/analysis/mod.rs
// description: evaluation and comparison collaborators injected into the session
// reference: internal module structure

pub mod comparison;
pub mod evaluation;

use crate::models::{Change, ContractType, EvaluationItem, FileAttachment};

pub use comparison::StaticComparator;
pub use evaluation::StaticEvaluator;

/// Produces the review checklist for an uploaded contract.
pub trait ContractEvaluator: Send + Sync {
    fn evaluate(&self, contract_type: ContractType, file: &FileAttachment) -> Vec<EvaluationItem>;
}

/// Produces the list of changes between two versions of a contract.
pub trait ContractComparator: Send + Sync {
    fn compare(&self, original: &FileAttachment, revised: &FileAttachment) -> Vec<Change>;
}
