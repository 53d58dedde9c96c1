// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod change;
pub mod contract_type;
pub mod document;
pub mod evaluation;
pub mod terms;

pub use change::{Change, ChangeKind, ChangeStatus};
pub use contract_type::ContractType;
pub use document::{Document, DocumentMetadata, FileAttachment};
pub use evaluation::{EvaluationItem, EvaluationStatus, EvaluationSummary};
pub use terms::ContractTerms;
