// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analysis;
pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod registry;
pub mod routes;
pub mod session;
pub mod utils;
pub mod workflow;

pub use analysis::{ContractComparator, ContractEvaluator, StaticComparator, StaticEvaluator};
pub use config::{Config, ExportConfig, TimingConfig, UploadConfig};
pub use error::{Result, WorkflowError};
pub use exporter::{ArtifactExporter, ExportManifest, ExportedArtifact};
pub use models::{
    Change, ChangeKind, ChangeStatus, ContractTerms, ContractType, Document, DocumentMetadata,
    EvaluationItem, EvaluationStatus, EvaluationSummary, FileAttachment,
};
pub use registry::{DocumentRegistry, RegistrySnapshot, Upsert};
pub use routes::{Page, Router};
pub use session::Session;
pub use utils::{OperationTimer, Validator};
pub use workflow::{ComparePage, GenerateForm, GeneratePage, ReviewPage, Slot};
