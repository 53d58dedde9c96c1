// file: src/exporter/mod.rs
// description: exported artifact synthesis and writing
// reference: internal module structure

pub mod artifact;
pub mod json;

pub use json::{ArtifactExporter, ExportManifest, ExportedArtifact};
