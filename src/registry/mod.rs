// file: src/registry/mod.rs
// description: shared document registry exports
// reference: internal module structure

pub mod store;

pub use store::{DocumentRegistry, RegistrySnapshot, Upsert};
