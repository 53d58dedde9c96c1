// file: src/registry/store.rs
// description: session-lifetime document registry with a single current-document pointer
// reference: https://docs.rs/tokio/latest/tokio/sync/watch

use crate::models::Document;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Outcome of [`DocumentRegistry::add_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// State published to observers after every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrySnapshot {
    pub revision: u64,
    pub documents: Vec<Document>,
    pub current: Option<Document>,
}

impl RegistrySnapshot {
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(|doc| doc.id.as_str())
    }
}

/// Owns every document created during a session.
///
/// Documents keep their first insertion position; re-inserting an existing
/// id replaces the stored value in place. The current pointer holds the
/// document value it was set with and is not refreshed by later inserts.
#[derive(Debug)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
    current: Option<Document>,
    revision: u64,
    observers: watch::Sender<RegistrySnapshot>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        let (observers, _) = watch::channel(RegistrySnapshot::default());
        Self {
            documents: Vec::new(),
            current: None,
            revision: 0,
            observers,
        }
    }

    pub fn add_document(&mut self, document: Document) -> Upsert {
        let outcome = match self.position(&document.id) {
            Some(index) => {
                debug!("Replacing document {} at position {}", document.id, index);
                self.documents[index] = document;
                Upsert::Replaced
            }
            None => {
                debug!("Registering document {}", document.id);
                self.documents.push(document);
                Upsert::Inserted
            }
        };

        self.publish();
        outcome
    }

    /// Sets or clears the hand-off pointer. A document that was never
    /// registered is accepted.
    pub fn set_current_document(&mut self, document: Option<Document>) {
        if let Some(doc) = &document
            && self.position(&doc.id).is_none()
        {
            warn!("Current document {} is not registered in this session", doc.id);
        }

        self.current = document;
        self.publish();
    }

    pub fn get_document_by_id(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn current_document(&self) -> Option<&Document> {
        self.current.as_ref()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            revision: self.revision,
            documents: self.documents.clone(),
            current: self.current.clone(),
        }
    }

    /// Receiver that observes a fresh snapshot after each mutation.
    pub fn subscribe(&self) -> watch::Receiver<RegistrySnapshot> {
        self.observers.subscribe()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id == id)
    }

    fn publish(&mut self) {
        self.revision += 1;
        let snapshot = self.snapshot();
        self.observers.send_replace(snapshot);
    }
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractType, DocumentMetadata};
    use pretty_assertions::assert_eq;

    fn doc(name: &str) -> Document {
        Document::new(name.to_string(), ContractType::Msa, "body".to_string())
    }

    fn metadata(client: &str) -> DocumentMetadata {
        let mut metadata = DocumentMetadata::default();
        metadata.insert("client_name", client);
        metadata
    }

    #[test]
    fn test_new_id_grows_registry_by_one() {
        let mut registry = DocumentRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.add_document(doc("a")), Upsert::Inserted);
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.add_document(doc("b")), Upsert::Inserted);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_same_id_replaces_fields_without_growing() {
        let mut registry = DocumentRegistry::new();
        let first = doc("first").with_id("fixed").with_metadata(metadata("Acme"));
        let second = Document::new("second".into(), ContractType::Nda, "other".into())
            .with_id("fixed")
            .with_metadata(metadata("Beta"));

        registry.add_document(first);
        assert_eq!(registry.add_document(second.clone()), Upsert::Replaced);

        assert_eq!(registry.len(), 1);
        let stored = registry.get_document_by_id("fixed").unwrap();
        assert_eq!(stored, &second);
        assert_eq!(stored.metadata.client_name.as_deref(), Some("Beta"));
    }

    #[test]
    fn test_replacement_is_full_not_merge() {
        let mut registry = DocumentRegistry::new();
        let mut with_extra = metadata("Acme");
        with_extra.insert("effective_date", "2024-01-01");
        registry.add_document(doc("a").with_id("x").with_metadata(with_extra));
        registry.add_document(doc("a").with_id("x"));

        let stored = registry.get_document_by_id("x").unwrap();
        assert_eq!(stored.metadata, DocumentMetadata::default());
    }

    #[test]
    fn test_insertion_order_preserved_across_replacement() {
        let mut registry = DocumentRegistry::new();
        registry.add_document(doc("one").with_id("1"));
        registry.add_document(doc("two").with_id("2"));
        registry.add_document(doc("three").with_id("3"));
        registry.add_document(doc("two again").with_id("2"));

        let ids: Vec<&str> = registry.documents().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(registry.documents()[1].name, "two again");
    }

    #[test]
    fn test_lookup_returns_most_recent_value() {
        let mut registry = DocumentRegistry::new();
        for name in ["v1", "v2", "v3"] {
            registry.add_document(doc(name).with_id("same"));
        }
        assert_eq!(registry.get_document_by_id("same").unwrap().name, "v3");
    }

    #[test]
    fn test_missing_id_reports_absence() {
        let mut registry = DocumentRegistry::new();
        registry.add_document(doc("a"));
        assert!(registry.get_document_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_set_then_clear_current_leaves_contents() {
        let mut registry = DocumentRegistry::new();
        let a = doc("a");
        registry.add_document(a.clone());
        registry.add_document(doc("b"));
        let before = registry.documents().to_vec();

        registry.set_current_document(Some(a.clone()));
        assert_eq!(registry.current_document(), Some(&a));

        registry.set_current_document(None);
        assert!(registry.current_document().is_none());
        assert_eq!(registry.documents(), before.as_slice());
    }

    #[test]
    fn test_unregistered_current_is_accepted() {
        let mut registry = DocumentRegistry::new();
        let stray = doc("stray");
        registry.set_current_document(Some(stray.clone()));

        assert_eq!(registry.current_document(), Some(&stray));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_current_is_not_refreshed_by_insert() {
        let mut registry = DocumentRegistry::new();
        let original = doc("original").with_id("x");
        registry.add_document(original.clone());
        registry.set_current_document(Some(original.clone()));

        registry.add_document(doc("updated").with_id("x"));
        assert_eq!(registry.current_document().unwrap().name, "original");
        assert_eq!(registry.get_document_by_id("x").unwrap().name, "updated");
    }

    #[test]
    fn test_observers_see_each_mutation() {
        let mut registry = DocumentRegistry::new();
        let mut receiver = registry.subscribe();
        assert!(!receiver.has_changed().unwrap());

        let a = doc("a");
        registry.add_document(a.clone());
        assert!(receiver.has_changed().unwrap());
        {
            let snapshot = receiver.borrow_and_update();
            assert_eq!(snapshot.revision, 1);
            assert_eq!(snapshot.documents.len(), 1);
            assert_eq!(snapshot.current_id(), None);
        }

        registry.set_current_document(Some(a.clone()));
        let snapshot = receiver.borrow_and_update().clone();
        assert_eq!(snapshot.revision, 2);
        assert_eq!(snapshot.current_id(), Some(a.id.as_str()));
        assert_eq!(registry.revision(), 2);
    }
}
