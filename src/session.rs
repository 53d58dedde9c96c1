// file: src/session.rs
// description: session context handed to every page controller
// reference: explicit dependency injection instead of ambient global state

use crate::analysis::{ContractComparator, ContractEvaluator, StaticComparator, StaticEvaluator};
use crate::config::Config;
use crate::registry::DocumentRegistry;
use std::sync::Arc;

/// Everything a page needs: the document registry for this session, the
/// analysis collaborators, and configuration. Dropping the session drops
/// every document it created.
pub struct Session {
    registry: DocumentRegistry,
    evaluator: Arc<dyn ContractEvaluator>,
    comparator: Arc<dyn ContractComparator>,
    config: Config,
    show_progress: bool,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            registry: DocumentRegistry::new(),
            evaluator: Arc::new(StaticEvaluator::new()),
            comparator: Arc::new(StaticComparator::new()),
            config,
            show_progress: false,
        }
    }

    pub fn with_evaluator(mut self, evaluator: Arc<dyn ContractEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_comparator(mut self, comparator: Arc<dyn ContractComparator>) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DocumentRegistry {
        &mut self.registry
    }

    pub fn evaluator(&self) -> &dyn ContractEvaluator {
        self.evaluator.as_ref()
    }

    pub fn comparator(&self) -> &dyn ContractComparator {
        self.comparator.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn show_progress(&self) -> bool {
        self.show_progress
    }
}
