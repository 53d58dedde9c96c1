// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;
pub mod patterns;
pub mod progress;
pub mod telemetry;
pub mod validation;

pub use progress::{LoadingIndicator, simulate_work};
pub use telemetry::OperationTimer;
pub use validation::Validator;
