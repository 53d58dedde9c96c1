// file: src/workflow/mod.rs
// description: page controllers for the generate, review and compare flows
// reference: internal module structure

pub mod compare;
pub mod generate;
pub mod landing;
pub mod review;

pub use compare::{ComparePage, Slot};
pub use generate::{GenerateForm, GeneratePage};
pub use review::ReviewPage;
