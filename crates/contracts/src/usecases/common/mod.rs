//! Common types and traits for all UseCases

pub mod truthy;
pub mod usecase_metadata;

// Re-exports
pub use truthy::truthy;
pub use usecase_metadata::UseCaseMetadata;
