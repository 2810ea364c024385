//! Domain layer - Core business logic and entities

pub mod error;
pub mod model;
pub mod prediction;

pub use error::DomainError;
pub use model::{
    validate_display_name, validate_model_id, validate_version, CatalogueRepository,
    CatalogueValidationError, InMemoryCatalogue, ModelEntry, ModelId,
};
pub use prediction::{PhenotypeScorer, UniformScorer};
