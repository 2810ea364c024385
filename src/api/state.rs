//! Application state for shared services

use std::sync::Arc;

use crate::domain::{DomainError, ModelEntry};
use crate::infrastructure::services::{CatalogueService, RegisterModelRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub catalogue_service: Arc<dyn CatalogueServiceTrait>,
}

impl AppState {
    pub fn new(catalogue_service: Arc<dyn CatalogueServiceTrait>) -> Self {
        Self { catalogue_service }
    }
}

/// Trait for catalogue service operations
#[async_trait::async_trait]
pub trait CatalogueServiceTrait: Send + Sync {
    async fn list_models(&self) -> Result<Vec<ModelEntry>, DomainError>;
    async fn list_phenotypes(&self, model_id: &str) -> Result<Vec<String>, DomainError>;
    async fn register(&self, request: RegisterModelRequest) -> Result<ModelEntry, DomainError>;
    async fn unregister(&self, model_id: &str) -> Result<ModelEntry, DomainError>;
    async fn predict(&self, model_id: &str, genotype_data: &[String])
        -> Result<f64, DomainError>;
}

#[async_trait::async_trait]
impl CatalogueServiceTrait for CatalogueService {
    async fn list_models(&self) -> Result<Vec<ModelEntry>, DomainError> {
        CatalogueService::list_models(self).await
    }

    async fn list_phenotypes(&self, model_id: &str) -> Result<Vec<String>, DomainError> {
        CatalogueService::list_phenotypes(self, model_id).await
    }

    async fn register(&self, request: RegisterModelRequest) -> Result<ModelEntry, DomainError> {
        CatalogueService::register(self, request).await
    }

    async fn unregister(&self, model_id: &str) -> Result<ModelEntry, DomainError> {
        CatalogueService::unregister(self, model_id).await
    }

    async fn predict(
        &self,
        model_id: &str,
        genotype_data: &[String],
    ) -> Result<f64, DomainError> {
        CatalogueService::predict(self, model_id, genotype_data).await
    }
}
