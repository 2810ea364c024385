//! Catalogue service - domain operations over the model catalogue

use std::sync::Arc;

use crate::domain::{
    validate_display_name, validate_version, CatalogueRepository, CatalogueValidationError,
    DomainError, ModelEntry, ModelId, PhenotypeScorer,
};

/// Request to register a new model entry
#[derive(Debug, Clone)]
pub struct RegisterModelRequest {
    pub id: String,
    pub display_name: String,
    pub version: String,
    pub supported_inputs: Vec<String>,
    pub predictable_phenotypes: Vec<String>,
    pub description: Option<String>,
}

/// Catalogue service layered on the repository, with input validation
/// and error-kind mapping. Pure library; never talks to the transport.
#[derive(Debug)]
pub struct CatalogueService {
    catalogue: Arc<dyn CatalogueRepository>,
    scorer: Arc<dyn PhenotypeScorer>,
}

impl CatalogueService {
    /// Create a new CatalogueService with the given repository and scorer
    pub fn new(catalogue: Arc<dyn CatalogueRepository>, scorer: Arc<dyn PhenotypeScorer>) -> Self {
        Self { catalogue, scorer }
    }

    /// List all registered models in insertion order
    pub async fn list_models(&self) -> Result<Vec<ModelEntry>, DomainError> {
        self.catalogue.list().await
    }

    /// List the phenotypes a model claims to predict.
    ///
    /// A model with no declared phenotypes yields an empty list, not an error.
    pub async fn list_phenotypes(&self, model_id: &str) -> Result<Vec<String>, DomainError> {
        let entry = self.get_required(model_id).await?;
        Ok(entry.predictable_phenotypes().to_vec())
    }

    /// Register a new model entry.
    ///
    /// The returned entry is exactly what was stored: required fields plus
    /// whatever optional fields the caller supplied.
    pub async fn register(&self, request: RegisterModelRequest) -> Result<ModelEntry, DomainError> {
        let model_id = self.parse_model_id(&request.id)?;

        validate_display_name(&request.display_name)
            .map_err(|e| self.validation_error_to_domain(e))?;
        validate_version(&request.version).map_err(|e| self.validation_error_to_domain(e))?;

        let mut entry = ModelEntry::new(
            model_id,
            request.display_name,
            request.version,
            request.supported_inputs,
            request.predictable_phenotypes,
        );

        if let Some(description) = request.description {
            entry = entry.with_description(description);
        }

        self.catalogue.insert(entry).await
    }

    /// Remove a model entry, returning it so callers can confirm what was deleted
    pub async fn unregister(&self, model_id: &str) -> Result<ModelEntry, DomainError> {
        self.catalogue.remove(model_id).await
    }

    /// Produce a mocked phenotype prediction score for a model.
    ///
    /// Empty genotype input is rejected before the model lookup, so a
    /// request with an unknown id and no input reports the input error.
    /// The score ignores the genotype values themselves.
    pub async fn predict(
        &self,
        model_id: &str,
        genotype_data: &[String],
    ) -> Result<f64, DomainError> {
        if genotype_data.is_empty() {
            return Err(DomainError::validation(
                "Genotype data must not be empty for prediction",
            ));
        }

        self.get_required(model_id).await?;

        Ok(self.scorer.score())
    }

    /// Get an entry by ID, returning an error if not found
    async fn get_required(&self, model_id: &str) -> Result<ModelEntry, DomainError> {
        self.catalogue
            .find(model_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Model '{}' not found", model_id)))
    }

    /// Parse and validate a model ID string
    fn parse_model_id(&self, id: &str) -> Result<ModelId, DomainError> {
        ModelId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))
    }

    /// Convert CatalogueValidationError to DomainError
    fn validation_error_to_domain(&self, error: CatalogueValidationError) -> DomainError {
        DomainError::validation(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_models;
    use crate::domain::model::MockCatalogue;
    use crate::domain::prediction::mock::FixedScorer;
    use crate::domain::UniformScorer;

    fn create_service(catalogue: MockCatalogue) -> CatalogueService {
        CatalogueService::new(Arc::new(catalogue), Arc::new(FixedScorer(0.5)))
    }

    fn seeded_service() -> CatalogueService {
        let catalogue = default_models()
            .into_iter()
            .fold(MockCatalogue::new(), |c, e| c.with_entry(e));
        create_service(catalogue)
    }

    fn register_request(id: &str) -> RegisterModelRequest {
        RegisterModelRequest {
            id: id.to_string(),
            display_name: format!("Model {}", id),
            version: "1.0".to_string(),
            supported_inputs: vec!["genotype_variants".to_string()],
            predictable_phenotypes: vec!["diabetes_risk".to_string()],
            description: None,
        }
    }

    #[tokio::test]
    async fn test_list_models_seeded() {
        let service = seeded_service();

        let models = service.list_models().await.unwrap();
        let ids: Vec<&str> = models.iter().map(|m| m.id().as_str()).collect();
        assert_eq!(
            ids,
            [
                "phenotype_classifier_v1",
                "phenotype_transformer_beta",
                "phenotype_gnn_experimental"
            ]
        );
    }

    #[tokio::test]
    async fn test_list_phenotypes_builtin_classifier() {
        let service = seeded_service();

        let phenotypes = service
            .list_phenotypes("phenotype_classifier_v1")
            .await
            .unwrap();
        assert_eq!(
            phenotypes,
            [
                "diabetes_risk",
                "cardiovascular_event_probability",
                "metabolic_syndrome_indicator"
            ]
        );
    }

    #[tokio::test]
    async fn test_list_phenotypes_unknown_model() {
        let service = seeded_service();

        let result = service.list_phenotypes("unknown_id").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_phenotypes_empty_is_not_an_error() {
        let service = create_service(MockCatalogue::new());
        let mut request = register_request("m1");
        request.predictable_phenotypes = vec![];
        service.register(request).await.unwrap();

        let phenotypes = service.list_phenotypes("m1").await.unwrap();
        assert!(phenotypes.is_empty());
    }

    #[tokio::test]
    async fn test_register_round_trip() {
        let service = create_service(MockCatalogue::new());

        let mut request = register_request("m1");
        request.description = Some("A test model".to_string());
        let entry = service.register(request).await.unwrap();

        assert_eq!(entry.id().as_str(), "m1");
        assert_eq!(entry.display_name(), "Model m1");
        assert_eq!(entry.version(), "1.0");
        assert_eq!(entry.description(), Some("A test model"));

        let listed = service.list_models().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], entry);
    }

    #[tokio::test]
    async fn test_register_with_empty_sequences() {
        let service = create_service(MockCatalogue::new());

        let request = RegisterModelRequest {
            id: "m1".to_string(),
            display_name: "M1".to_string(),
            version: "1.0".to_string(),
            supported_inputs: vec![],
            predictable_phenotypes: vec![],
            description: None,
        };

        let entry = service.register(request).await.unwrap();
        assert!(entry.supported_inputs().is_empty());
        assert!(entry.predictable_phenotypes().is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_id() {
        let service = create_service(MockCatalogue::new());

        service.register(register_request("m1")).await.unwrap();
        let result = service.register(register_request("m1")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(service.list_models().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_invalid_id() {
        let service = create_service(MockCatalogue::new());

        let result = service.register(register_request("not a valid id")).await;
        assert!(matches!(result, Err(DomainError::InvalidId { .. })));
    }

    #[tokio::test]
    async fn test_register_empty_display_name() {
        let service = create_service(MockCatalogue::new());

        let mut request = register_request("m1");
        request.display_name = "  ".to_string();
        let result = service.register(request).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_register_empty_version() {
        let service = create_service(MockCatalogue::new());

        let mut request = register_request("m1");
        request.version = String::new();
        let result = service.register(request).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_unregister_returns_stored_entry() {
        let service = create_service(MockCatalogue::new());
        let created = service.register(register_request("m1")).await.unwrap();

        let removed = service.unregister("m1").await.unwrap();
        assert_eq!(removed, created);

        assert!(service.list_models().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unregister_not_found() {
        let service = create_service(MockCatalogue::new());

        let result = service.unregister("missing").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_register_again_after_unregister() {
        let service = create_service(MockCatalogue::new());

        service.register(register_request("m1")).await.unwrap();
        service.unregister("m1").await.unwrap();
        let entry = service.register(register_request("m1")).await.unwrap();

        assert_eq!(entry.id().as_str(), "m1");
    }

    #[tokio::test]
    async fn test_predict_returns_scorer_value() {
        let service = seeded_service();

        let score = service
            .predict(
                "phenotype_classifier_v1",
                &["rs123:AA".to_string(), "rs456:AG".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(score, 0.5);
    }

    #[tokio::test]
    async fn test_predict_score_in_range_with_uniform_scorer() {
        let catalogue = default_models()
            .into_iter()
            .fold(MockCatalogue::new(), |c, e| c.with_entry(e));
        let service = CatalogueService::new(Arc::new(catalogue), Arc::new(UniformScorer));

        for _ in 0..100 {
            let score = service
                .predict("phenotype_transformer_beta", &["GENE1=2.3".to_string()])
                .await
                .unwrap();
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[tokio::test]
    async fn test_predict_unknown_model() {
        let service = seeded_service();

        let result = service.predict("unknown_id", &["rs123:AA".to_string()]).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_predict_empty_input() {
        let service = seeded_service();

        let result = service.predict("phenotype_classifier_v1", &[]).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_predict_empty_input_checked_before_model_existence() {
        let service = seeded_service();

        // Both conditions hold; the input error wins.
        let result = service.predict("unknown_id", &[]).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let service = create_service(MockCatalogue::new().with_error("store unavailable"));

        let result = service.list_models().await;
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
