//! BRAI Phenotype Prediction API
//!
//! Catalogue service for phenotype-prediction model metadata:
//! - enumerate registered models and the phenotypes they claim to predict
//! - register and remove model entries
//! - request a (currently mocked) prediction score for genotype input
//!
//! The catalogue is served from memory and seeded with example entries to
//! support early integration of the inference workflow.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{InMemoryCatalogue, ModelEntry, ModelId, UniformScorer};
use infrastructure::services::CatalogueService;

/// Create the application state with the seeded catalogue
pub fn create_app_state() -> AppState {
    let catalogue = Arc::new(InMemoryCatalogue::with_entries(default_models()));
    let service = Arc::new(CatalogueService::new(catalogue, Arc::new(UniformScorer)));

    AppState::new(service)
}

/// Built-in catalogue entries, served while the persistent model registry
/// is under development
pub fn default_models() -> Vec<ModelEntry> {
    vec![
        ModelEntry::new(
            ModelId::new("phenotype_classifier_v1").unwrap(),
            "Phenotype Classifier",
            "1.0.0",
            vec![
                "genotype_variants".to_string(),
                "patient_metadata".to_string(),
            ],
            vec![
                "diabetes_risk".to_string(),
                "cardiovascular_event_probability".to_string(),
                "metabolic_syndrome_indicator".to_string(),
            ],
        )
        .with_description("Logistic regression model trained on genotype features."),
        ModelEntry::new(
            ModelId::new("phenotype_transformer_beta").unwrap(),
            "Phenotype Transformer",
            "0.9.2-beta",
            vec![
                "gene_expression".to_string(),
                "clinical_notes".to_string(),
            ],
            vec![
                "disease_progression_stage".to_string(),
                "treatment_response_category".to_string(),
                "rare_disorder_likelihood".to_string(),
            ],
        )
        .with_description("Transformer network for phenotype sequence prediction."),
        ModelEntry::new(
            ModelId::new("phenotype_gnn_experimental").unwrap(),
            "Phenotype Graph Network",
            "0.2.1",
            vec![
                "protein_interactions".to_string(),
                "genomic_variants".to_string(),
            ],
            vec![
                "tumor_invasiveness_score".to_string(),
                "immune_response_profile".to_string(),
            ],
        )
        .with_description("Graph neural network leveraging protein interaction graphs."),
    ]
}
