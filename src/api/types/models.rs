//! Catalogue endpoint request/response types

use serde::{Deserialize, Serialize};

use crate::domain::ModelEntry;

/// Request to register a new model entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterModelApiRequest {
    pub id: String,
    pub display_name: String,
    pub version: String,
    pub supported_inputs: Vec<String>,
    pub predictable_phenotypes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Model entry as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntryResponse {
    pub id: String,
    pub display_name: String,
    pub version: String,
    pub supported_inputs: Vec<String>,
    pub predictable_phenotypes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&ModelEntry> for ModelEntryResponse {
    fn from(entry: &ModelEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            display_name: entry.display_name().to_string(),
            version: entry.version().to_string(),
            supported_inputs: entry.supported_inputs().to_vec(),
            predictable_phenotypes: entry.predictable_phenotypes().to_vec(),
            description: entry.description().map(str::to_string),
        }
    }
}

/// Request body for a phenotype prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionApiRequest {
    pub genotype_data: Vec<String>,
}

/// Response body for a phenotype prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub model_id: String,
    pub genotype_count: usize,
    pub prediction_score: f64,
}
