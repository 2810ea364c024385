//! Model entry entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_model_id, CatalogueValidationError};

/// Model identifier - alphanumeric plus underscores and hyphens, max 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Create a new ModelId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, CatalogueValidationError> {
        let id = id.into();
        validate_model_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModelId {
    type Error = CatalogueValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered phenotype-prediction model entry.
///
/// Describes model metadata only; weights and inference live elsewhere.
/// An entry stores exactly what the caller supplied at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Unique identifier, assigned by the caller at registration
    id: ModelId,

    /// Human-readable label
    display_name: String,

    /// Free-form version string
    version: String,

    /// Input-type tags the model accepts, in declared order
    supported_inputs: Vec<String>,

    /// Phenotype identifiers the model claims to predict, in declared order
    predictable_phenotypes: Vec<String>,

    /// Optional free-form text
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ModelEntry {
    /// Create a new ModelEntry with required fields
    pub fn new(
        id: ModelId,
        display_name: impl Into<String>,
        version: impl Into<String>,
        supported_inputs: Vec<String>,
        predictable_phenotypes: Vec<String>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            version: version.into(),
            supported_inputs,
            predictable_phenotypes,
            description: None,
        }
    }

    /// Builder-style method to set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // Getters

    pub fn id(&self) -> &ModelId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn supported_inputs(&self) -> &[String] {
        &self.supported_inputs
    }

    pub fn predictable_phenotypes(&self) -> &[String] {
        &self.predictable_phenotypes
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_valid() {
        let id = ModelId::new("phenotype_classifier_v1").unwrap();
        assert_eq!(id.as_str(), "phenotype_classifier_v1");
    }

    #[test]
    fn test_model_id_invalid_chars() {
        let result = ModelId::new("my model!");
        assert!(result.is_err());
    }

    #[test]
    fn test_model_id_too_long() {
        let long_id = "a".repeat(65);
        let result = ModelId::new(long_id);
        assert!(result.is_err());
    }

    #[test]
    fn test_model_id_empty() {
        let result = ModelId::new("");
        assert!(result.is_err());
    }

    #[test]
    fn test_model_entry_creation() {
        let id = ModelId::new("phenotype_classifier_v1").unwrap();
        let entry = ModelEntry::new(
            id.clone(),
            "Phenotype Classifier",
            "1.0.0",
            vec!["genotype_variants".to_string()],
            vec!["diabetes_risk".to_string()],
        )
        .with_description("Logistic regression model trained on genotype features.");

        assert_eq!(entry.id().as_str(), "phenotype_classifier_v1");
        assert_eq!(entry.display_name(), "Phenotype Classifier");
        assert_eq!(entry.version(), "1.0.0");
        assert_eq!(entry.supported_inputs(), ["genotype_variants"]);
        assert_eq!(entry.predictable_phenotypes(), ["diabetes_risk"]);
        assert_eq!(
            entry.description(),
            Some("Logistic regression model trained on genotype features.")
        );
    }

    #[test]
    fn test_model_entry_empty_sequences_allowed() {
        let id = ModelId::new("m1").unwrap();
        let entry = ModelEntry::new(id, "M1", "1.0", vec![], vec![]);

        assert!(entry.supported_inputs().is_empty());
        assert!(entry.predictable_phenotypes().is_empty());
        assert!(entry.description().is_none());
    }

    #[test]
    fn test_model_entry_serialization_omits_missing_description() {
        let id = ModelId::new("m1").unwrap();
        let entry = ModelEntry::new(id, "M1", "1.0", vec![], vec![]);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"id\":\"m1\""));
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_model_entry_deserialization_rejects_bad_id() {
        let json = r#"{
            "id": "bad id!",
            "display_name": "M1",
            "version": "1.0",
            "supported_inputs": [],
            "predictable_phenotypes": []
        }"#;

        let result: Result<ModelEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
