//! Catalogue validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for model IDs
pub const MAX_MODEL_ID_LENGTH: usize = 64;

/// Regex pattern for valid model IDs (alphanumeric plus underscores and hyphens,
/// must start with an alphanumeric). The built-in catalogue ids use underscores.
static MODEL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$").unwrap());

/// Catalogue validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueValidationError {
    /// Model ID is empty
    EmptyId,
    /// Model ID exceeds maximum length
    IdTooLong { length: usize, max: usize },
    /// Model ID contains invalid characters
    InvalidIdFormat { id: String },
    /// Display name is empty or whitespace
    EmptyDisplayName,
    /// Version string is empty or whitespace
    EmptyVersion,
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Model ID cannot be empty"),
            Self::IdTooLong { length, max } => {
                write!(f, "Model ID too long: {} characters (max {})", length, max)
            }
            Self::InvalidIdFormat { id } => {
                write!(
                    f,
                    "Invalid model ID format '{}': must be alphanumeric with underscores or hyphens, starting with an alphanumeric",
                    id
                )
            }
            Self::EmptyDisplayName => write!(f, "display_name cannot be empty"),
            Self::EmptyVersion => write!(f, "version cannot be empty"),
        }
    }
}

impl std::error::Error for CatalogueValidationError {}

/// Validate a model ID
pub fn validate_model_id(id: &str) -> Result<(), CatalogueValidationError> {
    if id.is_empty() {
        return Err(CatalogueValidationError::EmptyId);
    }

    if id.len() > MAX_MODEL_ID_LENGTH {
        return Err(CatalogueValidationError::IdTooLong {
            length: id.len(),
            max: MAX_MODEL_ID_LENGTH,
        });
    }

    if !MODEL_ID_PATTERN.is_match(id) {
        return Err(CatalogueValidationError::InvalidIdFormat { id: id.to_string() });
    }

    Ok(())
}

/// Validate the display name required field
pub fn validate_display_name(display_name: &str) -> Result<(), CatalogueValidationError> {
    if display_name.trim().is_empty() {
        return Err(CatalogueValidationError::EmptyDisplayName);
    }

    Ok(())
}

/// Validate the version required field
pub fn validate_version(version: &str) -> Result<(), CatalogueValidationError> {
    if version.trim().is_empty() {
        return Err(CatalogueValidationError::EmptyVersion);
    }

    Ok(())
}
