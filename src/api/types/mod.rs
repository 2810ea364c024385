//! API request/response types

pub mod error;
pub mod json;
pub mod models;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use models::{
    ModelEntryResponse, PredictionApiRequest, PredictionResponse, RegisterModelApiRequest,
};
