use serde::{Deserialize, Serialize};

use crate::comparison::ComparisonError;

/// Body returned by the API whenever a request fails.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
    pub retryable: bool,
}

impl From<&ComparisonError> for ErrorResponse {
    fn from(err: &ComparisonError) -> Self {
        let (code, retryable) = match err {
            ComparisonError::Validation(_) => ("validation", false),
            ComparisonError::InvalidRating { .. } => ("invalid_rating", false),
            ComparisonError::RoundNotFound(_) => ("round_not_found", false),
            ComparisonError::Dispatch(failure) => (failure.kind.code(), failure.kind.is_retryable()),
        };
        Self {
            success: false,
            error: err.to_string(),
            code: code.to_string(),
            retryable,
        }
    }
}
