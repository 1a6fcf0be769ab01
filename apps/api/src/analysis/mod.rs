// Resume analysis: prompt building, model call, response normalization, fallback.
// All LLM calls go through llm_client — no direct HTTP calls here.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod prompts;
pub mod service;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Failures of a single analysis request. None are retried.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No API key is available for the model API")]
    MissingCredential,

    #[error("No resume content provided")]
    EmptyInput,

    #[error("Model API call failed: {0}")]
    Upstream(LlmError),

    #[error("Invalid response format from the model: no JSON object found")]
    MalformedResponse,

    #[error("Invalid JSON response from the model: {source}")]
    InvalidJson {
        candidate: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model response failed validation: {0}")]
    SchemaViolation(String),
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential => AnalysisError::MissingCredential,
            other => AnalysisError::Upstream(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_maps_to_its_own_variant() {
        let err: AnalysisError = LlmError::MissingCredential.into();
        assert!(matches!(err, AnalysisError::MissingCredential));
    }

    #[test]
    fn test_other_llm_errors_map_to_upstream() {
        let err: AnalysisError = LlmError::Api {
            status: 429,
            message: "quota".to_string(),
        }
        .into();
        assert!(matches!(err, AnalysisError::Upstream(LlmError::Api { status: 429, .. })));
        assert!(err.to_string().contains("quota"));
    }
}
