//! Analyzer — one analysis request: prompt → model → normalize, with optional fallback.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::fallback::mock_analysis;
use crate::analysis::models::{AnalysisOutcome, AnalysisResult};
use crate::analysis::normalizer::normalize_response;
use crate::analysis::prompts::build_review_prompt;
use crate::analysis::AnalysisError;
use crate::llm_client::ModelBackend;

/// Holds no per-request state, so concurrent analyses need no coordination.
#[derive(Clone)]
pub struct Analyzer {
    backend: Arc<dyn ModelBackend>,
    fallback_on_error: bool,
}

impl Analyzer {
    pub fn new(backend: Arc<dyn ModelBackend>, fallback_on_error: bool) -> Self {
        Self {
            backend,
            fallback_on_error,
        }
    }

    /// Runs the live pipeline. Every failure is returned to the caller.
    pub async fn analyze(&self, resume_text: &str) -> Result<AnalysisResult, AnalysisError> {
        if resume_text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        info!("Analyzing resume content ({} chars)", resume_text.chars().count());
        let prompt = build_review_prompt(resume_text);
        let raw = self.backend.generate(&prompt).await?;
        let analysis = normalize_response(&raw)?;
        info!("Analysis completed successfully");
        Ok(analysis)
    }

    /// Runs the live pipeline, substituting the canned analysis on failure when
    /// fallback is enabled. Empty input is always an error.
    pub async fn analyze_with_fallback(
        &self,
        resume_text: &str,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        match self.analyze(resume_text).await {
            Ok(analysis) => Ok(AnalysisOutcome::live(analysis)),
            Err(AnalysisError::EmptyInput) => Err(AnalysisError::EmptyInput),
            Err(e) if self.fallback_on_error => {
                warn!("Live analysis failed, serving fallback analysis: {e}");
                Ok(AnalysisOutcome::fallback(mock_analysis(), Some(e.to_string())))
            }
            Err(e) => Err(e),
        }
    }

    /// Canned analysis for demo/offline mode; the model is not called.
    pub fn demo_outcome() -> AnalysisOutcome {
        AnalysisOutcome::fallback(mock_analysis(), None)
    }
}
