use std::sync::Arc;

use crate::analysis::service::Analyzer;
use crate::config::{AnalysisMode, Config};
use crate::llm_client::GeminiClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Kept alongside the analyzer so a request can swap in its own API key.
    pub llm: GeminiClient,
    pub analyzer: Analyzer,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, llm: GeminiClient) -> Self {
        let analyzer = Analyzer::new(Arc::new(llm.clone()), config.fallback_on_error);
        Self {
            llm,
            analyzer,
            config,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.config.mode == AnalysisMode::Demo
    }

    /// Analyzer for one request, authenticated with the caller's key when given.
    pub fn analyzer_for(&self, api_key: Option<&str>) -> Analyzer {
        match api_key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => Analyzer::new(
                Arc::new(self.llm.with_api_key(key)),
                self.config.fallback_on_error,
            ),
            None => self.analyzer.clone(),
        }
    }
}
