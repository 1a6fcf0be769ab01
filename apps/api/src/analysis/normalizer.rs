//! Response Normalizer — turns the model's free-text reply into a validated `AnalysisResult`.
//!
//! The model is asked for bare JSON but often wraps it in prose or a ```json fence.
//! The candidate payload is the span from the first `{` to the last `}` of the reply.
//! It is parsed into an untrusted `serde_json::Value`, deserialized into
//! `AnalysisResult`, then checked for score bounds and duplicate keywords.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::analysis::models::AnalysisResult;
use crate::analysis::AnalysisError;

/// Locates the candidate JSON payload inside a raw model reply.
///
/// This takes the first `{` and the last `}`; an example object emitted in prose
/// before the real answer will be captured too and then fail to parse.
pub fn extract_candidate(raw: &str) -> Result<&str, AnalysisError> {
    let start = raw.find('{').ok_or(AnalysisError::MalformedResponse)?;
    let end = raw.rfind('}').ok_or(AnalysisError::MalformedResponse)?;
    if end <= start {
        return Err(AnalysisError::MalformedResponse);
    }
    Ok(&raw[start..=end])
}

/// Full normalization: extract, parse, validate.
pub fn normalize_response(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    let result = extract_candidate(raw).and_then(|candidate| {
        let value: Value =
            serde_json::from_str(candidate).map_err(|source| AnalysisError::InvalidJson {
                candidate: candidate.to_string(),
                source,
            })?;
        validate_analysis(&value)
    });

    match &result {
        Ok(_) => debug!("Model response normalized ({} bytes)", raw.len()),
        Err(AnalysisError::InvalidJson { candidate, source }) => warn!(
            "Error parsing JSON response: {source}; candidate payload: {candidate}; raw response: {raw}"
        ),
        Err(e) => warn!("Failed to normalize model response: {e}; raw response: {raw}"),
    }

    result
}

/// Promotes an untrusted JSON value to `AnalysisResult`.
///
/// Keyword lists are de-duplicated, keeping the first occurrence.
pub fn validate_analysis(value: &Value) -> Result<AnalysisResult, AnalysisError> {
    let mut analysis: AnalysisResult = serde_json::from_value(value.clone())
        .map_err(|e| AnalysisError::SchemaViolation(e.to_string()))?;

    let scores = &analysis.scores;
    for (name, score) in [
        ("overall", scores.overall),
        ("content", scores.content),
        ("formatting", scores.formatting),
        ("keywords", scores.keywords),
    ] {
        if score > 100 {
            return Err(AnalysisError::SchemaViolation(format!(
                "scores.{name} is {score}, outside 0-100"
            )));
        }
    }

    analysis.keywords.matched = dedup(std::mem::take(&mut analysis.keywords.matched));
    analysis.keywords.missing = dedup(std::mem::take(&mut analysis.keywords.missing));
    Ok(analysis)
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
