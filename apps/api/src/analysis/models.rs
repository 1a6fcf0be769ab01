use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Four bounded scores, each in 0..=100. The upper bound is checked by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(deserialize_with = "deserialize_score")]
    pub overall: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub content: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub formatting: u8,
    #[serde(deserialize_with = "deserialize_score")]
    pub keywords: u8,
}

/// Accepts any integral JSON number, including `72.0`.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let n = f64::deserialize(deserializer)?;
    if n.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&n) {
        return Err(de::Error::custom(format!(
            "invalid score {n}, expected an integer between 0 and 100"
        )));
    }
    Ok(n as u8)
}

/// Feedback for one resume section, e.g. "Work Experience".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFeedback {
    pub title: String,
    pub feedback: String,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Structured feedback produced for one resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub scores: Scores,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub sections: Vec<SectionFeedback>,
    pub keywords: KeywordReport,
    pub improvement_suggestions: String,
}

/// Where an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Live,
    Fallback,
}

/// An analysis plus its provenance, as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub source: AnalysisSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub analysis: AnalysisResult,
}

impl AnalysisOutcome {
    pub fn live(analysis: AnalysisResult) -> Self {
        Self::new(AnalysisSource::Live, None, analysis)
    }

    pub fn fallback(analysis: AnalysisResult, warning: Option<String>) -> Self {
        Self::new(AnalysisSource::Fallback, warning, analysis)
    }

    fn new(source: AnalysisSource, warning: Option<String>, analysis: AnalysisResult) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            source,
            warning,
            analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fallback::mock_analysis;

    #[test]
    fn test_source_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&AnalysisSource::Live).unwrap(), r#""live""#);
        assert_eq!(
            serde_json::to_string(&AnalysisSource::Fallback).unwrap(),
            r#""fallback""#
        );
    }

    #[test]
    fn test_live_outcome_omits_warning() {
        let outcome = AnalysisOutcome::live(mock_analysis());
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["source"], "live");
        assert!(value.get("warning").is_none());
        assert_eq!(value["analysis"]["scores"]["overall"], 68);
    }

    #[test]
    fn test_integral_float_score_deserializes() {
        let scores: Scores = serde_json::from_str(
            r#"{"overall": 72.0, "content": 80, "formatting": 0, "keywords": 100}"#,
        )
        .unwrap();
        assert_eq!(scores.overall, 72);
        assert_eq!(scores.formatting, 0);
    }

    #[test]
    fn test_fractional_or_negative_score_rejected() {
        for raw in [
            r#"{"overall": 72.5, "content": 80, "formatting": 70, "keywords": 60}"#,
            r#"{"overall": -1, "content": 80, "formatting": 70, "keywords": 60}"#,
        ] {
            let err = serde_json::from_str::<Scores>(raw).unwrap_err();
            assert!(err.to_string().contains("invalid score"), "{err}");
        }
    }

    #[test]
    fn test_outcomes_get_distinct_ids() {
        let a = AnalysisOutcome::fallback(mock_analysis(), Some("w".to_string()));
        let b = AnalysisOutcome::fallback(mock_analysis(), None);
        assert_ne!(a.analysis_id, b.analysis_id);
        assert_eq!(a.warning.as_deref(), Some("w"));
    }
}
