//! Parsing and validation of model output.
//!
//! Kept separate from the agent functions so the degrade decision is an
//! explicit step: agents collapse these `Result`s to fallback records at the
//! boundary, and tests exercise the rejection paths directly.

use super::types::{StrategicAnalysis, TopicClassification};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisParseError {
    #[error("model output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f32 },
}

/// Parse strategic-analyst output. Scores must land in [0, 100] and momentum
/// must be one of the three known labels (enforced by the closed enum).
pub fn parse_strategic(content: &str) -> Result<StrategicAnalysis, AnalysisParseError> {
    let analysis: StrategicAnalysis = serde_json::from_str(content)?;

    for (field, value) in [
        ("strategic_impact", analysis.strategic_impact),
        ("novelty_score", analysis.novelty_score),
    ] {
        if !(0.0..=100.0).contains(&value) || value.is_nan() {
            return Err(AnalysisParseError::OutOfRange { field, value });
        }
    }

    Ok(analysis)
}

/// Parse classifier output. No validation beyond the JSON shape; the topic
/// list is constrained by the prompt, not checked here.
pub fn parse_topic(content: &str) -> Result<TopicClassification, AnalysisParseError> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::types::Momentum;

    #[test]
    fn accepts_well_formed_analysis() {
        let raw = r#"{
            "strategic_impact": 85,
            "novelty_score": 70.5,
            "momentum": "rising",
            "sector": "Semiconductors",
            "why_it_matters": "Supply shift.",
            "key_insights": ["a", "b"],
            "related_topics": ["chips"]
        }"#;
        let analysis = parse_strategic(raw).unwrap();
        assert_eq!(analysis.strategic_impact, 85.0);
        assert_eq!(analysis.momentum, Momentum::Rising);
        assert_eq!(analysis.key_insights.len(), 2);
    }

    #[test]
    fn missing_descriptive_fields_default() {
        let raw = r#"{"strategic_impact": 40, "novelty_score": 55, "momentum": "stable"}"#;
        let analysis = parse_strategic(raw).unwrap();
        assert_eq!(analysis.sector, "General");
        assert!(analysis.key_insights.is_empty());
    }

    #[test]
    fn unknown_momentum_rejects_record() {
        let raw = r#"{"strategic_impact": 90, "novelty_score": 90, "momentum": "exploding"}"#;
        assert!(matches!(parse_strategic(raw), Err(AnalysisParseError::Json(_))));
    }

    #[test]
    fn out_of_range_score_rejects_record() {
        let raw = r#"{"strategic_impact": 150, "novelty_score": 55, "momentum": "rising"}"#;
        let err = parse_strategic(raw).unwrap_err();
        assert!(err.to_string().contains("strategic_impact"));
    }

    #[test]
    fn non_numeric_score_rejects_record() {
        let raw = r#"{"strategic_impact": "high", "novelty_score": 55, "momentum": "rising"}"#;
        assert!(parse_strategic(raw).is_err());
    }

    #[test]
    fn prose_instead_of_json_rejects() {
        assert!(parse_strategic("This article is quite important.").is_err());
        assert!(parse_topic("General, I think").is_err());
    }

    #[test]
    fn topic_parse_is_shape_only() {
        // Not on the valid list, still accepted: prompt constrains, parse doesn't.
        let raw = r#"{"primary_topic": "Quantum Basketweaving", "confidence": 88, "reasoning": "novel"}"#;
        let classification = parse_topic(raw).unwrap();
        assert_eq!(classification.primary_topic, "Quantum Basketweaving");
        assert_eq!(classification.confidence, 88.0);
    }

    #[test]
    fn topic_confidence_defaults_when_absent() {
        let raw = r#"{"primary_topic": "Financial Markets"}"#;
        let classification = parse_topic(raw).unwrap();
        assert_eq!(classification.confidence, 0.0);
        assert!(classification.reasoning.is_empty());
    }
}
