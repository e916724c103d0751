//! Analysis result types and their neutral fallbacks.
//!
//! Every agent guarantees a structurally valid record: when the model output
//! cannot be parsed or validated, the fixed fallback stands in so the
//! pipeline never fails outright.

use serde::{Deserialize, Serialize};

/// Article fields the agents work from. `content` is the optional full body
/// text; title and description are always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Qualitative trend label for a news topic. Closed set: anything else from
/// the model is invalid and rejects the whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Rising,
    #[default]
    Stable,
    Declining,
}

/// Output of the strategic analyst agent.
///
/// Only `strategic_impact`, `novelty_score`, and `momentum` are validated;
/// the descriptive fields default when the model omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicAnalysis {
    pub strategic_impact: f32,
    pub novelty_score: f32,
    pub momentum: Momentum,
    #[serde(default = "default_sector")]
    pub sector: String,
    #[serde(default)]
    pub why_it_matters: String,
    #[serde(default)]
    pub key_insights: Vec<String>,
    #[serde(default)]
    pub related_topics: Vec<String>,
}

fn default_sector() -> String {
    "General".to_string()
}

impl StrategicAnalysis {
    /// Neutral record substituted on any parse or validation failure.
    pub fn fallback() -> Self {
        Self {
            strategic_impact: 50.0,
            novelty_score: 50.0,
            momentum: Momentum::Stable,
            sector: default_sector(),
            why_it_matters: "Analysis unavailable".to_string(),
            key_insights: Vec::new(),
            related_topics: Vec::new(),
        }
    }
}

/// Output of the topic classifier agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicClassification {
    pub primary_topic: String,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub reasoning: String,
}

impl TopicClassification {
    pub fn fallback() -> Self {
        Self {
            primary_topic: "General".to_string(),
            confidence: 0.0,
            reasoning: "Classification unavailable".to_string(),
        }
    }
}

/// Merged per-article result produced by the pipeline. Not persisted here;
/// storage of analysis output belongs to the callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    #[serde(flatten)]
    pub strategic: StrategicAnalysis,
    pub topic: String,
    pub topic_confidence: f32,
    pub summary: String,
}
