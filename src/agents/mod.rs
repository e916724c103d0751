//! Analysis agents for news articles.
//!
//! Three independent agents (strategic scoring, topic classification,
//! summarization) plus the per-article pipeline that fans them out. Each
//! agent degrades independently and silently: a remote failure or malformed
//! model output becomes a fixed neutral fallback, never an error to the
//! caller.

pub mod parse;
mod prompts;
mod types;

pub use parse::AnalysisParseError;
pub use prompts::PRIMARY_TOPICS;
pub use types::{ArticleAnalysis, ArticleInput, Momentum, StrategicAnalysis, TopicClassification};

use tracing::warn;

use crate::deepseek::{ChatOptions, DeepSeekClient, DeepSeekError, Message};

/// Build the user prompt for one article. The classifier leaves out the body
/// text; the other agents include it when present.
fn article_prompt(task: &str, article: &ArticleInput, with_content: bool) -> String {
    let mut prompt = format!(
        "{} this article:\n\nTITLE: {}\n\nDESCRIPTION: {}",
        task, article.title, article.description
    );
    if with_content {
        if let Some(content) = &article.content {
            prompt.push_str("\n\nCONTENT: ");
            prompt.push_str(content);
        }
    }
    prompt
}

/// One completion round-trip, reduced to the first choice's content.
async fn completion_text(
    client: &DeepSeekClient,
    system: &str,
    user: String,
    options: ChatOptions,
) -> Result<String, DeepSeekError> {
    let messages = [Message::system(system), Message::user(user)];
    let response = client.chat(&messages, &options).await?;
    response
        .first_content()
        .map(str::to_string)
        .ok_or(DeepSeekError::MissingContent)
}

/// Strategic analyst: scores impact, novelty, and momentum.
///
/// Low temperature for consistent scoring. Any failure, remote or local,
/// yields the neutral fallback record.
pub async fn analyze_strategic_importance(
    client: &DeepSeekClient,
    article: &ArticleInput,
) -> StrategicAnalysis {
    let options = ChatOptions { temperature: 0.3, max_tokens: 500, ..Default::default() };
    let user = article_prompt("Analyze", article, true);

    let content = match completion_text(client, prompts::STRATEGIC_ANALYST, user, options).await {
        Ok(content) => content,
        Err(e) => {
            warn!("strategic analysis request failed: {}", e);
            return StrategicAnalysis::fallback();
        }
    };

    match parse::parse_strategic(&content) {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("strategic analysis output rejected: {}", e);
            StrategicAnalysis::fallback()
        }
    }
}

/// Topic classifier: assigns one primary topic from the fixed set.
pub async fn classify_topic(
    client: &DeepSeekClient,
    article: &ArticleInput,
) -> TopicClassification {
    let options = ChatOptions { temperature: 0.2, max_tokens: 100, ..Default::default() };
    let user = article_prompt("Classify", article, false);

    let content = match completion_text(client, &prompts::topic_classifier(), user, options).await {
        Ok(content) => content,
        Err(e) => {
            warn!("topic classification request failed: {}", e);
            return TopicClassification::fallback();
        }
    };

    match parse::parse_topic(&content) {
        Ok(classification) => classification,
        Err(e) => {
            warn!("topic classification output rejected: {}", e);
            TopicClassification::fallback()
        }
    }
}

/// Summarizer: 1-2 sentence plain-text summary. Length is constrained by the
/// prompt, not enforced here. Falls back to the original description.
pub async fn summarize_article(client: &DeepSeekClient, article: &ArticleInput) -> String {
    let options = ChatOptions { temperature: 0.4, max_tokens: 100, ..Default::default() };
    let user = article_prompt("Summarize", article, true);

    match completion_text(client, prompts::SUMMARIZER, user, options).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("summarization failed, echoing description: {}", e);
            article.description.clone()
        }
    }
}

/// Full per-article pipeline: the three agents run concurrently and are
/// joined before the merged record is produced. Infallible because every
/// agent already guarantees a fallback result.
pub async fn analyze_article(client: &DeepSeekClient, article: &ArticleInput) -> ArticleAnalysis {
    let (strategic, topic, summary) = tokio::join!(
        analyze_strategic_importance(client, article),
        classify_topic(client, article),
        summarize_article(client, article),
    );

    ArticleAnalysis {
        strategic,
        topic: topic.primary_topic,
        topic_confidence: topic.confidence,
        summary,
    }
}
