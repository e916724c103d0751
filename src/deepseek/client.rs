//! HTTP client for the DeepSeek Chat Completions endpoint.

use futures::StreamExt;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::NewtsConfig;

use super::limiter::RateLimiter;
use super::sse::SseDecoder;
use super::types::{ChatOptions, ChatResponse, Message, StreamChunk};

#[derive(Debug, thiserror::Error)]
pub enum DeepSeekError {
    /// Endpoint returned a non-success status; body text preserved verbatim.
    #[error("DeepSeek API error {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Transport-level failure (connect, timeout, body read).
    #[error("DeepSeek request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Well-formed response with no usable message content.
    #[error("no content in DeepSeek response")]
    MissingContent,
}

/// Chat-completions client. Construct once and share by reference; all state
/// is the fixed configuration plus the rate limiter.
///
/// A single failed attempt surfaces immediately: no retries, no backoff.
pub struct DeepSeekClient {
    http: HttpClient,
    api_key: String,
    base_url: String,
    model: String,
    request_timeout: Duration,
    limiter: RateLimiter,
}

impl DeepSeekClient {
    pub fn new(config: &NewtsConfig) -> Self {
        if config.deepseek_api_key.is_empty() {
            warn!("DEEPSEEK_API_KEY not configured; analysis calls will fail upstream");
        }

        // Streaming responses stay open for the whole generation, so only the
        // connect phase gets a deadline here. Non-streaming calls add a full
        // per-request timeout below.
        let http = HttpClient::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            http,
            api_key: config.deepseek_api_key.clone(),
            base_url: config.deepseek_base_url.trim_end_matches('/').to_string(),
            model: config.deepseek_model.clone(),
            request_timeout: config.request_timeout(),
            limiter: RateLimiter::new(config.rate_limit_delay()),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn model_for(&self, options: &ChatOptions) -> String {
        options.model.clone().unwrap_or_else(|| self.model.clone())
    }

    /// Non-streaming chat completion.
    pub async fn chat(
        &self,
        messages: &[Message],
        options: &ChatOptions,
    ) -> Result<ChatResponse, DeepSeekError> {
        let model = self.model_for(options);
        let body = ChatCompletionRequest {
            model: &model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            stream: false,
        };

        debug!(model = %model, messages = messages.len(), "DeepSeek chat request");

        let response = self
            .http
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.request_timeout)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(failed to read body: {})", e));
            return Err(DeepSeekError::Api { status, body });
        }

        let parsed = response.json::<ChatResponse>().await?;
        self.limiter.throttle().await;
        Ok(parsed)
    }

    /// Streaming chat completion.
    ///
    /// Returns a finite, non-restartable sequence of content fragments. The
    /// channel closes when the `[DONE]` sentinel arrives or the transport
    /// stream ends; malformed frames are logged and skipped, never fatal.
    pub async fn chat_stream(
        &self,
        messages: &[Message],
        options: &ChatOptions,
    ) -> Result<mpsc::Receiver<String>, DeepSeekError> {
        let model = self.model_for(options);
        let body = ChatCompletionRequest {
            model: &model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            stream: true,
        };

        debug!(model = %model, messages = messages.len(), "DeepSeek stream request");

        let response = self
            .http
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(failed to read body: {})", e));
            return Err(DeepSeekError::Api { status, body });
        }

        let (tx, rx) = mpsc::channel(64);
        let limiter = self.limiter.clone();

        tokio::spawn(async move {
            let mut stream = response.bytes_stream();
            let mut decoder = SseDecoder::new();

            'read: while let Some(chunk) = stream.next().await {
                let chunk = match chunk {
                    Ok(c) => c,
                    Err(e) => {
                        warn!("stream transport error: {}", e);
                        break;
                    }
                };

                for event in decoder.push(&chunk) {
                    if event.is_done() {
                        break 'read;
                    }
                    let chunk: StreamChunk = match event.decode() {
                        Ok(c) => c,
                        Err(e) => {
                            warn!("skipping malformed stream chunk: {}", e);
                            continue;
                        }
                    };
                    let content = chunk
                        .choices
                        .into_iter()
                        .next()
                        .and_then(|c| c.delta.content)
                        .filter(|c| !c.is_empty());
                    if let Some(content) = content {
                        if tx.send(content).await.is_err() {
                            // Receiver gone; the stream is non-restartable.
                            break 'read;
                        }
                    }
                }
            }

            limiter.throttle().await;
            // tx drops here, closing the channel.
        });

        Ok(rx)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}
