//! DeepSeek chat-completions client (OpenAI-compatible API)
//!
//! Request/response and SSE streaming access to the DeepSeek endpoint, plus
//! the wire types shared by the analysis agents. The client is constructed
//! explicitly and passed to callers; there is no module-level instance.

mod client;
mod limiter;
mod sse;
mod types;

pub use client::{DeepSeekClient, DeepSeekError};
pub use limiter::RateLimiter;
pub use sse::{SseDecoder, SseEvent};
pub use types::{
    ChatOptions, ChatResponse, Choice, Message, ResponseMessage, Role, StreamChoice, StreamChunk,
    StreamDelta, Usage,
};
