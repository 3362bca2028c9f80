//! Streaming chat client for the OpenAI chat completions API.

use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::config::AssistantConfig;
use crate::prompt::SYSTEM_PROMPT;
use crate::{AssistantError, ChatTurn};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Buffered channel size for streamed text deltas.
const STREAM_BUFFER: usize = 64;

/// Client for streaming chat completions.
pub struct AssistantClient {
    http: reqwest::Client,
    config: AssistantConfig,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    stream: bool,
    messages: Vec<ChatTurn>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Deserialize, Default)]
struct StreamDelta {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

impl AssistantClient {
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Start a streamed completion over the conversation so far.
    ///
    /// The system prompt is prepended here; callers pass only the user
    /// and assistant turns. Returns a receiver of text deltas; the
    /// stream ends when the sender side is dropped.
    pub async fn stream_chat(
        &self,
        turns: Vec<ChatTurn>,
    ) -> Result<mpsc::Receiver<String>, AssistantError> {
        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages.push(ChatTurn::system(SYSTEM_PROMPT));
        messages.extend(turns);

        let request = CompletionRequest {
            model: &self.config.model,
            stream: true,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        let mut body = response.bytes_stream();

        tokio::spawn(async move {
            // SSE frames can split mid-line across chunks; buffer until
            // a newline before parsing.
            let mut buffer = String::new();
            while let Some(chunk) = body.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        tracing::warn!(error = %e, "assistant stream aborted");
                        return;
                    }
                };
                buffer.push_str(&String::from_utf8_lossy(&chunk));

                while let Some(newline) = buffer.find('\n') {
                    let line = buffer[..newline].trim().to_string();
                    buffer.drain(..=newline);

                    let Some(data) = line.strip_prefix("data:") else {
                        continue;
                    };
                    let data = data.trim();
                    if data == "[DONE]" {
                        return;
                    }
                    if let Some(delta) = parse_delta(data) {
                        if tx.send(delta).await.is_err() {
                            // Receiver gone; client disconnected.
                            return;
                        }
                    }
                }
            }
        });

        Ok(rx)
    }
}

fn parse_delta(data: &str) -> Option<String> {
    let chunk: StreamChunk = serde_json::from_str(data).ok()?;
    chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delta_extracts_content() {
        let data = r#"{"choices":[{"delta":{"content":"Hei"}}]}"#;
        assert_eq!(parse_delta(data).as_deref(), Some("Hei"));
    }

    #[test]
    fn test_parse_delta_skips_role_frames() {
        // The first frame usually carries only the role.
        let data = r#"{"choices":[{"delta":{"role":"assistant"}}]}"#;
        assert_eq!(parse_delta(data), None);
    }

    #[test]
    fn test_parse_delta_skips_empty_and_garbage() {
        assert_eq!(parse_delta(r#"{"choices":[]}"#), None);
        assert_eq!(parse_delta("not json"), None);
        assert_eq!(parse_delta(r#"{"choices":[{"delta":{"content":""}}]}"#), None);
    }
}
