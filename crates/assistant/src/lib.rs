//! LLM chat assistant integration.
//!
//! Streams chat completions from the OpenAI API and exposes them as a
//! channel of text deltas. Persistence of the conversation is the API
//! layer's job; this crate only speaks the model provider's protocol.

pub mod client;
pub mod config;
pub mod prompt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the assistant integration.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("model request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("assistant is not configured: missing {0}")]
    Unconfigured(&'static str),
}

/// One message in a chat exchange, as sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}
