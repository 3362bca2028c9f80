//! Assistant configuration loaded from the environment.

/// Model provider configuration.
///
/// | Variable         | Required | Default                     | Description            |
/// |------------------|----------|-----------------------------|------------------------|
/// | `OPENAI_API_KEY` | yes      | -                           | API key                |
/// | `OPENAI_MODEL`   | no       | `gpt-4-turbo-preview`       | Chat completions model |
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl AssistantConfig {
    /// Load from environment variables. Returns `None` when
    /// `OPENAI_API_KEY` is absent, which disables the chat assistant.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok()?;
        let model = std::env::var("OPENAI_MODEL")
            .unwrap_or_else(|_| "gpt-4-turbo-preview".to_string());
        Some(Self {
            api_key,
            model,
            temperature: 0.7,
            max_tokens: 1000,
        })
    }
}
