mod anthropic;
mod factory;
mod fallback;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_user_prompt, RECIPE_FINDER_PROMPT};

use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Ask the model for recipes matching `query` and return its raw text answer
    async fn fetch(&self, query: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}

fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}
