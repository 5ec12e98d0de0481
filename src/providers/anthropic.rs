use crate::config::ProviderConfig;
use crate::providers::{build_client, build_user_prompt, LlmProvider, RECIPE_FINDER_PROMPT};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider from configuration
    pub fn new(
        config: &ProviderConfig,
        timeout: Duration,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or("ANTHROPIC_API_KEY not found in config or environment")?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(AnthropicProvider {
            client: build_client(timeout)?,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    async fn fetch(&self, query: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&json!({
                "model": self.model,
                "max_tokens": self.max_tokens,
                "temperature": self.temperature,
                "system": RECIPE_FINDER_PROMPT,
                "messages": [
                    {
                        "role": "user",
                        "content": build_user_prompt(query)
                    }
                ]
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!(
                "Anthropic request failed with status: {}",
                response.status()
            )
            .into());
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["content"][0]["text"]
            .as_str()
            .ok_or("Failed to extract content from response")?
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn provider_for(server: &mockito::ServerGuard) -> AnthropicProvider {
        let mut config = ProviderConfig::with_model("claude-3-5-haiku-latest");
        config.api_key = Some("fake_api_key".to_string());
        config.base_url = Some(server.url());
        AnthropicProvider::new(&config, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "fake_api_key")
            .match_header("anthropic-version", ANTHROPIC_VERSION)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "content": [{
                        "type": "text",
                        "text": "Title: Curry\nIngredients:\n- Rice\nInstructions:\n1. Simmer"
                    }]
                }"#,
            )
            .create_async()
            .await;

        let provider = provider_for(&server);
        let result = provider.fetch("curry").await.unwrap();
        assert!(result.contains("Title: Curry"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/messages")
            .with_status(529)
            .create_async()
            .await;

        let provider = provider_for(&server);
        assert!(provider.fetch("curry").await.is_err());
    }

    #[test]
    fn test_provider_name() {
        let mut config = ProviderConfig::with_model("claude-3-5-haiku-latest");
        config.api_key = Some("key".to_string());
        let provider = AnthropicProvider::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.provider_name(), "anthropic");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }
}
