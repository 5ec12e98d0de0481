use std::time::Duration;

use crate::config::AiConfig;
use crate::{
    find_recipes_in, find_recipes_with_config, find_recipes_with_provider, FinderError, Recipe,
};

/// LLM provider selectable from the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
    Anthropic,
}

impl Provider {
    /// Provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::Anthropic => "anthropic",
        }
    }
}

impl std::str::FromStr for Provider {
    type Err = FinderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "openai" => Ok(Provider::OpenAI),
            "anthropic" => Ok(Provider::Anthropic),
            other => Err(FinderError::BuilderError(format!(
                "Unknown provider: {}",
                other
            ))),
        }
    }
}

/// Builder for configuring and running a recipe search
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    query: Option<String>,
    provider: Option<Provider>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
}

impl RecipeFinderBuilder {
    /// Set the craving to search recipes for
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().query("something with lentils");
    /// ```
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the LLM provider
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{Provider, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder()
    ///     .query("tacos")
    ///     .provider(Provider::Anthropic);
    /// ```
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set a timeout for the model request
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the API key directly instead of relying on environment variables
    /// or config files
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the provider at a custom or proxy endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    fn has_overrides(&self) -> bool {
        self.api_key.is_some() || self.model.is_some() || self.base_url.is_some()
    }

    /// Run the search
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - No query was specified, or the query is blank
    /// - The provider cannot be created from configuration
    /// - The model request fails
    ///
    /// An answer with no recognizable recipes is not an error: the result is
    /// an empty vector.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipes = RecipeFinder::builder()
    ///     .query("a warm autumn soup")
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<Recipe>, FinderError> {
        let query = self.query.clone().ok_or_else(|| {
            FinderError::BuilderError("No query specified. Use .query()".to_string())
        })?;

        let provider_name = self.provider.map(|p| p.as_str());

        if self.has_overrides() {
            find_recipes_with_config(
                &query,
                provider_name,
                self.api_key,
                self.model,
                self.base_url,
                self.timeout,
            )
            .await
        } else if let Some(timeout) = self.timeout {
            let mut config = AiConfig::load()?;
            config.timeout = timeout.as_secs().max(1);
            find_recipes_in(&config, &query, provider_name).await
        } else {
            find_recipes_with_provider(&query, provider_name).await
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for searching recipes
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
