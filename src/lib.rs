pub mod config;
pub mod error;
pub mod finder;
pub mod model;
pub mod parser;
pub mod providers;
pub mod store;

pub use error::FinderError;
pub use finder::{Provider, RecipeFinder, RecipeFinderBuilder};
pub use model::Recipe;
pub use parser::parse_response;
pub use store::{FavoriteChange, Favorites, JsonFileStore, KeyValueStore, MemoryStore};

use std::time::Duration;

use log::{debug, info};

use crate::config::AiConfig;
use crate::providers::{FallbackProvider, LlmProvider, ProviderFactory};

/// Search recipes for a craving using the configured provider chain.
pub async fn find_recipes(query: &str) -> Result<Vec<Recipe>, FinderError> {
    find_recipes_with_provider(query, None).await
}

/// Search recipes with a specific provider from configuration.
///
/// With `provider_name` set to `None` the fallback chain (or the default
/// provider when fallback is disabled) is used.
pub async fn find_recipes_with_provider(
    query: &str,
    provider_name: Option<&str>,
) -> Result<Vec<Recipe>, FinderError> {
    let query = validate_query(query)?;
    let config = AiConfig::load()?;
    find_recipes_in(&config, query, provider_name).await
}

/// Search recipes with some provider settings given explicitly.
///
/// Configuration is still loaded; only the settings passed as `Some` replace
/// the configured ones. The API key falls back to the provider's environment
/// variable when neither the caller nor the configuration supplies one.
pub async fn find_recipes_with_config(
    query: &str,
    provider_name: Option<&str>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
) -> Result<Vec<Recipe>, FinderError> {
    let query = validate_query(query)?;
    let config = AiConfig::load()?;
    let provider_name = provider_name.unwrap_or(&config.default_provider);

    let provider_config = config.provider_with_overrides(provider_name, api_key, model, base_url);
    let timeout = timeout.unwrap_or_else(|| config.request_timeout());
    let provider = ProviderFactory::create(provider_name, &provider_config, timeout)
        .map_err(|e| FinderError::ProviderError(e.to_string()))?;

    search(provider.as_ref(), query).await
}

/// Search with an already loaded configuration.
pub(crate) async fn find_recipes_in(
    config: &AiConfig,
    query: &str,
    provider_name: Option<&str>,
) -> Result<Vec<Recipe>, FinderError> {
    let query = validate_query(query)?;

    let provider: Box<dyn LlmProvider> = match provider_name {
        Some(name) => ProviderFactory::from_config(name, config)
            .map_err(|e| FinderError::ProviderError(e.to_string()))?,
        None => Box::new(
            FallbackProvider::new(config)
                .map_err(|e| FinderError::ProviderError(e.to_string()))?,
        ),
    };

    search(provider.as_ref(), query).await
}

fn validate_query(query: &str) -> Result<&str, FinderError> {
    if query.trim().is_empty() {
        return Err(FinderError::EmptyQuery);
    }
    Ok(query)
}

async fn search(provider: &dyn LlmProvider, query: &str) -> Result<Vec<Recipe>, FinderError> {
    debug!("Searching recipes for '{}' with {}", query, provider.provider_name());

    let raw = provider
        .fetch(query)
        .await
        .map_err(|e| FinderError::ProviderError(e.to_string()))?;

    let recipes = parse_response(&raw);
    if recipes.is_empty() {
        info!("No recipes found in response for '{}'", query);
    } else {
        info!("Found {} recipes for '{}'", recipes.len(), query);
    }
    Ok(recipes)
}
