use mockito::{Matcher, Server};
use recipe_finder::{find_recipes_with_config, FinderError, Provider, RecipeFinder};
use std::time::Duration;

fn openai_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{
            "message": { "role": "assistant", "content": content }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_builder_openai_to_recipes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Regex(
            "Give me a list of recipes for something with lentils".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(openai_body(
            "Title: Lentil Soup\nIngredients:\n- Lentils\n- Carrots\nInstructions:\n1. Simmer\n\nTitle: Dal\nIngredients:\n- Red lentils\nInstructions:\n1. Boil\n2. Temper spices",
        ))
        .create_async()
        .await;

    let recipes = RecipeFinder::builder()
        .query("something with lentils")
        .provider(Provider::OpenAI)
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .await
        .unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "Lentil Soup");
    assert_eq!(recipes[0].ingredients, "- Lentils\n- Carrots");
    assert_eq!(recipes[1].title, "Dal");
    assert_eq!(recipes[1].instructions, "1. Boil\n2. Temper spices");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_builder_anthropic_to_recipes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "claude-3-5-haiku-latest"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "content": [{ "type": "text", "text": "Title: Tacos\n- Tortillas\n1. Warm" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let recipes = RecipeFinder::builder()
        .query("tacos")
        .provider(Provider::Anthropic)
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .await
        .unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Tacos");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_model_override_is_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "gpt-4o",
            "max_tokens": 5000
        })))
        .with_status(200)
        .with_body(openai_body("Title: Ramen\n- Noodles\n1. Boil"))
        .create_async()
        .await;

    let recipes = find_recipes_with_config(
        "ramen",
        Some("openai"),
        Some("test-key".to_string()),
        Some("gpt-4o".to_string()),
        Some(server.url()),
        Some(Duration::from_secs(5)),
    )
    .await
    .unwrap();

    assert_eq!(recipes[0].title, "Ramen");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_response_without_recipes_is_empty_not_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(openai_body("I'm sorry, I can't help with that."))
        .create_async()
        .await;

    let recipes = RecipeFinder::builder()
        .query("rocks")
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .await
        .unwrap();

    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let result = RecipeFinder::builder()
        .query("pizza")
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .await;

    match result {
        Err(FinderError::ProviderError(message)) => assert!(message.contains("500")),
        other => panic!("expected provider error, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_blank_query_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = RecipeFinder::builder()
        .query(" \t ")
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .await;

    assert!(matches!(result, Err(FinderError::EmptyQuery)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_provider_name() {
    let result = find_recipes_with_config(
        "soup",
        Some("ollama"),
        Some("test-key".to_string()),
        None,
        None,
        None,
    )
    .await;

    match result {
        Err(FinderError::ProviderError(message)) => {
            assert!(message.contains("Unknown provider"))
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}
