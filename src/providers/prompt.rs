/// The system prompt sent with every recipe query.
///
/// Asks for plain-text recipes in the `Title:` / `Ingredients:` /
/// `Instructions:` layout understood by [`crate::parser::parse_response`].
/// Loaded from `prompt.txt` at compile time.
pub const RECIPE_FINDER_PROMPT: &str = include_str!("prompt.txt");

/// Build the user message for a query. The query is embedded verbatim.
pub fn build_user_prompt(query: &str) -> String {
    format!("Give me a list of recipes for {query}")
}
