use serde::{Deserialize, Serialize};

/// A recipe as produced by the response parser.
///
/// Ingredients and instructions are kept as the model wrote them, one entry per
/// line, markers included (`- 2 eggs`, `1. Whisk`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Recipe {
            title: title.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
        }
    }

    /// Render the recipe with its section headers for display.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Title: {}\n", self.title));
        output.push_str("Ingredients:\n");
        if !self.ingredients.is_empty() {
            output.push_str(&self.ingredients);
            output.push('\n');
        }
        output.push_str("Instructions:\n");
        if !self.instructions.is_empty() {
            output.push_str(&self.instructions);
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() {
        let recipe = Recipe::new("Pancakes", "- Flour\n- Milk", "1. Mix\n2. Cook");
        assert_eq!(
            recipe.to_text(),
            "Title: Pancakes\nIngredients:\n- Flour\n- Milk\nInstructions:\n1. Mix\n2. Cook\n"
        );
    }

    #[test]
    fn test_to_text_empty_sections() {
        let recipe = Recipe::new("Toast", "", "");
        assert_eq!(recipe.to_text(), "Title: Toast\nIngredients:\nInstructions:\n");
    }

    #[test]
    fn test_serialized_field_names() {
        let recipe = Recipe::new("Soup", "- Water", "1. Boil");
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["title"], "Soup");
        assert_eq!(json["ingredients"], "- Water");
        assert_eq!(json["instructions"], "1. Boil");
    }
}
