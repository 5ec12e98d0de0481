//! Turns a model response into recipe records.
//!
//! The model is asked for a `Title:` / `Ingredients:` / `Instructions:` layout
//! but nothing guarantees it complies, so parsing is a permissive line
//! classifier: recognized lines drive a small fold, everything else is dropped.

use crate::model::Recipe;

const TITLE_MARKER: &str = "Title:";
const INGREDIENTS_MARKER: &str = "Ingredients:";
const INSTRUCTIONS_MARKER: &str = "Instructions:";
const INGREDIENT_BULLET: &str = "-";

/// A trimmed input line after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Starts a new recipe. Holds the title with the marker stripped.
    Title(&'a str),
    IngredientsHeader,
    InstructionsHeader,
    /// Full line, bullet included.
    Ingredient(&'a str),
    /// Full line, number included.
    Instruction(&'a str),
    Noise,
}

pub fn is_title(line: &str) -> bool {
    line.starts_with(TITLE_MARKER)
}

pub fn is_ingredients_header(line: &str) -> bool {
    line.starts_with(INGREDIENTS_MARKER)
}

pub fn is_instructions_header(line: &str) -> bool {
    line.starts_with(INSTRUCTIONS_MARKER)
}

pub fn is_ingredient(line: &str) -> bool {
    line.starts_with(INGREDIENT_BULLET)
}

/// One or more ASCII digits followed by a dot, e.g. `12.`
pub fn is_instruction(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}

const BYTE_ORDER_MARK: char = '\u{feff}';

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Classify a single line. Whitespace and byte order marks are trimmed first.
pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim_matches(is_blank);

    if is_title(line) {
        Line::Title(line[TITLE_MARKER.len()..].trim())
    } else if is_ingredients_header(line) {
        Line::IngredientsHeader
    } else if is_instructions_header(line) {
        Line::InstructionsHeader
    } else if is_ingredient(line) {
        Line::Ingredient(line)
    } else if is_instruction(line) {
        Line::Instruction(line)
    } else {
        Line::Noise
    }
}

#[derive(Debug, Default)]
struct Draft {
    title: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

impl Draft {
    fn new(title: &str) -> Self {
        Draft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn into_recipe(self) -> Recipe {
        Recipe {
            title: self.title,
            ingredients: self.ingredients.join("\n"),
            instructions: self.instructions.join("\n"),
        }
    }
}

/// Accumulator threaded through the fold.
///
/// `pending` is only ever `Some` with a non-empty title, so entry lines seen
/// while it is `None` have no recipe to belong to and are dropped.
#[derive(Debug, Default)]
pub struct ParseState {
    recipes: Vec<Recipe>,
    pending: Option<Draft>,
}

impl ParseState {
    pub fn step(mut self, line: Line<'_>) -> Self {
        match line {
            Line::Title(title) => {
                self.flush();
                if !title.is_empty() {
                    self.pending = Some(Draft::new(title));
                }
            }
            Line::Ingredient(entry) => {
                if let Some(draft) = self.pending.as_mut() {
                    draft.ingredients.push(entry.to_string());
                }
            }
            Line::Instruction(entry) => {
                if let Some(draft) = self.pending.as_mut() {
                    draft.instructions.push(entry.to_string());
                }
            }
            Line::IngredientsHeader | Line::InstructionsHeader | Line::Noise => {}
        }
        self
    }

    pub fn finish(mut self) -> Vec<Recipe> {
        self.flush();
        self.recipes
    }

    fn flush(&mut self) {
        if let Some(draft) = self.pending.take() {
            self.recipes.push(draft.into_recipe());
        }
    }
}

/// Parse a model response into recipes, in the order their titles appear.
///
/// Never fails: a response without any `Title:` line yields an empty vector.
pub fn parse_response(text: &str) -> Vec<Recipe> {
    text.lines()
        .map(classify)
        .fold(ParseState::default(), ParseState::step)
        .finish()
}
