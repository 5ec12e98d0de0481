use log::{error, info};
use recipe_finder::config::AiConfig;
use recipe_finder::store::{FavoriteChange, Favorites, JsonFileStore};
use recipe_finder::{find_recipes_with_config, find_recipes_with_provider, parse_response, Recipe};
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;

mod cli;

use crate::cli::{Command, FavoritesAction};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = cli::parse_args();
    let config = AiConfig::load().unwrap_or_else(|e| {
        error!("Failed to load configuration, using defaults: {}", e);
        AiConfig::default()
    });
    let store_path = args.store.unwrap_or_else(|| config.favorites.path.clone());

    match args.command {
        Command::Search {
            query,
            provider,
            model,
            favorites,
            json,
        } => {
            let query = query.join(" ");
            let mut saved = Favorites::load(JsonFileStore::new(store_path)).await;

            if query.trim().is_empty() {
                print_recipes(saved.recipes(), json)?;
                return Ok(());
            }

            let result = if model.is_some() {
                find_recipes_with_config(&query, provider.as_deref(), None, model, None, None)
                    .await
            } else {
                find_recipes_with_provider(&query, provider.as_deref()).await
            };

            let recipes = match result {
                Ok(recipes) => recipes,
                Err(e) => {
                    error!("Error fetching recipes: {}", e);
                    return Err(e.into());
                }
            };

            print_recipes(&recipes, json)?;

            for title in &favorites {
                match recipes.iter().find(|r| &r.title == title) {
                    Some(recipe) => match saved.toggle(recipe).await {
                        FavoriteChange::Added => {
                            eprintln!("{} has been added to your favorites.", title)
                        }
                        FavoriteChange::Removed => {
                            eprintln!("{} has been removed from your favorites.", title)
                        }
                    },
                    None => eprintln!("No recipe titled '{}' in these results.", title),
                }
            }
        }
        Command::Parse { file, json } => {
            let text = read_input(file).await?;
            let recipes = parse_response(&text);
            info!("Parsed {} recipes", recipes.len());
            print_recipes(&recipes, json)?;
        }
        Command::Favorites { action } => {
            let mut saved = Favorites::load(JsonFileStore::new(store_path)).await;
            match action {
                FavoritesAction::List => {
                    if saved.recipes().is_empty() {
                        println!("No favorites yet.");
                    }
                    for recipe in saved.recipes() {
                        println!("{}", recipe.title);
                    }
                }
                FavoritesAction::Show { title } => match saved.get(&title) {
                    Some(recipe) => print!("{}", recipe.to_text()),
                    None => return Err(format!("No favorite titled '{}'", title).into()),
                },
                FavoritesAction::Remove { title } => {
                    if saved.remove(&title).await {
                        println!("{} has been removed from your favorites.", title);
                    } else {
                        return Err(format!("No favorite titled '{}'", title).into());
                    }
                }
            }
        }
    }

    Ok(())
}

async fn read_input(file: Option<PathBuf>) -> Result<String, Box<dyn Error>> {
    match file {
        Some(path) => Ok(tokio::fs::read_to_string(&path).await?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn print_recipes(recipes: &[Recipe], json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes found.");
    }
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", recipe.to_text());
    }
    Ok(())
}
