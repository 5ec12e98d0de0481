use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use recipe_finder::providers::ProviderFactory;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Favorites file (defaults to the configured path)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask the model for recipes matching a craving
    Search {
        /// What do you feel like eating? An empty query lists favorites.
        query: Vec<String>,
        /// Provider to use instead of the configured chain
        #[arg(
            short,
            long,
            value_parser = PossibleValuesParser::new(ProviderFactory::available_providers())
        )]
        provider: Option<String>,
        /// Model override
        #[arg(short, long)]
        model: Option<String>,
        /// Toggle the result with this title in favorites (repeatable)
        #[arg(short, long = "favorite")]
        favorites: Vec<String>,
        /// Print recipes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse a saved model response without calling the model
    Parse {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
        /// Print recipes as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage favorite recipes
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// List favorite titles
    List,
    /// Show a favorite recipe in full
    Show { title: String },
    /// Remove a favorite
    Remove { title: String },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
