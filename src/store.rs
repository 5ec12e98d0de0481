//! Local persistence for favorite recipes.
//!
//! Storage is a plain async key-value interface. Favorites are kept under a
//! single key as a JSON array of recipes.

use crate::error::FinderError;
use crate::model::Recipe;
use async_trait::async_trait;
use log::{debug, error};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::fs;

/// Key under which the favorites list is stored
pub const FAVORITES_KEY: &str = "FAVORITE_RECIPES";

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, FinderError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), FinderError>;
}

/// Key-value store backed by a single JSON object file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Sibling file that is written first and then renamed over the store.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("favorites"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_entries(&self) -> Result<HashMap<String, String>, FinderError> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, FinderError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), FinderError> {
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let contents = serde_json::to_string_pretty(&entries)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, contents).await?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        debug!("Wrote key '{}' to {}", key, self.path.display());
        Ok(())
    }
}

/// In-process key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, FinderError> {
        self.entries
            .lock()
            .map_err(|_| FinderError::StorageError("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, FinderError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), FinderError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Outcome of [`Favorites::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// The user's favorite recipes, matched by exact title.
///
/// Storage failures never surface to the caller: they are logged, loading
/// falls back to an empty list, and a failed save leaves the in-memory list as
/// it is.
pub struct Favorites<S: KeyValueStore> {
    store: S,
    recipes: Vec<Recipe>,
}

impl<S: KeyValueStore> Favorites<S> {
    pub async fn load(store: S) -> Self {
        let recipes = match Self::read(&store).await {
            Ok(recipes) => recipes,
            Err(e) => {
                error!("Failed to load favorites: {}", e);
                Vec::new()
            }
        };
        Favorites { store, recipes }
    }

    async fn read(store: &S) -> Result<Vec<Recipe>, FinderError> {
        match store.get(FAVORITES_KEY).await? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.recipes.iter().any(|fav| fav.title == title)
    }

    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|fav| fav.title == title)
    }

    /// Add the recipe, or remove every favorite sharing its title.
    pub async fn toggle(&mut self, recipe: &Recipe) -> FavoriteChange {
        let change = if self.is_favorite(&recipe.title) {
            self.recipes.retain(|fav| fav.title != recipe.title);
            FavoriteChange::Removed
        } else {
            self.recipes.push(recipe.clone());
            FavoriteChange::Added
        };
        self.save().await;
        change
    }

    /// Remove every favorite with this title. Returns whether any was removed.
    pub async fn remove(&mut self, title: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|fav| fav.title != title);
        let removed = self.recipes.len() != before;
        if removed {
            self.save().await;
        }
        removed
    }

    pub async fn save(&self) {
        let result = match serde_json::to_string(&self.recipes) {
            Ok(value) => self.store.set(FAVORITES_KEY, &value).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            error!("Failed to save favorites: {}", e);
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
