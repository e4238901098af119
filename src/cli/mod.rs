//! Subcommands of the `pantry` binary.

mod favorites;
mod generate;
mod ingredients;
mod migrate;
mod show;
mod suggest;

pub use favorites::{FavoritesCommand, favorites};
pub use generate::{GenerateArgs, generate, generation};
pub use ingredients::{IngredientsCommand, ingredients};
pub use migrate::migrate;
pub use show::show;
pub use suggest::{SuggestArgs, suggest, suggestions, unknown_diet};

use anyhow::Result;
use pantry_catalog::Catalog;
use pantry_preferences::{Session, SqliteStore};
use pantry_shared::IngredientList;

use crate::config::Config;

/// Built-in catalog, or the one at `catalog.path` when configured.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    Ok(catalog)
}

/// Opens the state database, migrating it first, and loads the saved preferences.
pub async fn open_session(config: &Config) -> Result<Session<SqliteStore>> {
    let pool =
        crate::db::create_pool(&config.database.url, config.database.max_connections).await?;
    crate::db::migrate(&pool).await?;

    Ok(Session::load(SqliteStore::new(pool)).await?)
}

/// Saved ingredients first when requested, then the ones given on the command line.
pub fn merge_ingredients(given: &[String], saved: Option<&IngredientList>) -> Vec<String> {
    let mut merged = match saved {
        Some(saved) => saved.clone(),
        None => IngredientList::new(),
    };

    for ingredient in given {
        // blanks and repeats are dropped
        let _ = merged.add(ingredient);
    }

    merged.to_vec()
}
