use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesCommand {
    /// Mark or unmark a catalog recipe as favorite
    Toggle { id: String },
    /// Print favorite recipes
    List,
}

#[tracing::instrument(skip(config))]
pub async fn favorites(config: &Config, command: FavoritesCommand) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let mut session = super::open_session(config).await?;

    match command {
        FavoritesCommand::Toggle { id } => {
            let Some(recipe) = catalog.get(&id) else {
                anyhow::bail!("no recipe with id {id}");
            };

            if session.toggle_favorite(&recipe.id).await? {
                println!("★ {}", recipe.name);
            } else {
                println!("removed {} from favorites", recipe.name);
            }
        }
        FavoritesCommand::List => {
            if session.favorites().is_empty() {
                println!("No favorites yet.");
            }

            for id in session.favorites() {
                match catalog.get(id) {
                    Some(recipe) => println!("★ {} [{}]", recipe.name, recipe.id),
                    None => tracing::warn!(%id, "favorite is not in the catalog"),
                }
            }
        }
    }

    Ok(())
}
