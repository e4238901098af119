use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

#[derive(Subcommand, Debug, Clone)]
pub enum IngredientsCommand {
    /// Save one or more ingredients
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Forget a saved ingredient
    Remove { name: String },
    /// Print the saved ingredients
    List,
    /// Forget every saved ingredient
    Clear,
}

#[tracing::instrument(skip(config))]
pub async fn ingredients(config: &Config, command: IngredientsCommand) -> Result<()> {
    let mut session = super::open_session(config).await?;

    match command {
        IngredientsCommand::Add { names } => {
            for name in names {
                match session.add_ingredient(&name).await {
                    Ok(added) => println!("added {added}"),
                    Err(pantry_shared::Error::Ingredient(err)) => {
                        tracing::warn!(%name, "ingredient rejected");
                        eprintln!("{err}");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
        IngredientsCommand::Remove { name } => {
            if session.remove_ingredient(name.trim()).await? {
                println!("removed {}", name.trim());
            } else {
                eprintln!("{} is not in the list", name.trim());
            }
        }
        IngredientsCommand::List => {
            println!("{}", crate::render::ingredients(session.ingredients()));
        }
        IngredientsCommand::Clear => {
            session.clear_ingredients().await?;
            println!("cleared");
        }
    }

    Ok(())
}
