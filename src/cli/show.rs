use anyhow::Result;

use crate::config::Config;

#[tracing::instrument(skip(config))]
pub async fn show(config: &Config, id: String) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let Some(recipe) = catalog.get(&id) else {
        anyhow::bail!("no recipe with id {id}");
    };

    let session = super::open_session(config).await?;
    println!("{}", crate::render::recipe(recipe, session.is_favorite(&recipe.id)));

    Ok(())
}
