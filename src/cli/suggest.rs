use anyhow::{Context, Result};
use pantry_catalog::Catalog;
use pantry_shared::{Difficulty, FilterState, TimeBucket, filter::parse_optional};

use crate::config::Config;

#[derive(clap::Args, Debug, Clone)]
pub struct SuggestArgs {
    /// Ingredient you have, repeatable
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Dietary tag, or `any`
    #[arg(long, default_value = "any")]
    pub diet: String,

    /// any, easy, medium or hard
    #[arg(long, default_value = "any")]
    pub difficulty: String,

    /// any, quick, medium or long
    #[arg(long, default_value = "any")]
    pub time: String,

    /// Show at most this many recipes
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long)]
    pub json: bool,

    /// Also use the saved ingredient list
    #[arg(long)]
    pub use_saved: bool,

    /// Print the dietary tags `--diet` accepts and exit
    #[arg(long)]
    pub list_diets: bool,
}

impl SuggestArgs {
    pub fn filters(&self) -> Result<FilterState> {
        let dietary = parse_optional::<String>(&self.diet)?;
        let difficulty = parse_optional::<Difficulty>(&self.difficulty)
            .with_context(|| format!("unknown difficulty {}", self.difficulty))?;
        let time = parse_optional::<TimeBucket>(&self.time)
            .with_context(|| format!("unknown time range {}", self.time))?
            .unwrap_or_default();

        Ok(FilterState {
            dietary,
            difficulty,
            time,
        })
    }
}

/// Notice for a `--diet` value no recipe carries, listing the tags that exist.
pub fn unknown_diet(catalog: &Catalog, filters: &FilterState) -> Option<String> {
    let diet = filters.dietary.as_deref()?;
    let tags = catalog.dietary_tags();
    if tags.iter().any(|tag| *tag == diet) {
        return None;
    }

    tracing::warn!(diet, "no recipe carries this dietary tag");

    Some(format!(
        "No recipe is tagged \"{diet}\". Known tags: {}",
        tags.join(", ")
    ))
}

#[tracing::instrument(skip_all, fields(ingredients = args.ingredients.len()))]
pub async fn suggest(config: &Config, args: SuggestArgs) -> Result<()> {
    println!("{}", suggestions(config, &args).await?);

    Ok(())
}

/// Builds what `suggest` prints.
pub async fn suggestions(config: &Config, args: &SuggestArgs) -> Result<String> {
    let catalog = super::load_catalog(config)?;
    if args.list_diets {
        return Ok(catalog.dietary_tags().join("\n"));
    }

    let filters = args.filters()?;
    let notice = unknown_diet(&catalog, &filters);
    let session = super::open_session(config).await?;

    let saved = args.use_saved.then(|| session.ingredients());
    let ingredients = super::merge_ingredients(&args.ingredients, saved);

    tracing::debug!(
        ingredients = ingredients.len(),
        filtered = !filters.is_any(),
        "ranking catalog"
    );

    let mut ranked = pantry_matching::rank(catalog.recipes(), &ingredients, &filters);
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&ranked)?);
    }

    let listing = crate::render::suggestions(&ranked, |id| session.is_favorite(id));
    Ok(match notice {
        Some(notice) => format!("{notice}\n{listing}"),
        None => listing,
    })
}
