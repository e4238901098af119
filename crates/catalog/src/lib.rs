use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use pantry_shared::{Recipe, Result};
use rust_embed::RustEmbed;
use validator::Validate;

#[derive(RustEmbed)]
#[folder = "data/"]
struct Data;

const BUILTIN: &str = "recipes.json";

/// Read-only recipe collection handed to the ranking engine.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self> {
        let Some(file) = Data::get(BUILTIN) else {
            pantry_shared::bail!("embedded catalog {BUILTIN} is missing");
        };

        let recipes: Vec<Recipe> = serde_json::from_slice(&file.data)?;
        Self::new(recipes)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(recipes = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    /// Validates every recipe and rejects repeated ids.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut ids = HashSet::new();

        for recipe in &recipes {
            if let Err(errors) = recipe.validate() {
                tracing::warn!(recipe.id = %recipe.id, "catalog recipe failed validation");
                return Err(errors.into());
            }

            if !ids.insert(recipe.id.as_str()) {
                pantry_shared::bail!("duplicate recipe id {}", recipe.id);
            }
        }

        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct dietary tags across the catalog, sorted.
    pub fn dietary_tags(&self) -> Vec<&str> {
        self.recipes
            .iter()
            .flat_map(|r| r.dietary.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
