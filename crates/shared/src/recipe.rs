use std::ops::Deref;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// A catalog recipe. Field names follow the catalog JSON (`prepTime`, `cookTime`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[validate(length(min = 1))]
    pub ingredients: Vec<String>,
    #[validate(length(min = 1))]
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    #[validate(range(min = 1))]
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f32,
}

impl Recipe {
    /// Saturates at `u32::MAX` for oversized external catalogs.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Exact, case-sensitive tag lookup.
    pub fn has_dietary_tag(&self, tag: &str) -> bool {
        self.dietary.iter().any(|t| t == tag)
    }
}

/// A recipe paired with its ranking score.
///
/// The score is a sort key and has no upper bound: every partial match adds a
/// flat bonus on top of the weighted ratios.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub score: f64,
}

impl ScoredRecipe {
    /// Score rendered as a percentage badge. Not clamped, values above 100 are expected.
    pub fn match_percentage(&self) -> i64 {
        (self.score * 100.0).round() as i64
    }
}

impl Deref for ScoredRecipe {
    type Target = Recipe;

    fn deref(&self) -> &Self::Target {
        &self.recipe
    }
}
