//! Recipe matching and ranking.
//!
//! [`rank`] filters a catalog with the active [`FilterState`], scores what is
//! left against the user's ingredients and sorts by score, highest first.
//! Ties keep catalog order.

mod filter;
mod score;

pub use filter::filter;
pub use pantry_shared::filter::{MEDIUM_MAX_MINUTES, QUICK_MAX_MINUTES};
pub use score::{
    AVAILABILITY_WEIGHT, COVERAGE_WEIGHT, MatchBreakdown, PARTIAL_MATCH_BONUS, breakdown, score,
};

use pantry_shared::{FilterState, Recipe, ScoredRecipe, ingredient::normalize};

/// Filters, scores and orders `catalog` for the given ingredients.
pub fn rank<S: AsRef<str>>(
    catalog: &[Recipe],
    ingredients: &[S],
    filters: &FilterState,
) -> Vec<ScoredRecipe> {
    let ingredients = normalize(ingredients);

    let mut scored = filter(catalog, filters)
        .map(|recipe| ScoredRecipe {
            score: score(recipe, &ingredients),
            recipe: recipe.clone(),
        })
        .collect::<Vec<_>>();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    tracing::debug!(
        catalog = catalog.len(),
        ingredients = ingredients.len(),
        results = scored.len(),
        top = scored.first().map(|r| r.id.as_str()).unwrap_or_default(),
        "recipes ranked"
    );

    scored
}
