use pantry_shared::Recipe;
use serde::Serialize;

/// Weight of the share of the recipe's ingredient list the user covers.
pub const COVERAGE_WEIGHT: f64 = 0.6;

/// Weight of the share of the user's ingredients the recipe uses.
pub const AVAILABILITY_WEIGHT: f64 = 0.4;

/// Flat bonus per user ingredient that only matched at token level.
pub const PARTIAL_MATCH_BONUS: f64 = 0.3;

/// How a score was reached.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MatchBreakdown {
    pub match_count: usize,
    pub partial_count: usize,
    pub match_ratio: f64,
    pub availability_ratio: f64,
    pub score: f64,
}

/// Scores one recipe against already normalized ingredients.
///
/// With no ingredients every recipe scores exactly 1.
pub fn score<S: AsRef<str>>(recipe: &Recipe, ingredients: &[S]) -> f64 {
    breakdown(recipe, ingredients).score
}

pub fn breakdown<S: AsRef<str>>(recipe: &Recipe, ingredients: &[S]) -> MatchBreakdown {
    if ingredients.is_empty() {
        return MatchBreakdown {
            score: 1.0,
            ..Default::default()
        };
    }

    let phrases = recipe
        .ingredients
        .iter()
        .map(|i| i.to_lowercase())
        .collect::<Vec<_>>();

    let mut match_count = 0;
    let mut partial_count = 0;

    for ingredient in ingredients {
        let ingredient = ingredient.as_ref().to_lowercase();

        if phrases.iter().any(|p| contains_either(p, &ingredient)) {
            match_count += 1;
        } else if phrases
            .iter()
            .flat_map(|p| p.split_whitespace())
            .any(|token| contains_either(token, &ingredient))
        {
            partial_count += 1;
        }
    }

    let match_ratio = match_count as f64 / phrases.len().max(1) as f64;
    let availability_ratio = match_count as f64 / ingredients.len().max(1) as f64;
    let score = match_ratio * COVERAGE_WEIGHT
        + availability_ratio * AVAILABILITY_WEIGHT
        + partial_count as f64 * PARTIAL_MATCH_BONUS;

    MatchBreakdown {
        match_count,
        partial_count,
        match_ratio,
        availability_ratio,
        score,
    }
}

fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
