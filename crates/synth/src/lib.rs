//! Template recipe synthesizer.
//!
//! Builds a plausible recipe out of whatever the user has on hand. Every random
//! choice goes through the caller's [`Rng`], so a seeded generator always yields
//! the same dish.

mod conversation;
mod cuisine;
mod template;

pub use conversation::Conversation;
pub use cuisine::{choose_cuisine, complementary_ingredients, cooking_tips, infer_cuisine};
pub use template::{CookingMethod, DISH_TYPES, UNITS, instructions};

use pantry_shared::{Difficulty, GeneratedRecipe, Synthesis, ingredient::normalize};
use rand::Rng;
use strum::VariantArray;

/// Stands in for the main ingredient when the list is empty.
pub const PLACEHOLDER: &str = "Mixed Vegetable";

const PREP_MINUTES: std::ops::RangeInclusive<u32> = 10..=29;
const COOK_MINUTES: std::ops::RangeInclusive<u32> = 15..=54;
const SERVINGS: std::ops::RangeInclusive<u32> = 2..=5;
const QUANTITY: std::ops::RangeInclusive<u32> = 1..=3;

fn joined_or_placeholder(items: &[String]) -> String {
    if items.is_empty() {
        PLACEHOLDER.to_owned()
    } else {
        items.join(", ")
    }
}

pub(crate) fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Generates a recipe from `ingredients`.
///
/// Draw order is fixed: cuisine fallback, method, dish type, quantity and unit
/// per ingredient, prep, cook, servings, difficulty. `preference` is logged only.
pub fn synthesize<S: AsRef<str>, R: Rng>(
    rng: &mut R,
    ingredients: &[S],
    preference: Option<&str>,
) -> Synthesis {
    let ingredients = normalize(ingredients);

    let cuisine = choose_cuisine(rng, &ingredients);
    let method = *pick(rng, CookingMethod::VARIANTS);
    let dish_type = *pick(rng, DISH_TYPES);

    let main = ingredients.first().map(String::as_str).unwrap_or(PLACEHOLDER);
    let name = format!("{method} {main} {dish_type}");

    let mut lines = Vec::with_capacity(ingredients.len() + 5);
    for ingredient in &ingredients {
        let quantity = rng.random_range(QUANTITY);
        let unit = pick(rng, UNITS);
        lines.push(format!("{quantity} {unit} {ingredient}"));
    }
    lines.extend(
        complementary_ingredients(cuisine)
            .iter()
            .map(|line| line.to_string()),
    );

    let all = joined_or_placeholder(&ingredients);
    let first_three = joined_or_placeholder(&ingredients[..ingredients.len().min(3)]);

    let prep_time = rng.random_range(PREP_MINUTES);
    let cook_time = rng.random_range(COOK_MINUTES);
    let servings = rng.random_range(SERVINGS);
    let difficulty = *pick(rng, Difficulty::VARIANTS);

    let description = format!(
        "A delicious {} fusion dish that perfectly combines {first_three} with aromatic spices and fresh ingredients. This recipe maximizes the flavors of your available ingredients while introducing complementary elements.",
        cuisine.as_ref().to_lowercase()
    );
    let acknowledgment = format!(
        "I've created a delicious {name} recipe using your available ingredients! This {cuisine} dish combines {first_three} in a unique way."
    );

    match preference.map(str::trim).filter(|p| !p.is_empty()) {
        Some(preference) => tracing::info!(%cuisine, %method, preference, "recipe synthesized"),
        None => tracing::info!(%cuisine, %method, "recipe synthesized"),
    }

    Synthesis {
        recipe: GeneratedRecipe {
            name,
            description,
            instructions: instructions(method, main, &all),
            ingredients: lines,
            prep_time,
            cook_time,
            servings,
            difficulty,
            cuisine,
            tips: cooking_tips(cuisine),
        },
        acknowledgment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn pick_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            assert!(UNITS.contains(pick(&mut rng, UNITS)));
        }
    }

    #[test]
    fn blank_entries_are_dropped_before_drawing() {
        let a = synthesize(&mut StdRng::seed_from_u64(3), &["tofu"], None);
        let b = synthesize(&mut StdRng::seed_from_u64(3), &["  tofu ", ""], None);
        assert_eq!(a, b);
    }

    #[test]
    fn preference_does_not_change_the_dish() {
        let plain = synthesize(&mut StdRng::seed_from_u64(11), &["beef"], None);
        let spicy = synthesize(&mut StdRng::seed_from_u64(11), &["beef"], Some("extra spicy"));
        assert_eq!(plain, spicy);
    }
}
