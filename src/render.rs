//! Plain text output for the terminal.

use pantry_shared::{ChatMessage, GeneratedRecipe, IngredientList, Recipe, ScoredRecipe, Synthesis};

const FAVORITE: &str = "★";
const OWNED: &str = "✓";

fn marker(on: bool, symbol: &str) -> &str {
    if on { symbol } else { " " }
}

/// One line per ranked recipe.
pub fn suggestions<F>(ranked: &[ScoredRecipe], is_favorite: F) -> String
where
    F: Fn(&str) -> bool,
{
    if ranked.is_empty() {
        return "No recipes match the current filters.".to_owned();
    }

    ranked
        .iter()
        .enumerate()
        .map(|(index, recipe)| {
            format!(
                "{:>2}. {} {} [{}] {}% match, {} min, {}",
                index + 1,
                marker(is_favorite(&recipe.id), FAVORITE),
                recipe.name,
                recipe.id,
                recipe.match_percentage(),
                recipe.total_time(),
                recipe.difficulty,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn recipe(recipe: &Recipe, favorite: bool) -> String {
    let mut lines = vec![
        format!("{} {}", marker(favorite, FAVORITE), recipe.name),
        recipe.description.clone(),
        format!(
            "Prep {} min, cook {} min, serves {}, {}, rated {:.1}",
            recipe.prep_time, recipe.cook_time, recipe.servings, recipe.difficulty, recipe.rating
        ),
    ];

    if !recipe.dietary.is_empty() {
        lines.push(format!("Dietary: {}", recipe.dietary.join(", ")));
    }

    lines.push(String::new());
    lines.push("Ingredients:".to_owned());
    lines.extend(recipe.ingredients.iter().map(|i| format!("  - {i}")));

    lines.push(String::new());
    lines.push("Instructions:".to_owned());
    lines.extend(numbered(&recipe.instructions));

    lines.join("\n")
}

/// Generated recipe with the ingredients the user already has ticked.
pub fn generated<S: AsRef<str>>(synthesis: &Synthesis, available: &[S]) -> String {
    let recipe = &synthesis.recipe;

    let mut lines = vec![
        recipe.name.clone(),
        recipe.description.clone(),
        format!(
            "{} cuisine, prep {} min, cook {} min, {} min total, serves {}, {}",
            recipe.cuisine,
            recipe.prep_time,
            recipe.cook_time,
            recipe.total_time(),
            recipe.servings,
            recipe.difficulty
        ),
        String::new(),
        "Ingredients:".to_owned(),
    ];

    lines.extend(recipe.ingredients.iter().map(|line| {
        let owned = GeneratedRecipe::uses_available(line, available);
        format!("  {} {line}", marker(owned, OWNED))
    }));

    lines.push(String::new());
    lines.push("Instructions:".to_owned());
    lines.extend(numbered(&recipe.instructions));

    lines.push(String::new());
    lines.push("Tips:".to_owned());
    lines.extend(recipe.tips.iter().map(|t| format!("  - {t}")));

    lines.join("\n")
}

pub fn conversation(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|m| format!("{}: {}", m.role, m.message))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn ingredients(list: &IngredientList) -> String {
    if list.is_empty() {
        return "No saved ingredients.".to_owned();
    }

    list.iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered(steps: &[String]) -> impl Iterator<Item = String> + '_ {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| format!("  {}. {step}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_shared::{ChatRole, Cuisine, Difficulty};

    fn scored(id: &str, score: f64) -> ScoredRecipe {
        ScoredRecipe {
            recipe: Recipe {
                id: id.to_owned(),
                name: format!("Recipe {id}"),
                description: String::new(),
                image: String::new(),
                ingredients: vec!["rice".to_owned()],
                instructions: vec!["Cook.".to_owned()],
                prep_time: 10,
                cook_time: 25,
                servings: 2,
                difficulty: Difficulty::Medium,
                dietary: vec![],
                rating: 4.0,
            },
            score,
        }
    }

    #[test]
    fn suggestions_show_match_time_and_favorite() {
        let ranked = vec![scored("1", 0.7), scored("2", 1.3)];

        let out = suggestions(&ranked, |id| id == "2");
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], " 1.   Recipe 1 [1] 70% match, 35 min, Medium");
        assert_eq!(lines[1], " 2. ★ Recipe 2 [2] 130% match, 35 min, Medium");
    }

    #[test]
    fn empty_suggestions_say_so() {
        assert_eq!(
            suggestions(&[], |_| false),
            "No recipes match the current filters."
        );
    }

    #[test]
    fn generated_ticks_owned_ingredients() {
        let synthesis = Synthesis {
            recipe: GeneratedRecipe {
                name: "Baked tofu Bowl".to_owned(),
                description: String::new(),
                ingredients: vec!["2 cups tofu".to_owned(), "1 tsp cumin".to_owned()],
                instructions: vec!["Bake.".to_owned()],
                prep_time: 10,
                cook_time: 20,
                servings: 2,
                difficulty: Difficulty::Easy,
                cuisine: Cuisine::Indian,
                tips: vec![],
            },
            acknowledgment: String::new(),
        };

        let out = generated(&synthesis, &["Tofu"]);

        assert_eq!(
            out.lines().nth(2),
            Some("Indian cuisine, prep 10 min, cook 20 min, 30 min total, serves 2, Easy")
        );
        assert!(out.contains("  ✓ 2 cups tofu"));
        assert!(out.contains("    1 tsp cumin"));
        assert!(out.contains("  1. Bake."));
    }

    #[test]
    fn conversation_labels_roles() {
        let messages = vec![
            ChatMessage {
                role: ChatRole::User,
                message: "something spicy".to_owned(),
            },
            ChatMessage {
                role: ChatRole::Assistant,
                message: "Here you go".to_owned(),
            },
        ];

        assert_eq!(
            conversation(&messages),
            "you: something spicy\nchef: Here you go"
        );
    }
}
