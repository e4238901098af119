use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::Difficulty;

/// Cuisine styles the generator can produce. `VARIANTS` order is the pool used
/// when no ingredient hints at a style.
#[derive(
    EnumString,
    Display,
    VariantArray,
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
pub enum Cuisine {
    Italian,
    Asian,
    Mediterranean,
    Mexican,
    American,
    Indian,
    French,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: Cuisine,
    pub tips: Vec<String>,
}

impl GeneratedRecipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Whether a generated ingredient line mentions something the user already has.
    pub fn uses_available<S: AsRef<str>>(line: &str, available: &[S]) -> bool {
        let line = line.to_lowercase();

        available
            .iter()
            .map(|a| a.as_ref().trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .any(|a| line.contains(&a))
    }
}

/// Generator output: the recipe and the sentence the assistant replies with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synthesis {
    pub recipe: GeneratedRecipe,
    pub acknowledgment: String,
}

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[strum(to_string = "you")]
    User,
    #[strum(to_string = "chef")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub message: String,
}
