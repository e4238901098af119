mod error;
pub mod filter;
pub mod generated;
pub mod ingredient;
pub mod recipe;

pub use error::*;
pub use filter::{FilterState, TimeBucket};
pub use generated::{ChatMessage, ChatRole, Cuisine, GeneratedRecipe, Synthesis};
pub use ingredient::{IngredientError, IngredientList};
pub use recipe::{Difficulty, Recipe, ScoredRecipe};
