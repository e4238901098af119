//! What the user keeps between runs: the ingredient list and favorite recipes.

mod memory;
mod session;

pub use memory::MemoryStore;
pub use session::Session;

use pantry_shared::IngredientList;
use serde::{Deserialize, Serialize};

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod sqlite;

        pub use sqlite::SqliteStore;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Favorite recipe ids, oldest first.
    pub favorites: Vec<String>,
    pub ingredients: IngredientList,
}

#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn load(&self) -> pantry_shared::Result<Preferences>;

    /// Replaces everything previously saved.
    async fn save(&self, preferences: &Preferences) -> pantry_shared::Result<()>;
}
