use pantry_shared::IngredientList;

use crate::{PreferenceStore, Preferences};

/// Preferences loaded once at startup and written back after every change.
pub struct Session<S> {
    store: S,
    state: Preferences,
}

impl<S: PreferenceStore> Session<S> {
    #[tracing::instrument(skip_all)]
    pub async fn load(store: S) -> pantry_shared::Result<Self> {
        let state = store.load().await?;

        tracing::debug!(
            favorites = state.favorites.len(),
            ingredients = state.ingredients.len(),
            "session loaded"
        );

        Ok(Self { store, state })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.state.ingredients
    }

    pub fn favorites(&self) -> &[String] {
        &self.state.favorites
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.state.favorites.iter().any(|id| id == recipe_id)
    }

    /// Adds a trimmed ingredient and returns the stored name.
    pub async fn add_ingredient(&mut self, raw: &str) -> pantry_shared::Result<String> {
        let previous = self.state.clone();
        let name = self.state.ingredients.add(raw)?.to_owned();
        self.save_or_restore(previous).await?;

        Ok(name)
    }

    pub async fn remove_ingredient(&mut self, name: &str) -> pantry_shared::Result<bool> {
        let previous = self.state.clone();
        let removed = self.state.ingredients.remove(name);
        if removed {
            self.save_or_restore(previous).await?;
        }

        Ok(removed)
    }

    pub async fn clear_ingredients(&mut self) -> pantry_shared::Result<()> {
        let previous = self.state.clone();
        self.state.ingredients.clear();
        self.save_or_restore(previous).await
    }

    /// Flips the favorite flag and returns the new value.
    pub async fn toggle_favorite(&mut self, recipe_id: &str) -> pantry_shared::Result<bool> {
        let previous = self.state.clone();
        let favorite = if self.is_favorite(recipe_id) {
            self.state.favorites.retain(|id| id != recipe_id);
            false
        } else {
            self.state.favorites.push(recipe_id.to_owned());
            true
        };

        self.save_or_restore(previous).await?;

        Ok(favorite)
    }

    /// Writes the current state. On failure the in-memory state goes back to
    /// `previous` so it keeps matching what the store holds.
    async fn save_or_restore(&mut self, previous: Preferences) -> pantry_shared::Result<()> {
        if let Err(err) = self.store.save(&self.state).await {
            tracing::warn!(error = %err, "saving preferences failed, change reverted");
            self.state = previous;
            return Err(err);
        }

        Ok(())
    }
}
