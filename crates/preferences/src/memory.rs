use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;

use crate::{PreferenceStore, Preferences};

/// Keeps preferences in process. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Preferences>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            snapshot: Mutex::new(preferences),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of completed saves.
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl PreferenceStore for MemoryStore {
    async fn load(&self) -> pantry_shared::Result<Preferences> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save(&self, preferences: &Preferences) -> pantry_shared::Result<()> {
        *self.snapshot.lock().await = preferences.clone();
        self.saves.fetch_add(1, Ordering::Relaxed);

        Ok(())
    }
}
