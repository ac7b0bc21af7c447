use std::sync::RwLock;

use super::model::InventoryEntry;

/// Latest inventory snapshot, replaced wholesale on every reload. Mutating
/// operations never edit this locally; they re-fetch from the backend.
#[derive(Debug, Default)]
pub struct InventoryStore {
    entries: RwLock<Vec<InventoryEntry>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, entries: Vec<InventoryEntry>) {
        if let Ok(mut current) = self.entries.write() {
            *current = entries;
        }
    }

    pub fn snapshot(&self) -> Vec<InventoryEntry> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
