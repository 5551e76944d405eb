use crate::storage::KeyValueStore;
use log::{debug, warn};
use std::collections::HashSet;

/// Key holding the JSON array of bookmarked recipe IDs
pub const FAVORITES_KEY: &str = "f2t_favorites";

/// Bookmarked recipe IDs, persisted after every change.
///
/// The in-memory set is authoritative: storage failures are logged and
/// otherwise ignored, so favorites keep working for the rest of the session.
pub struct FavoritesStore {
    ids: HashSet<String>,
    store: Box<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Load favorites from `store`; unreadable or malformed data loads as empty
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => parse_ids(&raw),
            Ok(None) => HashSet::new(),
            Err(e) => {
                warn!("Could not read favorites, starting empty: {}", e);
                HashSet::new()
            }
        };
        debug!("Loaded {} favorite(s)", ids.len());
        Self { ids, store }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Add `id` if absent, remove it if present; returns the new membership
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.save();
        now_favorite
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    /// IDs in a stable order, for listing
    pub fn sorted_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Backing store, shared with other preferences
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        self.store.as_mut()
    }

    fn save(&mut self) {
        let serialized = match serde_json::to_string(&self.sorted_ids()) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize favorites: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(FAVORITES_KEY, &serialized) {
            warn!("Could not save favorites, keeping them in memory: {}", e);
        }
    }
}

/// Stored value must be a JSON array; non-string entries are skipped
fn parse_ids(raw: &str) -> HashSet<String> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Ok(_) => {
            warn!("Stored favorites are not a list, ignoring them");
            HashSet::new()
        }
        Err(e) => {
            warn!("Stored favorites are not valid JSON, ignoring them: {}", e);
            HashSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::storage::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "blocked").into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded").into())
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut favorites = FavoritesStore::load(Box::new(MemoryStore::new()));
        assert!(!favorites.is_favorite("52772"));

        assert!(favorites.toggle("52772"));
        assert!(favorites.is_favorite("52772"));

        assert!(!favorites.toggle("52772"));
        assert!(!favorites.is_favorite("52772"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_persists_json_array() {
        let mut favorites = FavoritesStore::load(Box::new(MemoryStore::new()));
        favorites.toggle("2");
        favorites.toggle("1");

        let stored = favorites.store().get(FAVORITES_KEY).unwrap().unwrap();
        assert_eq!(stored, r#"["1","2"]"#);
    }

    #[test]
    fn test_load_existing() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, r#"["a", "b", "a", 3]"#).unwrap();

        let favorites = FavoritesStore::load(Box::new(store));
        assert_eq!(favorites.len(), 2);
        assert!(favorites.is_favorite("a"));
        assert!(favorites.is_favorite("b"));
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, r#"{"a": 1}"#).unwrap();
        assert!(FavoritesStore::load(Box::new(store)).is_empty());

        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "[oops").unwrap();
        assert!(FavoritesStore::load(Box::new(store)).is_empty());
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut favorites = FavoritesStore::load(Box::new(BrokenStore));
        assert!(favorites.is_empty());

        assert!(favorites.toggle("x"));
        assert!(favorites.is_favorite("x"));
    }
}
