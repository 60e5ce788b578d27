//! JSON-file-backed storage for named card lists
//!
//! Each storage key maps to one JSON file under the store root. A whole
//! list is read, modified, and rewritten per operation.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;

use crate::core::card::Card;

/// Errors from the storage layer
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Key-value store holding one card list per storage key
#[derive(Debug, Clone)]
pub struct CardStore {
    root: PathBuf,
}

impl CardStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Store root in the platform data directory
    pub fn default_root() -> Option<PathBuf> {
        ProjectDirs::from("com", "cardstock", "Cardstock")
            .map(|dirs| dirs.data_dir().join("cards"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Load the list stored under `key`.
    ///
    /// An absent file yields an empty list. Unreadable or malformed
    /// content also yields an empty list, with a warning, so one bad
    /// file cannot take the application down.
    pub fn load(&self, key: &str) -> Vec<Card> {
        let path = self.key_path(key);
        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read card list {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(cards) => cards,
            Err(e) => {
                tracing::warn!("Ignoring malformed card list {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Overwrite the entire list stored under `key`
    pub fn save(&self, key: &str, cards: &[Card]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string_pretty(cards)?;
        fs::write(self.key_path(key), content)?;
        Ok(())
    }

    /// Append one card to the list under `key`. No dedup, no validation.
    pub fn append(&self, key: &str, card: Card) -> Result<(), StoreError> {
        let mut cards = self.load(key);
        cards.push(card);
        self.save(key, &cards)
    }

    /// Remove every card with the given id from the list under `key`.
    ///
    /// Returns whether anything was removed. An unknown id still
    /// rewrites the (unchanged) list.
    pub fn remove(&self, key: &str, id: &str) -> Result<bool, StoreError> {
        let mut cards = self.load(key);
        let before = cards.len();
        cards.retain(|card| card.id != id);
        self.save(key, &cards)?;
        Ok(cards.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::CardDraft;
    use tempfile::TempDir;

    const KEY: &str = "cms_cards";

    fn store() -> (TempDir, CardStore) {
        let dir = TempDir::new().unwrap();
        let store = CardStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    fn card(title: &str) -> Card {
        Card::new(CardDraft {
            title: title.to_string(),
            content: "content".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn empty_store_loads_an_empty_list() {
        let (_dir, store) = store();
        assert!(store.load(KEY).is_empty());
    }

    #[test]
    fn save_then_load_round_trips_all_fields() {
        let (_dir, store) = store();
        let cards = vec![card("One"), card("Two")];
        store.save(KEY, &cards).unwrap();
        assert_eq!(store.load(KEY), cards);
    }

    #[test]
    fn append_grows_the_list_by_one() {
        let (_dir, store) = store();
        store.append(KEY, card("First")).unwrap();
        store.append(KEY, card("Second")).unwrap();

        let cards = store.load(KEY);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "First");
        assert_eq!(cards[1].title, "Second");
    }

    #[test]
    fn remove_filters_only_the_matching_id() {
        let (_dir, store) = store();
        let keep = card("Keep");
        let drop = card("Drop");
        store.append(KEY, keep.clone()).unwrap();
        store.append(KEY, drop.clone()).unwrap();

        assert!(store.remove(KEY, &drop.id).unwrap());
        let cards = store.load(KEY);
        assert_eq!(cards, vec![keep]);
    }

    #[test]
    fn removing_an_unknown_id_is_a_noop() {
        let (_dir, store) = store();
        store.append(KEY, card("Only")).unwrap();

        assert!(!store.remove(KEY, "card_0_0").unwrap());
        assert_eq!(store.load(KEY).len(), 1);
    }

    #[test]
    fn malformed_content_falls_back_to_an_empty_list() {
        let (dir, store) = store();
        std::fs::write(dir.path().join(format!("{}.json", KEY)), "{ not json").unwrap();
        assert!(store.load(KEY).is_empty());
    }

    #[test]
    fn storage_keys_are_isolated() {
        let (_dir, store) = store();
        store.append("cms_cards", card("Project")).unwrap();
        store.append("cms_featured_articles", card("Featured")).unwrap();

        assert_eq!(store.load("cms_cards").len(), 1);
        assert_eq!(store.load("cms_featured_articles").len(), 1);
        assert_eq!(store.load("cms_cards")[0].title, "Project");
    }
}
