//! Kind-parameterized CRUD over the card store
//!
//! One repository implementation covers both card kinds; the kind
//! selects the storage key and, for projects, strips the page tag.

use crate::core::card::{Card, CardDraft, CardKind};
use crate::core::store::{CardStore, StoreError};

/// CRUD operations for one kind of card
#[derive(Debug, Clone)]
pub struct CardRepository {
    store: CardStore,
    kind: CardKind,
}

impl CardRepository {
    pub fn new(store: CardStore, kind: CardKind) -> Self {
        Self { store, kind }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// Create a record from form input and persist it.
    ///
    /// Empty titles and contents are accepted as-is; there is no
    /// validation beyond what the form collected.
    pub fn add(&self, mut draft: CardDraft) -> Result<Card, StoreError> {
        if self.kind == CardKind::Project {
            // Only featured articles belong to a page section
            draft.webpage = None;
        }
        let card = Card::new(draft);
        self.store.append(self.kind.storage_key(), card.clone())?;
        Ok(card)
    }

    /// All records of this kind, in storage order
    pub fn load(&self) -> Vec<Card> {
        self.store.load(self.kind.storage_key())
    }

    /// Remove the record with the given id.
    ///
    /// Returns whether a record was actually removed; deleting an
    /// unknown id leaves the list unchanged.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.store.remove(self.kind.storage_key(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repos() -> (TempDir, CardRepository, CardRepository) {
        let dir = TempDir::new().unwrap();
        let store = CardStore::new(dir.path().to_path_buf());
        let projects = CardRepository::new(store.clone(), CardKind::Project);
        let featured = CardRepository::new(store, CardKind::Featured);
        (dir, projects, featured)
    }

    fn draft(title: &str) -> CardDraft {
        CardDraft {
            title: title.to_string(),
            content: "desc".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn add_then_load_contains_the_new_record() {
        let (_dir, projects, _) = repos();
        let before = projects.load().len();

        let card = projects.add(draft("Laurisilva")).unwrap();

        let cards = projects.load();
        assert_eq!(cards.len(), before + 1);
        assert_eq!(cards.last().unwrap(), &card);
        assert_eq!(card.title, "Laurisilva");
        assert_eq!(card.content, "desc");
        assert!(card.image_url.is_empty());
    }

    #[test]
    fn project_records_never_carry_a_page_tag() {
        let (_dir, projects, _) = repos();
        let card = projects
            .add(CardDraft {
                webpage: Some("empleo.html".to_string()),
                ..draft("Stray tag")
            })
            .unwrap();
        assert_eq!(card.webpage, None);
    }

    #[test]
    fn featured_records_keep_their_page_tag() {
        let (_dir, _, featured) = repos();
        let card = featured
            .add(CardDraft {
                webpage: Some("ocio.html".to_string()),
                ..draft("Tagged")
            })
            .unwrap();
        assert_eq!(card.webpage.as_deref(), Some("ocio.html"));
    }

    #[test]
    fn delete_removes_exactly_the_matching_record() {
        let (_dir, projects, _) = repos();
        let first = projects.add(draft("First")).unwrap();
        let second = projects.add(draft("Second")).unwrap();

        assert!(projects.delete(&first.id).unwrap());

        let cards = projects.load();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, second.id);
        assert!(cards.iter().all(|card| card.id != first.id));
    }

    #[test]
    fn deleting_an_unknown_id_changes_nothing() {
        let (_dir, projects, _) = repos();
        projects.add(draft("Only")).unwrap();

        assert!(!projects.delete("card_0_0").unwrap());
        assert_eq!(projects.load().len(), 1);
    }

    #[test]
    fn kinds_do_not_share_records() {
        let (_dir, projects, featured) = repos();
        projects.add(draft("A project")).unwrap();

        assert!(featured.load().is_empty());
        assert_eq!(projects.load().len(), 1);
    }
}
