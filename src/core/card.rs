//! Card records and identifier generation

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The two kinds of content card the site carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardKind {
    #[default]
    Project,
    Featured,
}

impl CardKind {
    /// The storage key this kind's list is kept under
    pub fn storage_key(&self) -> &'static str {
        match self {
            CardKind::Project => "cms_cards",
            CardKind::Featured => "cms_featured_articles",
        }
    }

    /// Image substituted when a card of this kind has none
    pub fn placeholder_image(&self) -> &'static str {
        match self {
            CardKind::Project => "assets/img/placeholder-300x200.png",
            CardKind::Featured => "assets/img/placeholder-300x250.png",
        }
    }

    /// Human-readable kind name
    pub fn label(&self) -> &'static str {
        match self {
            CardKind::Project => "project",
            CardKind::Featured => "featured article",
        }
    }
}

/// A persisted content card (project or featured article)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Opaque unique id, assigned at creation, never changed
    pub id: String,
    pub title: String,
    pub content: String,
    /// Empty means "use the kind's placeholder image"
    #[serde(default)]
    pub image_url: String,
    /// Creation time; records are never updated afterwards
    pub created_at: DateTime<Utc>,
    /// Page section tag, featured articles only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpage: Option<String>,
}

/// Form input for a new card, before an id and timestamp are assigned
#[derive(Debug, Clone, Default)]
pub struct CardDraft {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub webpage: Option<String>,
}

impl Card {
    /// Build a new record from form input, assigning id and creation time
    pub fn new(draft: CardDraft) -> Self {
        Self {
            id: generate_card_id(),
            title: draft.title,
            content: draft.content,
            image_url: draft.image_url,
            created_at: Utc::now(),
            webpage: draft.webpage,
        }
    }

    /// The image to show for this card, falling back to the kind's placeholder
    pub fn image_or_placeholder(&self, kind: CardKind) -> &str {
        if self.image_url.is_empty() {
            kind.placeholder_image()
        } else {
            &self.image_url
        }
    }
}

/// Generate a card id from the current time and a random suffix.
///
/// Uniqueness is probabilistic: two ids generated within the same
/// millisecond collide with probability 1/1000.
pub fn generate_card_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = rand::thread_rng().gen_range(0..1000);
    format!("card_{}_{}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_has_prefix_time_and_bounded_suffix() {
        let id = generate_card_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "card");
        assert!(parts[1].parse::<i64>().is_ok());
        let suffix: u32 = parts[2].parse().unwrap();
        assert!(suffix < 1000);
    }

    #[test]
    fn serialized_fields_are_camel_case() {
        let card = Card::new(CardDraft {
            title: "Title".to_string(),
            content: "Body".to_string(),
            image_url: "img.png".to_string(),
            webpage: None,
        });
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("webpage"));
    }

    #[test]
    fn webpage_tag_survives_a_round_trip() {
        let card = Card::new(CardDraft {
            title: "Jobs".to_string(),
            content: "Listings".to_string(),
            image_url: String::new(),
            webpage: Some("empleo.html".to_string()),
        });
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
        assert_eq!(back.webpage.as_deref(), Some("empleo.html"));
    }

    #[test]
    fn placeholder_is_used_only_when_image_is_missing() {
        let mut card = Card::new(CardDraft::default());
        assert_eq!(
            card.image_or_placeholder(CardKind::Project),
            CardKind::Project.placeholder_image()
        );
        assert_eq!(
            card.image_or_placeholder(CardKind::Featured),
            CardKind::Featured.placeholder_image()
        );

        card.image_url = "photo.png".to_string();
        assert_eq!(card.image_or_placeholder(CardKind::Project), "photo.png");
    }

    #[test]
    fn kinds_use_distinct_storage_keys() {
        assert_ne!(
            CardKind::Project.storage_key(),
            CardKind::Featured.storage_key()
        );
    }
}
