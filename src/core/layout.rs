//! Render-plan computation
//!
//! Decides which cards appear, in what order, with what layout flags.
//! Kept free of any UI types so the selection and ordering rules are
//! testable on their own.

use crate::core::card::{Card, CardKind};

/// One card as it should appear on screen
#[derive(Debug, Clone, PartialEq)]
pub struct CardSlot<'a> {
    pub card: &'a Card,
    /// Featured layout: image on the right instead of the left
    pub image_right: bool,
}

/// Compute the on-screen plan for a card list.
///
/// Projects keep storage order, oldest first, image always left.
///
/// Featured articles walk the list in storage order, skipping records
/// whose page tag does not exactly match the active filter. The
/// image side starts on the left and flips after each record that is
/// actually shown, skipped records do not flip it. The finished plan
/// is newest-first: each card is placed above the previous one.
pub fn render_plan<'a>(
    kind: CardKind,
    cards: &'a [Card],
    page_filter: Option<&str>,
) -> Vec<CardSlot<'a>> {
    match kind {
        CardKind::Project => cards
            .iter()
            .map(|card| CardSlot {
                card,
                image_right: false,
            })
            .collect(),
        CardKind::Featured => {
            let mut slots = Vec::new();
            let mut image_right = false;
            for card in cards {
                if let Some(page) = page_filter {
                    if card.webpage.as_deref() != Some(page) {
                        continue;
                    }
                }
                slots.push(CardSlot { card, image_right });
                image_right = !image_right;
            }
            slots.reverse();
            slots
        }
    }
}
