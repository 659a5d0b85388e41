use rand::Rng;
use thiserror::Error;

use crate::model::card::Card;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("a deck needs at least one card")]
    Empty,
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// An ordered, non-empty sequence of flashcards.
///
/// Card identity is positional: operations address cards by index, and a
/// shuffle permutes the sequence in place. Emptiness is rejected at
/// construction, so navigation never has to handle a deck without cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck from the given cards.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` when `cards` is empty.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { cards })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: emptiness is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Shuffles the deck in place with an unbiased Fisher-Yates pass:
    /// for each `i` from the last index down to 1, swap with a uniform
    /// pick from the inclusive range `[0, i]`.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build_deck(n: usize) -> Deck {
        let cards = (1..=n)
            .map(|i| Card::new(format!("Q{i}"), format!("A{i}")).unwrap())
            .collect();
        Deck::new(cards).unwrap()
    }

    #[test]
    fn deck_rejects_empty_card_list() {
        let err = Deck::new(Vec::new()).unwrap_err();
        assert_eq!(err, DeckError::Empty);
    }

    #[test]
    fn deck_exposes_cards_by_index() {
        let deck = build_deck(3);
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.card(0).unwrap().question(), "Q1");
        assert_eq!(deck.card(2).unwrap().answer(), "A3");
        assert!(deck.card(3).is_none());
    }

    #[test]
    fn shuffle_preserves_card_multiset() {
        let mut deck = build_deck(10);
        let before = deck.cards().to_vec();

        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        let mut after = deck.cards().to_vec();
        let mut sorted_before = before;
        sorted_before.sort_by(|a, b| a.question().cmp(b.question()));
        after.sort_by(|a, b| a.question().cmp(b.question()));
        assert_eq!(after, sorted_before);
    }

    #[test]
    fn shuffle_of_single_card_deck_is_identity() {
        let mut deck = build_deck(1);
        let before = deck.cards().to_vec();
        let mut rng = StdRng::seed_from_u64(1);
        deck.shuffle(&mut rng);
        assert_eq!(deck.cards(), before.as_slice());
    }
}
