use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::model::{Card, Deck, Score};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Recoverable rejections of session operations.
///
/// None of these are fatal: the session state is left untouched and the
/// caller is expected to report the rejection and move on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("card index {index} is out of range for a deck of {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("cannot score a card before its answer has been revealed")]
    NotYetRevealed,

    #[error("scoring is locked while an advance is pending")]
    ScoringLocked,
}

//
// ─── ADVANCE TICKET ────────────────────────────────────────────────────────────
//

/// Handle for the delayed advance scheduled by a successful [`Session::mark_answer`].
///
/// The ticket captures the session's advance epoch at scoring time. Any
/// later card load (manual navigation, reset, shuffle) bumps the epoch,
/// so a ticket presented after one of those is stale and
/// [`Session::complete_auto_advance`] ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the scheduled advance only happens when the ticket is completed"]
pub struct AdvanceTicket {
    epoch: u64,
}

//
// ─── FLIP OUTCOME ──────────────────────────────────────────────────────────────
//

/// Result of a flip: the new orientation and the text of the face now shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipOutcome<'a> {
    pub is_flipped: bool,
    pub face: &'a str,
}

//
// ─── STATS ─────────────────────────────────────────────────────────────────────
//

/// Pure snapshot of session progress and accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total_cards: usize,
    /// 1-based position of the displayed card.
    pub current_card: usize,
    pub total_answered: u32,
    pub correct: u32,
    pub wrong: u32,
    /// Rounded accuracy percentage; 0 until something has been answered.
    pub percentage: u32,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Interactive review session over a deck of flashcards.
///
/// The session owns the deck and the score exclusively and is the single
/// place where navigation, flip state and scoring are decided. Rendering
/// layers read its state after each operation; they never mutate it.
///
/// Invariant: `cursor` always addresses a valid card (`Deck` is non-empty
/// by construction and every navigation wraps modulo the deck length).
#[derive(Debug, Clone)]
pub struct Session {
    deck: Deck,
    score: Score,
    cursor: usize,
    is_flipped: bool,
    has_seen_answer: bool,
    scoring_locked: bool,
    epoch: u64,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session positioned on card 0 with a zero score.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(deck: Deck, started_at: DateTime<Utc>) -> Self {
        Self {
            deck,
            score: Score::new(),
            cursor: 0,
            is_flipped: false,
            has_seen_answer: false,
            scoring_locked: false,
            epoch: 0,
            started_at,
        }
    }

    // Accessors
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    #[must_use]
    pub fn has_seen_answer(&self) -> bool {
        self.has_seen_answer
    }

    #[must_use]
    pub fn scoring_locked(&self) -> bool {
        self.scoring_locked
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The card at the cursor.
    #[must_use]
    pub fn current_card(&self) -> &Card {
        &self.deck.cards()[self.cursor]
    }

    /// Whether scoring controls should be offered right now: the answer
    /// face is visible, has been seen, and no advance is pending.
    #[must_use]
    pub fn show_scoring(&self) -> bool {
        self.is_flipped && self.has_seen_answer && !self.scoring_locked
    }

    /// Displays the card at `index`, question face up.
    ///
    /// Loading a card clears the flip and seen flags, releases any scoring
    /// lock, and supersedes a still-pending auto-advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` (state untouched) when `index`
    /// does not address a card.
    pub fn load_card(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.deck.len() {
            return Err(SessionError::OutOfRange {
                index,
                len: self.deck.len(),
            });
        }
        self.load_unchecked(index);
        Ok(())
    }

    /// Toggles between the question and answer face of the current card.
    ///
    /// Flipping to the answer marks it as seen; flipping back does NOT
    /// clear that mark, so scoring stays available across repeat flips.
    pub fn flip(&mut self) -> FlipOutcome<'_> {
        self.is_flipped = !self.is_flipped;
        if self.is_flipped {
            self.has_seen_answer = true;
        }

        let card = &self.deck.cards()[self.cursor];
        FlipOutcome {
            is_flipped: self.is_flipped,
            face: if self.is_flipped {
                card.answer()
            } else {
                card.question()
            },
        }
    }

    /// Advances to the next card, wrapping to card 0 past the end.
    pub fn next(&mut self) {
        let target = (self.cursor + 1) % self.deck.len();
        self.load_unchecked(target);
    }

    /// Steps back to the previous card, wrapping to the last card from 0.
    pub fn previous(&mut self) {
        let len = self.deck.len();
        let target = (self.cursor + len - 1) % len;
        self.load_unchecked(target);
    }

    /// Records a self-score for the current card and locks scoring until
    /// the returned ticket is completed (or superseded by navigation).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotYetRevealed` when the answer has not been
    /// seen, and `SessionError::ScoringLocked` while an advance is already
    /// pending. Neither rejection mutates any state.
    pub fn mark_answer(&mut self, is_correct: bool) -> Result<AdvanceTicket, SessionError> {
        if !self.has_seen_answer {
            return Err(SessionError::NotYetRevealed);
        }
        if self.scoring_locked {
            return Err(SessionError::ScoringLocked);
        }

        self.score.record(is_correct);
        self.scoring_locked = true;
        Ok(AdvanceTicket { epoch: self.epoch })
    }

    /// Completes the delayed advance scheduled by [`Self::mark_answer`].
    ///
    /// Advances to the next card and returns true iff the ticket is still
    /// current; a ticket invalidated by an intervening card load is a
    /// no-op and returns false.
    pub fn complete_auto_advance(&mut self, ticket: AdvanceTicket) -> bool {
        if !self.scoring_locked || ticket.epoch != self.epoch {
            return false;
        }
        self.next();
        true
    }

    /// Returns to card 0 with a zero score. Deck order is left untouched.
    pub fn reset(&mut self) {
        self.score.reset();
        self.load_unchecked(0);
    }

    /// Shuffles the deck (unbiased Fisher-Yates) and restarts from card 0.
    ///
    /// The score is untouched; only [`Self::reset`] clears it.
    pub fn shuffle_deck(&mut self, rng: &mut impl Rng) {
        self.deck.shuffle(rng);
        self.load_unchecked(0);
    }

    /// Pure projection of progress and accuracy, no mutation.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            total_cards: self.deck.len(),
            current_card: self.cursor + 1,
            total_answered: self.score.answered(),
            correct: self.score.correct(),
            wrong: self.score.wrong(),
            percentage: self.score.percentage(),
        }
    }

    fn load_unchecked(&mut self, index: usize) {
        self.cursor = index;
        self.is_flipped = false;
        self.has_seen_answer = false;
        self.scoring_locked = false;
        self.epoch += 1;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
