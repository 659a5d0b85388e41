use serde::Serialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card question cannot be empty")]
    EmptyQuestion,

    #[error("card answer cannot be empty")]
    EmptyAnswer,
}

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A single flashcard: one question face and one answer face.
///
/// Cards are immutable values; within a session they are identified by
/// their position in the deck, not by content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    question: String,
    answer: String,
}

impl Card {
    /// Creates a new card, trimming both faces.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyQuestion` or `CardError::EmptyAnswer` when
    /// the corresponding face is empty or whitespace-only.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Result<Self, CardError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(CardError::EmptyQuestion);
        }

        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(CardError::EmptyAnswer);
        }

        Ok(Self {
            question: question.trim().to_owned(),
            answer: answer.trim().to_owned(),
        })
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_rejects_empty_question() {
        let err = Card::new("   ", "ok").unwrap_err();
        assert_eq!(err, CardError::EmptyQuestion);
    }

    #[test]
    fn card_rejects_empty_answer() {
        let err = Card::new("ok", "").unwrap_err();
        assert_eq!(err, CardError::EmptyAnswer);
    }

    #[test]
    fn card_trims_both_faces() {
        let card = Card::new("  What does DOM stand for?  ", " Document Object Model ").unwrap();
        assert_eq!(card.question(), "What does DOM stand for?");
        assert_eq!(card.answer(), "Document Object Model");
    }
}
