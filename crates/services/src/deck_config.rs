use std::path::Path;

use serde::Deserialize;

use quiz_core::model::{Card, Deck};

use crate::error::DeckConfigError;

/// One question/answer pair as it appears in a deck file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardConfig {
    pub question: String,
    pub answer: String,
}

/// Static deck configuration, either built in or loaded from a JSON file.
///
/// Configs are raw input: cards are only validated when the config is
/// turned into a [`Deck`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeckConfig {
    pub cards: Vec<CardConfig>,
}

impl DeckConfig {
    /// Reads a deck config from a JSON file of the form
    /// `{"cards": [{"question": "...", "answer": "..."}, ...]}`.
    ///
    /// # Errors
    ///
    /// Returns `DeckConfigError::Io` when the file cannot be read and
    /// `DeckConfigError::Parse` when it is not valid deck JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DeckConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DeckConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| DeckConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The built-in starter deck: ten basic web-development questions.
    #[must_use]
    pub fn starter() -> Self {
        let pairs = [
            ("What does HTML stand for?", "HyperText Markup Language"),
            ("What is CSS used for?", "Styling and layout of web pages"),
            (
                "What is JavaScript?",
                "A programming language that makes web pages interactive",
            ),
            ("What does DOM stand for?", "Document Object Model"),
            (
                "What is the purpose of the <head> tag in HTML?",
                "Contains metadata about the document, like title and links to stylesheets",
            ),
            (
                "How do you create a comment in CSS?",
                "/* This is a CSS comment */",
            ),
            (
                "What is the difference between margin and padding?",
                "Margin is space outside an element, padding is space inside an element",
            ),
            (
                "What is a responsive web design?",
                "A design approach that makes web pages work well on different devices and screen sizes",
            ),
            ("What does API stand for?", "Application Programming Interface"),
            (
                "What is the purpose of JavaScript's 'addEventListener' method?",
                "To attach event handlers to HTML elements without overwriting existing event handlers",
            ),
        ];

        Self {
            cards: pairs
                .into_iter()
                .map(|(question, answer)| CardConfig {
                    question: question.to_owned(),
                    answer: answer.to_owned(),
                })
                .collect(),
        }
    }

    /// Validates every configured card and builds the deck.
    ///
    /// # Errors
    ///
    /// Returns a `CardError` for the first invalid card, or
    /// `DeckError::Empty` when the config holds no cards at all.
    pub fn into_deck(self) -> Result<Deck, DeckConfigError> {
        let cards = self
            .cards
            .into_iter()
            .map(|card| Card::new(card.question, card.answer))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Deck::new(cards)?)
    }
}
