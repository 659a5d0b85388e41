mod card;
mod deck;
mod score;

pub use card::{Card, CardError};
pub use deck::{Deck, DeckError};
pub use score::Score;
