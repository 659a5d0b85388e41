#![forbid(unsafe_code)]

pub mod deck_config;
pub mod error;
pub mod session_driver;
pub mod view;

pub use quiz_core::Clock;

pub use deck_config::{CardConfig, DeckConfig};
pub use error::DeckConfigError;
pub use session_driver::{AUTO_ADVANCE_DELAY, FLIP_WINDOW, FlipResult, SessionDriver};
pub use view::SessionView;
