//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::{CardError, DeckError};

/// Errors emitted while loading a deck configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckConfigError {
    #[error("failed to read deck file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse deck file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Card(#[from] CardError),

    #[error(transparent)]
    Deck(#[from] DeckError),
}
