#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod time;

pub use error::Error;
pub use session::{AdvanceTicket, FlipOutcome, Session, SessionError, SessionStats};
pub use time::Clock;
