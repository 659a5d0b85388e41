use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::time::Instant;

use quiz_core::{Session, SessionError};

use crate::view::SessionView;

/// Delay between a recorded score and the automatic advance to the next
/// card, so the user sees the tally change before the view does.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(1000);

/// Presentation window of a flip animation. A second flip arriving inside
/// the window is dropped; this is an input debounce, not a session rule.
pub const FLIP_WINDOW: Duration = Duration::from_millis(600);

/// Result of a flip as seen by the frontend: the new orientation and the
/// text of the face now shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipResult {
    pub is_flipped: bool,
    pub face: String,
}

struct DriverInner {
    session: Mutex<Session>,
    projection: watch::Sender<SessionView>,
    advance_delay: Duration,
    flip_window: Duration,
    last_flip: Mutex<Option<Instant>>,
}

impl DriverInner {
    fn publish(&self, session: &Session) {
        self.projection.send_replace(SessionView::project(session));
    }
}

/// Async front door to a [`Session`].
///
/// Owns the session, applies the timing contract (delayed auto-advance,
/// flip debounce), and publishes a fresh [`SessionView`] on a watch
/// channel after every state change, including timer-fired ones. Rejected
/// operations are logged and returned; none of them are fatal.
///
/// A manual navigation during the scoring delay supersedes the pending
/// auto-advance: the sleeping task still wakes, finds its ticket stale,
/// and does nothing.
#[derive(Clone)]
pub struct SessionDriver {
    inner: Arc<DriverInner>,
}

impl SessionDriver {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self::with_timing(session, AUTO_ADVANCE_DELAY, FLIP_WINDOW)
    }

    /// Builds a driver with explicit delays. Production code wants
    /// [`Self::new`]; this exists for callers that tune the contract.
    #[must_use]
    pub fn with_timing(session: Session, advance_delay: Duration, flip_window: Duration) -> Self {
        let (projection, _) = watch::channel(SessionView::project(&session));
        Self {
            inner: Arc::new(DriverInner {
                session: Mutex::new(session),
                projection,
                advance_delay,
                flip_window,
                last_flip: Mutex::new(None),
            }),
        }
    }

    /// A receiver over the rendering projection. The current view is
    /// available immediately; every state change publishes a new one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.inner.projection.subscribe()
    }

    /// Snapshot of the current rendering projection.
    pub async fn view(&self) -> SessionView {
        let session = self.inner.session.lock().await;
        SessionView::project(&session)
    }

    /// Snapshot of progress and accuracy.
    pub async fn stats(&self) -> quiz_core::SessionStats {
        let session = self.inner.session.lock().await;
        session.stats()
    }

    /// Flips the current card, unless a flip is still within its
    /// animation window (then the input is dropped and `None` returned).
    pub async fn flip(&self) -> Option<FlipResult> {
        let now = Instant::now();
        {
            let mut last_flip = self.inner.last_flip.lock().await;
            if let Some(previous) = *last_flip {
                if now.duration_since(previous) < self.inner.flip_window {
                    tracing::debug!("flip dropped: animation window still open");
                    return None;
                }
            }
            *last_flip = Some(now);
        }

        let mut session = self.inner.session.lock().await;
        let outcome = session.flip();
        let result = FlipResult {
            is_flipped: outcome.is_flipped,
            face: outcome.face.to_owned(),
        };
        tracing::debug!(flipped = result.is_flipped, "card flipped");
        self.inner.publish(&session);
        Some(result)
    }

    /// Advances to the next card, superseding any pending auto-advance.
    pub async fn next(&self) {
        let mut session = self.inner.session.lock().await;
        session.next();
        self.inner.publish(&session);
    }

    /// Steps back to the previous card, superseding any pending auto-advance.
    pub async fn previous(&self) {
        let mut session = self.inner.session.lock().await;
        session.previous();
        self.inner.publish(&session);
    }

    /// Jumps to the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` (logged, state untouched) for an
    /// index outside the deck.
    pub async fn load_card(&self, index: usize) -> Result<(), SessionError> {
        let mut session = self.inner.session.lock().await;
        match session.load_card(index) {
            Ok(()) => {
                self.inner.publish(&session);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("ignoring card load: {err}");
                Err(err)
            }
        }
    }

    /// Records a self-score and schedules the automatic advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotYetRevealed` or
    /// `SessionError::ScoringLocked` (logged, no score mutation).
    pub async fn mark_answer(&self, is_correct: bool) -> Result<(), SessionError> {
        let ticket = {
            let mut session = self.inner.session.lock().await;
            match session.mark_answer(is_correct) {
                Ok(ticket) => {
                    tracing::debug!(is_correct, "answer marked");
                    self.inner.publish(&session);
                    ticket
                }
                Err(err) => {
                    tracing::warn!("ignoring mark: {err}");
                    return Err(err);
                }
            }
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.advance_delay).await;
            let mut session = inner.session.lock().await;
            if session.complete_auto_advance(ticket) {
                inner.publish(&session);
            } else {
                tracing::debug!("pending auto-advance superseded");
            }
        });

        Ok(())
    }

    /// Returns to card 0 with a zero score; deck order is untouched.
    pub async fn reset(&self) {
        let mut session = self.inner.session.lock().await;
        session.reset();
        tracing::debug!("session reset");
        self.inner.publish(&session);
    }

    /// Shuffles the deck and restarts from card 0; the score survives.
    pub async fn shuffle(&self) {
        let mut session = self.inner.session.lock().await;
        session.shuffle_deck(&mut rand::rng());
        tracing::debug!("deck shuffled");
        self.inner.publish(&session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Card, Deck};
    use quiz_core::time::fixed_now;

    fn build_driver(n: usize) -> SessionDriver {
        let cards = (1..=n)
            .map(|i| Card::new(format!("Q{i}"), format!("A{i}")).unwrap())
            .collect();
        let session = Session::new(Deck::new(cards).unwrap(), fixed_now());
        SessionDriver::new(session)
    }

    #[tokio::test(start_paused = true)]
    async fn flip_reports_the_answer_face() {
        let driver = build_driver(3);
        let result = driver.flip().await.unwrap();
        assert!(result.is_flipped);
        assert_eq!(result.face, "A1");
    }

    #[tokio::test(start_paused = true)]
    async fn second_flip_inside_window_is_dropped() {
        let driver = build_driver(3);
        assert!(driver.flip().await.is_some());
        assert!(driver.flip().await.is_none());

        tokio::time::advance(FLIP_WINDOW + Duration::from_millis(10)).await;
        let result = driver.flip().await.unwrap();
        assert!(!result.is_flipped);
    }

    #[tokio::test(start_paused = true)]
    async fn mark_before_reveal_is_rejected_and_view_unchanged() {
        let driver = build_driver(3);
        let before = driver.view().await;

        let err = driver.mark_answer(true).await.unwrap_err();
        assert_eq!(err, SessionError::NotYetRevealed);
        assert_eq!(driver.view().await, before);
    }

    #[tokio::test(start_paused = true)]
    async fn load_card_out_of_range_is_rejected() {
        let driver = build_driver(3);
        let err = driver.load_card(9).await.unwrap_err();
        assert_eq!(err, SessionError::OutOfRange { index: 9, len: 3 });
        assert_eq!(driver.view().await.position, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_observe_every_operation() {
        let driver = build_driver(3);
        let mut rx = driver.subscribe();
        assert_eq!(rx.borrow_and_update().position, 1);

        driver.next().await;
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().position, 2);

        driver.previous().await;
        rx.changed().await.unwrap();
        let view = rx.borrow_and_update().clone();
        assert_eq!(view.position, 1);
        assert!(!view.is_flipped);
    }
}
