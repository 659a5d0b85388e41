use serde::Serialize;

use quiz_core::Session;

/// Rendering projection published after every session state change.
///
/// Any frontend (terminal, web, test harness) can render the whole
/// display from one of these; nothing else about the session needs to be
/// observable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub question: String,
    pub answer: String,
    pub is_flipped: bool,
    /// True when scoring controls should be offered: answer face visible
    /// and seen, no advance pending.
    pub show_scoring: bool,
    /// 1-based position of the displayed card.
    pub position: usize,
    pub total: usize,
    /// e.g. `Card 3 of 10`
    pub progress_label: String,
    /// e.g. `Score: 1/2 (50%)`; the percentage appears once something
    /// has been answered.
    pub score_label: String,
}

impl SessionView {
    #[must_use]
    pub fn project(session: &Session) -> Self {
        let card = session.current_card();
        let stats = session.stats();

        let mut score_label = format!("Score: {}/{}", stats.correct, stats.total_answered);
        if stats.total_answered > 0 {
            score_label.push_str(&format!(" ({}%)", stats.percentage));
        }

        Self {
            question: card.question().to_owned(),
            answer: card.answer().to_owned(),
            is_flipped: session.is_flipped(),
            show_scoring: session.show_scoring(),
            position: stats.current_card,
            total: stats.total_cards,
            progress_label: format!("Card {} of {}", stats.current_card, stats.total_cards),
            score_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Card, Deck};
    use quiz_core::time::fixed_now;

    fn build_session() -> Session {
        let cards = vec![
            Card::new("Q1", "A1").unwrap(),
            Card::new("Q2", "A2").unwrap(),
        ];
        Session::new(Deck::new(cards).unwrap(), fixed_now())
    }

    #[test]
    fn fresh_session_projects_question_face() {
        let session = build_session();
        let view = SessionView::project(&session);

        assert_eq!(view.question, "Q1");
        assert!(!view.is_flipped);
        assert!(!view.show_scoring);
        assert_eq!(view.progress_label, "Card 1 of 2");
        assert_eq!(view.score_label, "Score: 0/0");
    }

    #[test]
    fn score_label_gains_percentage_once_answered() {
        let mut session = build_session();
        session.flip();
        let ticket = session.mark_answer(true).unwrap();
        session.complete_auto_advance(ticket);

        let view = SessionView::project(&session);
        assert_eq!(view.score_label, "Score: 1/1 (100%)");
        assert_eq!(view.progress_label, "Card 2 of 2");
    }

    #[test]
    fn scoring_hidden_while_locked() {
        let mut session = build_session();
        session.flip();
        let _ticket = session.mark_answer(false).unwrap();

        let view = SessionView::project(&session);
        assert!(view.is_flipped);
        assert!(!view.show_scoring);
    }
}
