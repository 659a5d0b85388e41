use serde::Serialize;

/// Running tally of self-scored answers for a session.
///
/// Both counters only grow while a session runs; `reset` is the single
/// way back to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    correct: u32,
    wrong: u32,
}

impl Score {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct = self.correct.saturating_add(1);
        } else {
            self.wrong = self.wrong.saturating_add(1);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }

    /// Accuracy as a rounded whole percentage; 0 before anything has been
    /// answered (a defined value, not an error).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u32 {
        let answered = self.answered();
        if answered == 0 {
            return 0;
        }
        let ratio = f64::from(self.correct) / f64::from(answered);
        (ratio * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_starts_at_zero() {
        let score = Score::new();
        assert_eq!(score.correct(), 0);
        assert_eq!(score.wrong(), 0);
        assert_eq!(score.answered(), 0);
        assert_eq!(score.percentage(), 0);
    }

    #[test]
    fn record_increments_exactly_one_counter() {
        let mut score = Score::new();
        score.record(true);
        assert_eq!((score.correct(), score.wrong()), (1, 0));
        score.record(false);
        assert_eq!((score.correct(), score.wrong()), (1, 1));
        assert_eq!(score.answered(), 2);
    }

    #[test]
    fn percentage_rounds_to_nearest_whole() {
        let mut score = Score::new();
        score.record(true);
        score.record(true);
        score.record(false);
        // 2/3 = 66.66..% rounds to 67
        assert_eq!(score.percentage(), 67);

        let mut score = Score::new();
        score.record(true);
        score.record(false);
        assert_eq!(score.percentage(), 50);
    }

    #[test]
    fn reset_clears_both_counters() {
        let mut score = Score::new();
        score.record(true);
        score.record(false);
        score.reset();
        assert_eq!(score, Score::new());
    }
}
