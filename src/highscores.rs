//! Session high score
//!
//! One number, held in memory for the lifetime of the page. It survives run
//! resets and tab pauses, and deliberately nothing else: closing the page
//! starts the session over, so there is no storage behind it.

use serde::{Deserialize, Serialize};

/// Best score achieved this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBest {
    best: u32,
}

impl SessionBest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record so far (0 before any run has ended)
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Would this score set a new record?
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Fold a finished run's score in; true if it set a new record
    pub fn observe(&mut self, score: u32) -> bool {
        if self.qualifies(score) {
            self.best = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_record() {
        let best = SessionBest::new();
        assert_eq!(best.best(), 0);
        assert!(!best.qualifies(0));
        assert!(best.qualifies(10));
    }

    #[test]
    fn observe_records_a_new_best() {
        let mut best = SessionBest::new();
        assert!(best.observe(50));
        assert_eq!(best.best(), 50);
    }

    #[test]
    fn observe_ignores_lower_scores() {
        let mut best = SessionBest::new();
        best.observe(50);
        assert!(!best.observe(30));
        assert_eq!(best.best(), 50);
    }

    #[test]
    fn matching_the_record_is_not_a_new_record() {
        let mut best = SessionBest::new();
        best.observe(50);
        assert!(!best.observe(50));
        assert_eq!(best.best(), 50);
    }
}
