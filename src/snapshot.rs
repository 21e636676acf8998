use crate::models::{AnswerRecord, Question, Resolution};
use serde::Serialize;
use std::time::Duration;

/// Read-only view of a session, recomputed on demand for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub current_question: Option<Question>,
    pub current_index: usize,
    pub total: usize,
    pub completed: bool,
    pub score: usize,
    pub remaining: Duration,
    pub total_elapsed: Duration,
    /// Set once the current question has been answered, before advancing.
    pub resolution: Option<Resolution>,
    pub results: Option<Results>,
}

impl Snapshot {
    /// Fraction of questions already passed, for progress bars.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current_index.min(self.total) as f64 / self.total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewEntry {
    pub number: usize,
    pub question: Question,
    pub answer: AnswerRecord,
    pub correct: bool,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Results {
    pub entries: Vec<ReviewEntry>,
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub total_elapsed: Duration,
    pub average_per_question: Duration,
}

impl Results {
    pub fn new(entries: Vec<ReviewEntry>, score: usize, total_elapsed: Duration) -> Self {
        let total = entries.len();
        let (percentage, average_per_question) = if total == 0 {
            (0.0, Duration::ZERO)
        } else {
            (
                score as f64 / total as f64 * 100.0,
                total_elapsed / total as u32,
            )
        };

        Self {
            entries,
            score,
            total,
            percentage,
            total_elapsed,
            average_per_question,
        }
    }
}
