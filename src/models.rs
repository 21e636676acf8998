use serde::Serialize;
use std::fmt;
use std::time::Duration;

pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question from the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; OPTIONS_PER_QUESTION],
    pub correct_answer: &'static str,
    pub explanation: &'static str,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

/// What was recorded for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "option", rename_all = "snake_case")]
pub enum AnswerRecord {
    Answered(String),
    Skipped,
    Expired,
    Unanswered,
}

impl AnswerRecord {
    /// Only a real answer can ever score.
    pub fn is_correct_for(&self, question: &Question) -> bool {
        match self {
            AnswerRecord::Answered(text) => question.is_correct(text),
            _ => false,
        }
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerRecord::Answered(text) => f.write_str(text),
            AnswerRecord::Skipped => f.write_str("Skipped"),
            AnswerRecord::Expired => f.write_str("Time expired"),
            AnswerRecord::Unanswered => f.write_str("Not answered"),
        }
    }
}

/// The answer and the time spent, written together when a question is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub answer: AnswerRecord,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    QuizQuitConfirm,
    Summary,
}
