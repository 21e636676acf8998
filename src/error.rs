use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyBank,
    #[error("question {index} (\"{question}\") lists option \"{option}\" more than once")]
    DuplicateOption {
        index: usize,
        question: String,
        option: String,
    },
    #[error("question {index} (\"{question}\") has correct answer \"{answer}\" which is not one of its options")]
    CorrectAnswerMissing {
        index: usize,
        question: String,
        answer: String,
    },
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<QuizError> for std::io::Error {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Io(e) => e,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}
