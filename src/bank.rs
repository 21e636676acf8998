use crate::error::QuizError;
use crate::models::Question;

pub const QUESTION_BANK: [Question; 5] = [
    Question {
        text: "What is the output of print(2 ** 3)?",
        options: ["6", "8", "9", "5"],
        correct_answer: "8",
        explanation: "The ** operator in Python represents exponentiation. 2 ** 3 = 2³ = 8",
    },
    Question {
        text: "Which of the following is NOT a Python data type?",
        options: ["List", "Dictionary", "Tuple", "Array"],
        correct_answer: "Array",
        explanation: "Array is not a built-in data type in Python. Python has lists instead, though NumPy provides array functionality.",
    },
    Question {
        text: "What does the 'len()' function do in Python?",
        options: [
            "Returns the length of an object",
            "Returns the largest item in an iterable",
            "Rounds a number to the nearest integer",
            "Returns the smallest item in an iterable",
        ],
        correct_answer: "Returns the length of an object",
        explanation: "The len() function returns the number of items in an object like a string, list, tuple, etc.",
    },
    Question {
        text: "Which method is used to add an element to the end of a list?",
        options: ["append()", "extend()", "insert()", "add()"],
        correct_answer: "append()",
        explanation: "The append() method adds a single element to the end of a list.",
    },
    Question {
        text: "What is the correct way to create a function in Python?",
        options: [
            "function myFunc():",
            "def myFunc():",
            "create myFunc():",
            "func myFunc():",
        ],
        correct_answer: "def myFunc():",
        explanation: "In Python, functions are defined using the 'def' keyword followed by the function name and parentheses.",
    },
];

/// A validated, immutable set of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let bank = Self { questions };
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        for (index, question) in bank.questions.iter().enumerate() {
            for (i, option) in question.options.iter().enumerate() {
                if question.options[..i].contains(option) {
                    return Err(QuizError::DuplicateOption {
                        index,
                        question: question.text.to_string(),
                        option: option.to_string(),
                    });
                }
            }

            if !question.options.contains(&question.correct_answer) {
                return Err(QuizError::CorrectAnswerMissing {
                    index,
                    question: question.text.to_string(),
                    answer: question.correct_answer.to_string(),
                });
            }
        }

        Ok(bank)
    }

    pub fn builtin() -> Result<Self, QuizError> {
        Self::new(QUESTION_BANK.to_vec())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_is_valid() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.len(), 5);
        assert_eq!(bank.questions()[0].correct_answer, "8");
    }

    #[test]
    fn test_empty_bank_rejected() {
        let result = QuestionBank::new(Vec::new());
        assert!(matches!(result, Err(QuizError::EmptyBank)));
    }

    #[test]
    fn test_single_question_bank_is_not_empty() {
        let bank = QuestionBank::new(vec![QUESTION_BANK[2]]).unwrap();
        assert!(!bank.is_empty());
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_missing_correct_answer_rejected() {
        let mut questions = QUESTION_BANK.to_vec();
        questions[3].correct_answer = "push()";
        match QuestionBank::new(questions) {
            Err(QuizError::CorrectAnswerMissing { index, answer, .. }) => {
                assert_eq!(index, 3);
                assert_eq!(answer, "push()");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_option_rejected() {
        let mut questions = QUESTION_BANK.to_vec();
        questions[1].options = ["List", "Tuple", "Tuple", "Array"];
        match QuestionBank::new(questions) {
            Err(QuizError::DuplicateOption { index, option, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(option, "Tuple");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_error_message_names_question() {
        let mut questions = QUESTION_BANK.to_vec();
        questions[0].correct_answer = "7";
        let err = QuestionBank::new(questions).unwrap_err();
        assert!(err.to_string().contains("print(2 ** 3)"));
    }
}
