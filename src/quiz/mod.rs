pub mod bank;
pub mod review;
pub mod session;

use thiserror::Error;

/// Number of questions drawn for one quiz attempt.
pub const QUIZ_LENGTH: usize = 10;

/// How many option slots the original quiz window rendered.
pub const EXPECTED_OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }

    /// Checks `correct_index` points at one of the options.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.correct_index >= self.options.len() {
            return Err(QuizError::InvalidCatalog(format!(
                "question {:?} has correct index {} but only {} options",
                self.text,
                self.correct_index,
                self.options.len()
            )));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Question index {index} out of range (catalog holds {size})")]
    QuestionOutOfRange { index: usize, size: usize },

    #[error("Option index {index} out of range (question has {count} options)")]
    OptionOutOfRange { index: usize, count: usize },

    #[error("Cannot sample {requested} questions from a catalog of {available}")]
    SampleTooLarge { requested: usize, available: usize },

    #[error("Quiz is already finished")]
    NotInProgress,

    #[error("Quiz is not finished yet")]
    NotFinished,

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct_index: usize) -> Question {
        Question {
            text: "Linux founded by".to_string(),
            options: vec!["Richard Stallman".to_string(), "Linus Torvalds".to_string()],
            correct_index,
        }
    }

    #[test]
    fn test_is_correct() {
        let q = question(1);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn test_validate_rejects_dangling_correct_index() {
        assert!(question(1).validate().is_ok());
        assert!(matches!(
            question(2).validate(),
            Err(QuizError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let error = QuizError::SampleTooLarge {
            requested: 10,
            available: 3,
        };
        assert_eq!(
            error.to_string(),
            "Cannot sample 10 questions from a catalog of 3"
        );
    }
}
