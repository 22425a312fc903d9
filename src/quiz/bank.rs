use std::io::Read;

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::{Question, QuizError, EXPECTED_OPTION_COUNT};

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

/// Read-only catalog of multiple-choice questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidCatalog(
                "catalog holds no questions".to_string(),
            ));
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate()?;
            // The quiz window drew exactly four radio buttons, so these used to mis-render
            if question.options.len() != EXPECTED_OPTION_COUNT {
                warn!(
                    "Question #{} has {} options instead of {}",
                    index,
                    question.options.len(),
                    EXPECTED_OPTION_COUNT
                );
            }
        }
        info!("Loaded {} questions", questions.len());
        Ok(Self { questions })
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, QuizError> {
        Self::new(serde_json::from_str(EMBEDDED_CATALOG)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuizError> {
        Self::new(serde_json::from_reader(reader)?)
    }

    pub fn size(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions
            .get(index)
            .ok_or(QuizError::QuestionOutOfRange {
                index,
                size: self.questions.len(),
            })
    }

    /// Picks `count` distinct question indices in random order.
    ///
    /// Shuffles every index and keeps the first `count`, so no question repeats
    /// within a quiz and the order differs between quizzes.
    pub fn sample_indices<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, QuizError> {
        if count > self.questions.len() {
            return Err(QuizError::SampleTooLarge {
                requested: count,
                available: self.questions.len(),
            });
        }

        let mut indices = (0..self.questions.len()).collect::<Vec<_>>();
        indices.shuffle(rng);
        indices.truncate(count);
        Ok(indices)
    }
}
