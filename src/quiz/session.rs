use log::{debug, info};
use rand::Rng;

use crate::quiz::bank::QuestionBank;
use crate::quiz::{Question, QuizError, QUIZ_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress { position: usize },
    Finished,
}

/// One attempt at the quiz: ten sampled questions walked through in order.
///
/// Owned by whatever drives the quiz window and handed to it once per frame.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    question_ids: Vec<usize>,
    position: usize,
    answers: Vec<Option<usize>>,
    revealed: Vec<bool>,
    finished: bool,
}

impl<'a> QuizSession<'a> {
    pub fn new<R: Rng + ?Sized>(bank: &'a QuestionBank, rng: &mut R) -> Result<Self, QuizError> {
        let question_ids = bank.sample_indices(QUIZ_LENGTH, rng)?;
        debug!("Sampled questions {:?}", question_ids);
        info!("Starting a new quiz of {} questions", question_ids.len());

        Ok(Self {
            bank,
            question_ids,
            position: 0,
            answers: vec![None; QUIZ_LENGTH],
            revealed: vec![false; QUIZ_LENGTH],
            finished: false,
        })
    }

    /// Throws away all progress and draws a fresh set of questions.
    ///
    /// On error the session is left untouched.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        bank: &'a QuestionBank,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        *self = Self::new(bank, rng)?;
        Ok(())
    }

    pub fn state(&self) -> QuizState {
        if self.finished {
            QuizState::Finished
        } else {
            QuizState::InProgress {
                position: self.position,
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.question_ids.len()
    }

    pub fn question_ids(&self) -> &[usize] {
        &self.question_ids
    }

    /// The option recorded for `position`, if any.
    pub fn selected(&self, position: usize) -> Option<usize> {
        self.answers.get(position).copied().flatten()
    }

    pub fn is_revealed(&self, position: usize) -> bool {
        self.revealed.get(position).copied().unwrap_or(false)
    }

    pub(crate) fn question_at(&self, position: usize) -> Result<&'a Question, QuizError> {
        let id = *self
            .question_ids
            .get(position)
            .ok_or(QuizError::QuestionOutOfRange {
                index: position,
                size: self.question_ids.len(),
            })?;
        self.bank.get(id)
    }

    pub fn current_question(&self) -> Result<&'a Question, QuizError> {
        if self.finished {
            return Err(QuizError::NotInProgress);
        }
        self.question_at(self.position)
    }

    /// Records `option_index` as the answer to the current question and reveals feedback.
    ///
    /// Picking again on the same question replaces the answer; feedback stays visible.
    pub fn select_option(&mut self, option_index: usize) -> Result<(), QuizError> {
        let question = self.current_question()?;
        if option_index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index: option_index,
                count: question.options.len(),
            });
        }

        debug!(
            "Question {}: selected option {} (correct is {})",
            self.position + 1,
            option_index,
            question.correct_index
        );
        self.answers[self.position] = Some(option_index);
        self.revealed[self.position] = true;
        Ok(())
    }

    /// Moves to the next question, or finishes after the last one.
    ///
    /// Unanswered questions may be skipped. Does nothing once finished.
    pub fn advance(&mut self) -> QuizState {
        if self.finished {
            return QuizState::Finished;
        }

        if self.position + 1 < self.question_ids.len() {
            self.position += 1;
            debug!("Advanced to question {}", self.position + 1);
        } else {
            self.finished = true;
            if let Ok(score) = self.score() {
                info!("Quiz finished with {}/{} correct", score, self.len());
            }
        }
        self.state()
    }

    /// Number of questions answered correctly. Unanswered ones count as wrong.
    pub fn score(&self) -> Result<usize, QuizError> {
        if !self.finished {
            return Err(QuizError::NotFinished);
        }

        let mut score = 0;
        for (position, answer) in self.answers.iter().enumerate() {
            let question = self.question_at(position)?;
            if answer.map_or(false, |a| question.is_correct(a)) {
                score += 1;
            }
        }
        Ok(score)
    }
}
