use crate::quiz::session::QuizSession;
use crate::quiz::QuizError;

/// How a single option should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct,
    WrongSelection,
}

impl OptionMark {
    fn classify(option_index: usize, correct_index: usize, selected: Option<usize>) -> Self {
        if option_index == correct_index {
            OptionMark::Correct
        } else if selected == Some(option_index) {
            OptionMark::WrongSelection
        } else {
            OptionMark::Neutral
        }
    }
}

/// One line of the end-of-quiz review.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct QuestionResult {
    pub position: usize,
    pub question_id: usize,
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub selected: Option<usize>,
    pub is_correct: bool,
}

impl QuestionResult {
    pub fn option_mark(&self, option_index: usize) -> OptionMark {
        OptionMark::classify(option_index, self.correct_index, self.selected)
    }
}

impl<'a> QuizSession<'a> {
    /// Highlight for an option of the current question; all neutral until something is picked.
    pub fn option_mark(&self, option_index: usize) -> Result<OptionMark, QuizError> {
        let question = self.current_question()?;
        if option_index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                index: option_index,
                count: question.options.len(),
            });
        }
        if !self.is_revealed(self.position()) {
            return Ok(OptionMark::Neutral);
        }
        Ok(OptionMark::classify(
            option_index,
            question.correct_index,
            self.selected(self.position()),
        ))
    }

    pub fn results(&self) -> Result<Vec<QuestionResult>, QuizError> {
        if !self.is_finished() {
            return Err(QuizError::NotFinished);
        }

        self.question_ids()
            .iter()
            .enumerate()
            .map(|(position, &question_id)| -> Result<QuestionResult, QuizError> {
                let question = self.question_at(position)?;
                let selected = self.selected(position);
                Ok(QuestionResult {
                    position,
                    question_id,
                    text: question.text.clone(),
                    options: question.options.clone(),
                    correct_index: question.correct_index,
                    selected,
                    is_correct: selected.map_or(false, |s| question.is_correct(s)),
                })
            })
            .collect()
    }

    /// Share of correct answers, 0 to 100.
    pub fn percentage(&self) -> Result<f32, QuizError> {
        let score = self.score()?;
        Ok(score as f32 * 100.0 / self.len() as f32)
    }
}
