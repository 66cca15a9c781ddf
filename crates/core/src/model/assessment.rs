use crate::error::AssessmentError;

/// Seconds on the clock when a question is shown.
pub const QUESTION_TIME_LIMIT_SECS: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

/// What `Assessment::advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentStep {
    /// Moved to the question at this zero-based index.
    Advanced { index: usize },
    /// The last question was answered.
    Completed,
}

/// Ephemeral state of one assessment run.
///
/// Answers are not recorded or scored; the selection only gates `advance`.
/// The countdown stops at zero and never moves to another question on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assessment {
    questions: &'static [Question],
    current: usize,
    selected: Option<usize>,
    remaining_secs: u32,
}

impl Assessment {
    /// # Errors
    ///
    /// Returns `AssessmentError::Empty` when `questions` is empty.
    pub fn new(questions: &'static [Question]) -> Result<Self, AssessmentError> {
        if questions.is_empty() {
            return Err(AssessmentError::Empty);
        }
        Ok(Self {
            questions,
            current: 0,
            selected: None,
            remaining_secs: QUESTION_TIME_LIMIT_SECS,
        })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.selected.is_some()
    }

    /// Share of the questions reached so far, counting the current one.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let reached = u32::try_from(self.current + 1).unwrap_or(u32::MAX);
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        reached.saturating_mul(100) / total
    }

    /// # Errors
    ///
    /// Returns `AssessmentError::OptionOutOfRange` if the current question has
    /// no option at `index`.
    pub fn select(&mut self, index: usize) -> Result<(), AssessmentError> {
        let len = self.current_question().options.len();
        if index >= len {
            return Err(AssessmentError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// One second elapsed. Returns whether any time is left afterwards.
    pub fn tick(&mut self) -> bool {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.remaining_secs > 0
    }

    /// # Errors
    ///
    /// Returns `AssessmentError::NoAnswerSelected` until an option is selected.
    pub fn advance(&mut self) -> Result<AssessmentStep, AssessmentError> {
        if self.selected.is_none() {
            return Err(AssessmentError::NoAnswerSelected);
        }
        if self.is_last() {
            return Ok(AssessmentStep::Completed);
        }
        self.current += 1;
        self.selected = None;
        self.remaining_secs = QUESTION_TIME_LIMIT_SECS;
        Ok(AssessmentStep::Advanced {
            index: self.current,
        })
    }
}
