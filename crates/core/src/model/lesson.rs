use crate::catalog::{KnowledgeCheckQuestion, LessonStep};
use crate::error::LessonError;

/// Which lesson step the learner is looking at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonProgress {
    steps: &'static [LessonStep],
    current: usize,
}

impl LessonProgress {
    #[must_use]
    pub fn new(steps: &'static [LessonStep]) -> Self {
        Self { steps, current: 0 }
    }

    #[must_use]
    pub fn steps(&self) -> &'static [LessonStep] {
        self.steps
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_step(&self) -> Option<&'static LessonStep> {
        self.steps.get(self.current)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }

    /// # Errors
    ///
    /// Returns `LessonError::StepOutOfRange` if there is no step at `index`.
    pub fn select(&mut self, index: usize) -> Result<(), LessonError> {
        if index >= self.steps.len() {
            return Err(LessonError::StepOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.current = index;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    Tutor,
    Learner,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Local chat log for the tutor widget. Nothing is sent anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorTranscript {
    messages: Vec<ChatMessage>,
}

impl TutorTranscript {
    #[must_use]
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Tutor,
                text: greeting.into(),
            }],
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a learner message. Blank input is ignored and returns false.
    pub fn send(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::Learner,
            text: text.to_string(),
        });
        true
    }
}

/// Unscored single-question quiz shown beside a lesson.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeCheck {
    question: &'static KnowledgeCheckQuestion,
    selected: Option<usize>,
}

impl KnowledgeCheck {
    #[must_use]
    pub fn new(question: &'static KnowledgeCheckQuestion) -> Self {
        Self {
            question,
            selected: None,
        }
    }

    #[must_use]
    pub fn question(&self) -> &'static KnowledgeCheckQuestion {
        self.question
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// # Errors
    ///
    /// Returns `LessonError::OptionOutOfRange` if there is no option at `index`.
    pub fn select(&mut self, index: usize) -> Result<(), LessonError> {
        let len = self.question.options.len();
        if index >= len {
            return Err(LessonError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }
}
