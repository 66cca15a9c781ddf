use thiserror::Error;

/// A route parameter that does not name anything in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseIdError {
    #[error("unknown course id: {0}")]
    UnknownCourse(String),
    #[error("unknown level: {0}")]
    UnknownLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no lesson for topic {0}")]
    UnknownTopic(String),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("user identity must be a JSON object")]
    IdentityNotObject,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("assessment has no questions")]
    Empty,
    #[error("option {index} is out of range for a question with {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("no answer selected")]
    NoAnswerSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LessonError {
    #[error("step {index} is out of range for a lesson with {len} steps")]
    StepOutOfRange { index: usize, len: usize },
    #[error("option {index} is out of range for a check with {len} options")]
    OptionOutOfRange { index: usize, len: usize },
}
