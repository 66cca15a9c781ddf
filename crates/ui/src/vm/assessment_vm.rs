use planner_core::catalog;
use planner_core::model::{Assessment, AssessmentStep, CourseId, Level, Question};

use crate::flow::{FlowEvent, next_route};
use crate::routes::Route;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    Select(usize),
    Next,
    Tick,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssessmentOutcome {
    Stay,
    Finished(Route),
}

/// One run of the placement assessment for a course/level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssessmentVm {
    course_id: CourseId,
    level: Level,
    assessment: Assessment,
}

impl AssessmentVm {
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the course has no questions.
    pub fn new(course_id: CourseId, level: Level) -> Result<Self, ViewError> {
        Self::with_questions(course_id, level, catalog::questions(course_id))
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if `questions` is empty.
    pub fn with_questions(
        course_id: CourseId,
        level: Level,
        questions: &'static [Question],
    ) -> Result<Self, ViewError> {
        let assessment = Assessment::new(questions).map_err(|_| ViewError::Unknown)?;
        Ok(Self {
            course_id,
            level,
            assessment,
        })
    }

    #[must_use]
    pub fn route(&self) -> Route {
        Route::Assessment {
            course_id: self.course_id,
            level: self.level,
        }
    }

    #[must_use]
    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    #[must_use]
    pub fn question_label(&self) -> String {
        format!(
            "Question {} of {}",
            self.assessment.current_index() + 1,
            self.assessment.total()
        )
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        format!("{}s", self.assessment.remaining_secs())
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.assessment.is_last() {
            "Complete Assessment"
        } else {
            "Next Question"
        }
    }

    pub fn apply(&mut self, intent: AssessmentIntent) -> AssessmentOutcome {
        match intent {
            AssessmentIntent::Select(index) => {
                // The view only offers existing options.
                let _ = self.assessment.select(index);
                AssessmentOutcome::Stay
            }
            AssessmentIntent::Tick => {
                self.assessment.tick();
                AssessmentOutcome::Stay
            }
            AssessmentIntent::Next => match self.assessment.advance() {
                Ok(AssessmentStep::Completed) => next_route(&self.route(), FlowEvent::CompleteAssessment)
                    .map_or(AssessmentOutcome::Stay, AssessmentOutcome::Finished),
                Ok(AssessmentStep::Advanced { .. }) | Err(_) => AssessmentOutcome::Stay,
            },
        }
    }
}
