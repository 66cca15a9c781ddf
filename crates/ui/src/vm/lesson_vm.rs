use planner_core::catalog::{self, Lesson};
use planner_core::model::{KnowledgeCheck, LessonProgress, TopicId, TutorTranscript};

use crate::views::ViewError;
use crate::vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    SelectStep(usize),
    EditDraft(String),
    SendDraft,
    SelectOption(usize),
    QuickQuiz,
}

/// Everything the lesson page keeps while it is open. Nothing is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    lesson: Lesson,
    overview_html: String,
    progress: LessonProgress,
    transcript: TutorTranscript,
    check: KnowledgeCheck,
    draft: String,
}

impl LessonVm {
    /// # Errors
    ///
    /// Returns `ViewError::NotFound` when the topic is not in the catalog.
    pub fn load(topic_id: &TopicId) -> Result<Self, ViewError> {
        let lesson = catalog::lesson(topic_id.as_str()).map_err(|_| ViewError::NotFound)?;
        Ok(Self {
            overview_html: markdown_to_html(&lesson.overview_markdown),
            progress: LessonProgress::new(lesson.steps),
            transcript: TutorTranscript::with_greeting(lesson.tutor_greeting.clone()),
            check: KnowledgeCheck::new(lesson.knowledge_check),
            draft: String::new(),
            lesson,
        })
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// "Course • Topic" heading.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} • {}", self.lesson.course.title, self.lesson.topic.title)
    }

    #[must_use]
    pub fn overview_html(&self) -> &str {
        &self.overview_html
    }

    #[must_use]
    pub fn progress(&self) -> &LessonProgress {
        &self.progress
    }

    #[must_use]
    pub fn current_step_label(&self) -> String {
        let title = self.progress.current_step().map_or("", |step| step.title);
        format!("Current: {title}")
    }

    #[must_use]
    pub fn transcript(&self) -> &TutorTranscript {
        &self.transcript
    }

    #[must_use]
    pub fn check(&self) -> &KnowledgeCheck {
        &self.check
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn apply(&mut self, intent: LessonIntent) {
        match intent {
            LessonIntent::SelectStep(index) => {
                let _ = self.progress.select(index);
            }
            LessonIntent::EditDraft(text) => self.draft = text,
            LessonIntent::SendDraft => {
                if self.transcript.send(&self.draft) {
                    self.draft.clear();
                }
            }
            LessonIntent::SelectOption(index) => {
                let _ = self.check.select(index);
            }
            LessonIntent::QuickQuiz => self.check.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::model::ChatRole;

    fn vm() -> LessonVm {
        LessonVm::load(&TopicId::new("html-basics")).unwrap()
    }

    #[test]
    fn unknown_topic_is_not_found() {
        assert_eq!(
            LessonVm::load(&TopicId::new("knitting")),
            Err(ViewError::NotFound)
        );
    }

    #[test]
    fn overview_is_rendered_markdown() {
        let vm = vm();
        assert!(vm.overview_html().contains("<strong>"));
        assert!(vm.heading().starts_with("Web Development • "));
    }

    #[test]
    fn sending_clears_draft_and_blank_is_ignored() {
        let mut vm = vm();
        vm.apply(LessonIntent::EditDraft("   ".into()));
        vm.apply(LessonIntent::SendDraft);
        assert_eq!(vm.transcript().messages().len(), 1);
        assert_eq!(vm.draft(), "   ");

        vm.apply(LessonIntent::EditDraft("What is semantic HTML?".into()));
        vm.apply(LessonIntent::SendDraft);
        assert_eq!(vm.draft(), "");
        let last = vm.transcript().messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Learner);
        assert_eq!(last.text, "What is semantic HTML?");
    }

    #[test]
    fn step_pointer_and_quick_quiz() {
        let mut vm = vm();
        assert_eq!(vm.current_step_label(), "Current: Intro");
        vm.apply(LessonIntent::SelectStep(3));
        assert_eq!(vm.current_step_label(), "Current: Review");
        vm.apply(LessonIntent::SelectStep(10));
        assert_eq!(vm.progress().current_index(), 3);

        vm.apply(LessonIntent::SelectOption(0));
        assert_eq!(vm.check().selected(), Some(0));
        vm.apply(LessonIntent::QuickQuiz);
        assert_eq!(vm.check().selected(), None);
    }
}
