mod assessment_vm;
mod course_vm;
mod lesson_vm;
mod login_vm;
mod markdown_vm;

pub use assessment_vm::{AssessmentIntent, AssessmentOutcome, AssessmentVm};
pub use course_vm::{
    CourseCardVm, DashboardVm, PathCardVm, TopicCardVm, course_cards, dashboard, path_cards,
};
pub use lesson_vm::{LessonIntent, LessonVm};
pub use login_vm::{LoginForm, LoginOutcome};
pub use markdown_vm::{markdown_to_html, sanitize_html};
