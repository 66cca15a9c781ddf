mod assessment;
mod courses;
mod dashboard;
mod learning_path;
mod lesson;
mod login;
mod not_found;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentView;
pub use courses::CoursesView;
pub use dashboard::DashboardView;
pub use learning_path::LearningPathView;
pub use lesson::LessonView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use state::ViewError;

/// Class for a selectable answer button.
pub(crate) fn option_class(selected: Option<usize>, index: usize) -> &'static str {
    if selected == Some(index) {
        "option selected"
    } else {
        "option"
    }
}
