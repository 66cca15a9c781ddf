use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use planner_core::model::{CourseId, Level, TopicId};

use crate::guard::RouteGuard;
use crate::views::{
    AssessmentView, CoursesView, DashboardView, LearningPathView, LessonView, LoginView,
    NotFoundView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LoginView)] Login {},
    #[layout(ProtectedLayout)]
        #[route("/courses", CoursesView)] Courses {},
        #[route("/path/:course_id", LearningPathView)] LearningPath { course_id: CourseId },
        #[route("/assessment/:course_id/:level", AssessmentView)] Assessment { course_id: CourseId, level: Level },
        #[route("/dashboard/:course_id/:level", DashboardView)] Dashboard { course_id: CourseId, level: Level },
        #[route("/lesson/:topic_id", LessonView)] Lesson { topic_id: TopicId },
    #[end_layout]
    #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    /// The screen anonymous users are sent to.
    #[must_use]
    pub fn entry() -> Self {
        Route::Login {}
    }
}

/// Every protected route renders through here, so nothing bypasses the guard.
#[component]
fn ProtectedLayout() -> Element {
    rsx! {
        RouteGuard {
            Outlet::<Route> {}
        }
    }
}
