//! Transitions of the course → path → assessment → dashboard → lesson wizard.

use dioxus_router::Navigator;
use planner_core::model::{CourseId, Level, TopicId};

use crate::routes::Route;

/// A user action that moves the wizard.
///
/// "Back" is plain history navigation and is not modelled here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEvent {
    Authenticated,
    ExploreCourses,
    SelectCourse(CourseId),
    BackToCourses,
    SelectLevel(Level),
    CompleteAssessment,
    SelectTopic(TopicId),
    GeneratePlanAgain,
    TakeTest,
}

/// Where `event` leads from `from`, or `None` if it is not valid there.
#[must_use]
pub fn next_route(from: &Route, event: FlowEvent) -> Option<Route> {
    match (from, event) {
        (Route::Login {}, FlowEvent::Authenticated | FlowEvent::ExploreCourses) => {
            Some(Route::Courses {})
        }
        (Route::Courses {}, FlowEvent::SelectCourse(course_id)) => {
            Some(Route::LearningPath { course_id })
        }
        (Route::LearningPath { .. }, FlowEvent::BackToCourses) => Some(Route::Courses {}),
        (Route::LearningPath { course_id }, FlowEvent::SelectLevel(level)) => {
            Some(Route::Assessment {
                course_id: *course_id,
                level,
            })
        }
        (Route::Assessment { course_id, level }, FlowEvent::CompleteAssessment) => {
            Some(Route::Dashboard {
                course_id: *course_id,
                level: *level,
            })
        }
        (Route::Dashboard { .. }, FlowEvent::SelectTopic(topic_id)) => {
            Some(Route::Lesson { topic_id })
        }
        (Route::Dashboard { course_id, .. }, FlowEvent::GeneratePlanAgain) => {
            Some(Route::LearningPath {
                course_id: *course_id,
            })
        }
        (Route::Dashboard { course_id, level }, FlowEvent::TakeTest) => Some(Route::Assessment {
            course_id: *course_id,
            level: *level,
        }),
        _ => None,
    }
}

/// Push the route `event` leads to. Invalid events are logged and ignored.
pub fn advance(navigator: &Navigator, from: &Route, event: FlowEvent) {
    match next_route(from, event.clone()) {
        Some(to) => {
            tracing::debug!(%from, %to, "navigate");
            navigator.push(to);
        }
        None => tracing::warn!(%from, ?event, "ignored flow event"),
    }
}
