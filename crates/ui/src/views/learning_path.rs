use dioxus::prelude::*;
use dioxus_router::use_navigator;
use planner_core::catalog;
use planner_core::model::CourseId;

use crate::flow::{self, FlowEvent};
use crate::routes::Route;
use crate::vm::path_cards;

#[component]
pub fn LearningPathView(course_id: CourseId) -> Element {
    let navigator = use_navigator();
    let here = Route::LearningPath { course_id };
    let course = catalog::course(course_id);

    rsx! {
        div { class: "page learning-path",
            button {
                class: "link back",
                onclick: {
                    let here = here.clone();
                    move |_| flow::advance(&navigator, &here, FlowEvent::BackToCourses)
                },
                "← Back to Courses"
            }

            h1 { "{course.title}" }
            p { class: "subtitle", "{course.description}" }

            div { class: "card-grid",
                for path in path_cards() {
                    div {
                        key: "{path.level}",
                        class: "card path-card",
                        onclick: {
                            let here = here.clone();
                            let level = path.level;
                            move |_| flow::advance(&navigator, &here, FlowEvent::SelectLevel(level))
                        },
                        h3 { "{path.title}" }
                        p { "{path.description}" }
                        p { class: "meta",
                            span { "{path.duration}" }
                            span { "{path.lessons_label}" }
                        }
                        div { class: "progress",
                            span { "Progress" }
                            span { "0%" }
                        }
                        button { class: "primary", "Select Path" }
                    }
                }
            }
        }
    }
}
