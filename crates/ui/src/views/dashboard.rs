use dioxus::prelude::*;
use dioxus_router::use_navigator;
use planner_core::model::{CourseId, Level};

use crate::flow::{self, FlowEvent};
use crate::routes::Route;
use crate::session::use_session;
use crate::vm::{TopicCardVm, dashboard};

#[component]
pub fn DashboardView(course_id: CourseId, level: Level) -> Element {
    let navigator = use_navigator();
    let session = use_session();
    let here = Route::Dashboard { course_id, level };
    let vm = dashboard(course_id, level);
    let initial = session
        .identity()
        .map_or_else(|| "U".to_string(), |identity| identity.initial());

    rsx! {
        div { class: "page dashboard",
            aside { class: "sidebar",
                h2 { "EduPlanner" }
                div { class: "progress-panel",
                    span { "Overall" }
                    span { class: "percent", "{vm.overall_percent}%" }
                    div { class: "bar",
                        div { class: "fill", style: "width: {vm.overall_percent}%" }
                    }
                    p { "Keep going! You are making great progress." }
                }
            }

            main { class: "content",
                header { class: "top-bar",
                    div {
                        h1 { "{vm.course_title}" }
                        p { class: "subtitle", "{vm.level_label}" }
                    }
                    button {
                        class: "primary",
                        onclick: {
                            let here = here.clone();
                            move |_| flow::advance(&navigator, &here, FlowEvent::GeneratePlanAgain)
                        },
                        "Generate Plan Again"
                    }
                    span { class: "avatar", "{initial}" }
                }

                h2 { "Your Learning Path" }
                p { "Click on any topic to start learning, or take a test to assess your knowledge." }

                ul { class: "topics",
                    for topic in vm.topics {
                        TopicRow {
                            key: "{topic.id}",
                            topic: topic.clone(),
                            on_open: {
                                let here = here.clone();
                                let topic_id = topic.id.clone();
                                move |_| flow::advance(&navigator, &here, FlowEvent::SelectTopic(topic_id.clone()))
                            },
                            on_test: {
                                let here = here.clone();
                                move |_| flow::advance(&navigator, &here, FlowEvent::TakeTest)
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicRow(
    topic: TopicCardVm,
    on_open: EventHandler<MouseEvent>,
    on_test: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        li { class: "card topic-card", onclick: move |evt| on_open.call(evt),
            h3 { "{topic.title}" }
            p { "{topic.summary}" }
            p { class: "meta",
                span { "Duration: {topic.duration}" }
                span { "{topic.progress_percent}% complete" }
            }
            div { class: "bar",
                div { class: "fill", style: "width: {topic.progress_percent}%" }
            }
            button {
                class: "secondary",
                onclick: move |evt: MouseEvent| {
                    // The row itself opens the lesson.
                    evt.stop_propagation();
                    on_test.call(evt);
                },
                "Take Test"
            }
        }
    }
}
