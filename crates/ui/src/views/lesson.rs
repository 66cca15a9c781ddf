use dioxus::prelude::*;
use dioxus_router::use_navigator;
use planner_core::model::{ChatRole, TopicId};

use crate::routes::Route;
use crate::views::option_class;
use crate::vm::{LessonIntent, LessonVm};

#[component]
pub fn LessonView(topic_id: TopicId) -> Element {
    let navigator = use_navigator();
    let vm = use_signal(move || LessonVm::load(&topic_id));

    let dispatch = use_callback(move |intent: LessonIntent| {
        let mut vm = vm;
        if let Ok(vm) = vm.write().as_mut() {
            vm.apply(intent);
        }
    });

    let current = match vm.read().clone() {
        Ok(current) => current,
        Err(err) => {
            return rsx! {
                div { class: "page lesson",
                    h1 { "Lesson not found" }
                    p { "{err.message()}" }
                    button {
                        class: "link back",
                        onclick: move |_| {
                            navigator.push(Route::Courses {});
                        },
                        "Back to Courses"
                    }
                }
            };
        }
    };
    let lesson = current.lesson();
    let steps = current.progress().steps();
    let current_step = current.progress().current_index();
    let check = current.check();
    let selected_option = check.selected();

    rsx! {
        div { class: "page lesson",
            header { class: "top-bar",
                button { class: "link back", onclick: move |_| navigator.go_back(), "← Back" }
                button {
                    class: "secondary",
                    onclick: move |_| dispatch.call(LessonIntent::QuickQuiz),
                    "Quick Quiz"
                }
            }

            h1 { "{current.heading()}" }
            p { class: "subtitle", "{lesson.topic.tagline}" }

            div { class: "lesson-layout",
                main { class: "lesson-main",
                    section { class: "card",
                        h2 { "Overview" }
                        div { class: "overview", dangerous_inner_html: "{current.overview_html()}" }
                        p { class: "meta", "Video Tutorial · {lesson.topic.duration}" }
                    }

                    section { class: "card",
                        h2 { "Learning Objectives" }
                        ul {
                            for objective in lesson.objectives.iter() {
                                li { "{objective}" }
                            }
                        }
                    }

                    section { class: "card",
                        h2 { "Lesson Steps" }
                        ol { class: "steps",
                            for (index, step) in steps.iter().enumerate() {
                                li {
                                    key: "{step.number}",
                                    class: step_class(index == current_step, step.completed),
                                    onclick: move |_| dispatch.call(LessonIntent::SelectStep(index)),
                                    h3 { "{step.number}. {step.title}" }
                                    p { "{step.description}" }
                                }
                            }
                        }
                        p { class: "meta", "{current.current_step_label()}" }
                    }

                    section { class: "card",
                        h2 { "Resources" }
                        ul { class: "resources",
                            for resource in lesson.resources.iter() {
                                li {
                                    a { href: "{resource.url}", target: "_blank", "{resource.title}" }
                                }
                            }
                        }
                    }
                }

                aside { class: "lesson-side",
                    section { class: "card tutor",
                        h2 { "AI Chat Tutor" }
                        p { "Ask anything about this lesson and get instant guidance." }
                        div { class: "transcript",
                            for message in current.transcript().messages().iter() {
                                p { class: bubble_class(message.role), "{message.text}" }
                            }
                        }
                        form {
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                dispatch.call(LessonIntent::SendDraft);
                            },
                            input {
                                r#type: "text",
                                placeholder: "Ask a question...",
                                value: "{current.draft()}",
                                oninput: move |evt| dispatch.call(LessonIntent::EditDraft(evt.value())),
                            }
                            button { r#type: "submit", class: "primary", "Send" }
                        }
                    }

                    section { class: "card knowledge-check",
                        h3 { "Quick Knowledge Check" }
                        p { "{check.question().prompt}" }
                        for (index, option) in check.question().options.iter().enumerate() {
                            button {
                                key: "{index}",
                                class: option_class(selected_option, index),
                                onclick: move |_| dispatch.call(LessonIntent::SelectOption(index)),
                                "{option}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn step_class(is_current: bool, completed: bool) -> &'static str {
    match (is_current, completed) {
        (true, _) => "step current",
        (false, true) => "step done",
        (false, false) => "step",
    }
}

fn bubble_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::Tutor => "bubble tutor",
        ChatRole::Learner => "bubble learner",
    }
}
