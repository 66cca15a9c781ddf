use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::flow::{self, FlowEvent};
use crate::routes::Route;
use crate::session::use_session;
use crate::vm::{CourseCardVm, course_cards};

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let navigator = use_navigator();
    let store = ctx.session_store();

    let identity = session.identity();
    let name = identity
        .as_ref()
        .map_or("Student", |identity| identity.display_name())
        .to_string();
    let initial = identity
        .as_ref()
        .map_or_else(|| "U".to_string(), |identity| identity.initial());

    let on_logout = move |_: MouseEvent| {
        let store = store.clone();
        spawn(async move {
            // The store logs the failure and is anonymous either way.
            let _ = store.logout().await;
            session.sync(&store);
        });
    };

    rsx! {
        div { class: "page courses",
            header { class: "top-bar",
                p { class: "greeting", "Welcome back, {name}" }
                button { class: "secondary", onclick: on_logout, "Logout" }
                span { class: "avatar", "{initial}" }
            }

            h1 { "Choose your path" }

            div { class: "card-grid",
                for card in course_cards() {
                    CourseCard {
                        key: "{card.id}",
                        card: card.clone(),
                        on_select: move |_| {
                            flow::advance(&navigator, &Route::Courses {}, FlowEvent::SelectCourse(card.id));
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm, on_select: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "card course-card", onclick: move |evt| on_select.call(evt),
            span { class: "eyebrow", "Course" }
            h3 { "{card.title}" }
            p { "{card.description}" }
            span { class: "cta", "Explore →" }
        }
    }
}
