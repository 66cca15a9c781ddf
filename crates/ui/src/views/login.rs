use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::flow::{self, FlowEvent};
use crate::routes::Route;
use crate::session::use_session;
use crate::vm::{LoginForm, LoginOutcome};

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let navigator = use_navigator();
    let mut form = use_signal(LoginForm::default);

    let auth = ctx.auth_service();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mode = form.read().mode();
        let Some(credentials) = form.write().begin_submit() else {
            return;
        };
        let auth = Arc::clone(&auth);
        spawn(async move {
            let result = auth.submit(mode, credentials).await;
            session.sync(auth.sessions());
            if form.write().finish(result) == LoginOutcome::Authenticated {
                flow::advance(&navigator, &Route::Login {}, FlowEvent::Authenticated);
            }
        });
    };

    let view = form.read().clone();
    let (toggle_prompt, toggle_action) = view.toggle_labels();

    rsx! {
        div { class: "page login",
            header { class: "brand",
                h1 { "EduPlanner" }
                p { "Welcome back, continue your journey." }
            }

            button {
                class: "secondary",
                onclick: move |_| flow::advance(&navigator, &Route::Login {}, FlowEvent::ExploreCourses),
                "Explore Courses"
            }

            p { class: "divider", "OR CONTINUE WITH EMAIL" }

            form { class: "login-form", onsubmit: on_submit,
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: "{view.email()}",
                    oninput: move |evt| form.write().set_email(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{view.password()}",
                    oninput: move |evt| form.write().set_password(evt.value()),
                }
                if let Some(error) = view.error() {
                    div { class: "form-error", role: "alert", "{error}" }
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: view.pending(),
                    "{view.submit_label()}"
                }
            }

            p { class: "toggle",
                "{toggle_prompt} "
                button {
                    class: "link",
                    onclick: move |_| form.write().toggle_mode(),
                    "{toggle_action}"
                }
            }
        }
    }
}
