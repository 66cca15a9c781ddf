use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::session::use_session_root;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_session_root(ctx.session_store());

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "EduPlanner" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
