use dioxus::prelude::*;
use dioxus_router::use_navigator;
use planner_core::model::SessionStatus;

use crate::routes::Route;
use crate::session::use_session;

/// What a protected subtree shows for a given session status.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    Loading,
    Redirect(Route),
    Render,
}

#[must_use]
pub fn guard_decision(status: SessionStatus) -> GuardDecision {
    match status {
        SessionStatus::Unresolved => GuardDecision::Loading,
        SessionStatus::Anonymous => GuardDecision::Redirect(Route::entry()),
        SessionStatus::Authenticated => GuardDecision::Render,
    }
}

/// Renders `children` only for an authenticated session.
///
/// Anonymous users are sent to the entry screen with history replace, so
/// "back" does not land on the protected URL again.
#[component]
pub fn RouteGuard(children: Element) -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if let GuardDecision::Redirect(target) = guard_decision(session.status()) {
            tracing::debug!(to = %target, "redirecting anonymous user");
            navigator.replace(target.to_string());
        }
    });

    match guard_decision(session.status()) {
        GuardDecision::Loading => rsx! {
            div { class: "guard-loading", "Loading..." }
        },
        GuardDecision::Redirect(_) => rsx! {},
        GuardDecision::Render => children,
    }
}
