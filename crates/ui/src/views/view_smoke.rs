use dioxus::prelude::*;
use planner_core::model::{CourseId, Level, QUESTION_TIME_LIMIT_SECS};

use crate::vm::AssessmentIntent;

use super::test_harness::{
    SessionSetup, ViewKind, drive_dom, setup_guarded_harness, setup_routed_harness,
    setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn guard_shows_loading_while_unresolved() {
    let mut harness = setup_guarded_harness(
        ViewKind::Dashboard(CourseId::WebDev, Level::Beginner),
        SessionSetup::Unresolved,
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing placeholder in {html}");
    assert!(!html.contains("Your Learning Path"), "protected content leaked: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guard_hides_protected_view_from_anonymous_users() {
    let mut harness = setup_guarded_harness(
        ViewKind::Dashboard(CourseId::WebDev, Level::Beginner),
        SessionSetup::Anonymous,
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Your Learning Path"), "protected content leaked: {html}");
    assert!(!html.contains("Loading..."), "anonymous should not wait: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn anonymous_deep_link_is_replaced_by_entry() {
    let mut harness =
        setup_routed_harness("/dashboard/web-dev/beginner", SessionSetup::Anonymous).await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(harness.current_path(), "/");
    assert!(!html.contains("Your Learning Path"), "protected content leaked: {html}");
    assert!(html.contains("Sign In"), "entry screen missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn signed_in_deep_link_stays_on_dashboard() {
    let mut harness =
        setup_routed_harness("/dashboard/web-dev/beginner", SessionSetup::SignedIn("a@b.com"))
            .await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(harness.current_path(), "/dashboard/web-dev/beginner");
    assert!(html.contains("Your Learning Path"), "missing dashboard in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guard_renders_for_signed_in_users() {
    let mut harness = setup_guarded_harness(
        ViewKind::Dashboard(CourseId::WebDev, Level::Beginner),
        SessionSetup::SignedIn("a@b.com"),
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Your Learning Path"), "missing dashboard in {html}");
    assert!(html.contains("Beginner Path"), "missing level in {html}");
    assert!(html.contains("Introduction to HTML"), "missing topic in {html}");
    assert!(html.contains("35%"), "missing overall progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_renders_sign_in_form() {
    let mut harness = setup_view_harness(ViewKind::Login, SessionSetup::Anonymous).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign In"), "missing submit label in {html}");
    assert!(html.contains("Explore Courses"), "missing explore button in {html}");
    assert!(html.contains("Don't have an account?") || html.contains("Don&#39;t have an account?"));
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_greets_user_and_lists_catalog() {
    let mut harness =
        setup_view_harness(ViewKind::Courses, SessionSetup::SignedIn("zoe@x.io")).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome back, zoe@x.io"), "missing greeting in {html}");
    assert!(html.contains("Logout"), "missing logout in {html}");
    for title in ["Web Development", "Data Science", "Artificial Intelligence", "UI/UX Design"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn learning_path_view_lists_levels() {
    let mut harness = setup_view_harness(
        ViewKind::LearningPath(CourseId::DataScience),
        SessionSetup::SignedIn("a@b.com"),
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Data Science"), "missing course title in {html}");
    assert!(html.contains("Back to Courses"), "missing back button in {html}");
    for label in ["Beginner", "Intermediate", "Advanced", "24 lessons", "48 lessons"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_next_advances_and_resets_timer() {
    let mut harness = setup_view_harness(
        ViewKind::Assessment(CourseId::WebDev, Level::Beginner),
        SessionSetup::SignedIn("a@b.com"),
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing counter in {html}");
    assert!(html.contains("What does HTML stand for?"), "missing question in {html}");

    let dispatch = harness.assessment.dispatch();
    harness.dom.in_runtime(|| {
        for _ in 0..5 {
            dispatch.call(AssessmentIntent::Tick);
        }
        dispatch.call(AssessmentIntent::Next);
    });
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("55s"), "timer did not tick in {html}");
    assert!(html.contains("Question 1 of 3"), "next without answer moved on: {html}");

    harness.dom.in_runtime(|| {
        dispatch.call(AssessmentIntent::Select(0));
        dispatch.call(AssessmentIntent::Next);
    });
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "did not advance: {html}");
    assert!(html.contains(&format!("{QUESTION_TIME_LIMIT_SECS}s")), "timer not reset: {html}");

    let vm = harness.assessment.vm();
    let selected = harness
        .dom
        .in_runtime(|| vm.read().as_ref().and_then(|vm| vm.assessment().selected()));
    assert_eq!(selected, None);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn countdown_restarts_once_per_question() {
    let mut harness = setup_view_harness(
        ViewKind::Assessment(CourseId::WebDev, Level::Beginner),
        SessionSetup::SignedIn("a@b.com"),
    )
    .await;
    harness.rebuild();
    harness.run_for_secs(3).await;
    let html = harness.render();
    assert!(html.contains("57s"), "countdown did not run in {html}");

    let dispatch = harness.assessment.dispatch();
    harness.dom.in_runtime(|| {
        dispatch.call(AssessmentIntent::Select(0));
        dispatch.call(AssessmentIntent::Next);
    });
    drive_dom(&mut harness.dom);
    harness.run_for_secs(2).await;
    let html = harness.render();
    assert!(html.contains("Question 2 of 3"), "did not advance: {html}");
    // A leftover first-question task would tick twice as fast.
    assert!(html.contains("58s"), "countdown not restarted cleanly in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_renders_topic() {
    let mut harness = setup_view_harness(
        ViewKind::Lesson("html-basics"),
        SessionSetup::SignedIn("a@b.com"),
    )
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Introduction to HTML"), "missing topic in {html}");
    assert!(html.contains("Learning Objectives"), "missing objectives in {html}");
    assert!(html.contains("Current: Intro"), "missing step pointer in {html}");
    assert!(html.contains("<strong>"), "overview markdown not rendered in {html}");
    assert!(html.contains("Which tag creates a link?"), "missing knowledge check in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_handles_unknown_topic() {
    let mut harness =
        setup_view_harness(ViewKind::Lesson("knitting"), SessionSetup::SignedIn("a@b.com"))
            .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing not-found text in {html}");
    assert!(html.contains("Back to Courses"), "missing way back in {html}");
}
