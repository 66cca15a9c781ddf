use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::history::MemoryHistory;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use planner_core::model::{AuthToken, CourseId, Level, SessionState, TopicId, UserIdentity};
use planner_core::time::fixed_clock;
use services::{AuthApi, AuthError, AuthGrant, AuthMode, AuthService, Credentials, SessionStore};
use storage::repository::InMemoryRepository;

use crate::context::{UiApp, build_app_context};
use crate::guard::RouteGuard;
use crate::routes::Route;
use crate::session::SessionHandle;
use crate::views::assessment::AssessmentTestHandles;
use crate::views::{
    AssessmentView, CoursesView, DashboardView, LearningPathView, LessonView, LoginView,
};

/// Grants every request; these tests never submit the login form.
struct StaticAuthApi;

#[async_trait]
impl AuthApi for StaticAuthApi {
    async fn authenticate(
        &self,
        _mode: AuthMode,
        credentials: &Credentials,
    ) -> Result<AuthGrant, AuthError> {
        Ok(AuthGrant {
            identity: UserIdentity::from_email(credentials.email()),
            token: AuthToken::new("test-token"),
        })
    }
}

struct TestApp {
    session_store: Arc<SessionStore>,
    auth_service: Arc<AuthService>,
}

impl UiApp for TestApp {
    fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session_store)
    }

    fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth_service)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Courses,
    LearningPath(CourseId),
    Assessment(CourseId, Level),
    Dashboard(CourseId, Level),
    Lesson(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSetup {
    Unresolved,
    Anonymous,
    SignedIn(&'static str),
}

#[derive(Clone, PartialEq)]
struct HarnessConfig {
    view: ViewKind,
    guarded: bool,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    initial: SessionState,
    config: HarnessConfig,
    assessment_handles: AssessmentTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let initial = props.initial.clone();
    use_context_provider(move || SessionHandle::new(initial));
    use_context_provider(|| props.config.clone());
    use_context_provider(|| props.assessment_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let config = use_context::<HarnessConfig>();
    let view = match config.view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::LearningPath(course_id) => rsx! { LearningPathView { course_id } },
        ViewKind::Assessment(course_id, level) => rsx! { AssessmentView { course_id, level } },
        ViewKind::Dashboard(course_id, level) => rsx! { DashboardView { course_id, level } },
        ViewKind::Lesson(topic) => rsx! { LessonView { topic_id: TopicId::new(topic) } },
    };
    if config.guarded {
        rsx! { RouteGuard { {view} } }
    } else {
        view
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub assessment: AssessmentTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Let `secs` seconds of (paused) tokio time pass, rendering after each.
    pub async fn run_for_secs(&mut self, secs: u32) {
        for _ in 0..secs {
            let _ = tokio::time::timeout(Duration::from_secs(1), self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
        }
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind, session: SessionSetup) -> ViewHarness {
    setup_harness(view, session, false).await
}

/// Same as `setup_view_harness`, with the view wrapped in `RouteGuard`.
pub async fn setup_guarded_harness(view: ViewKind, session: SessionSetup) -> ViewHarness {
    setup_harness(view, session, true).await
}

async fn session_store_for(session: SessionSetup) -> Arc<SessionStore> {
    let store = Arc::new(SessionStore::new(
        fixed_clock(),
        Arc::new(InMemoryRepository::new()),
    ));
    match session {
        SessionSetup::Unresolved => {}
        SessionSetup::Anonymous => {
            store.restore().await.expect("restore");
        }
        SessionSetup::SignedIn(email) => {
            store
                .login(UserIdentity::from_email(email), AuthToken::new("test-token"))
                .await
                .expect("login");
        }
    }
    store
}

async fn setup_harness(view: ViewKind, session: SessionSetup, guarded: bool) -> ViewHarness {
    let store = session_store_for(session).await;
    let auth_service = Arc::new(AuthService::new(
        Arc::new(StaticAuthApi),
        Arc::clone(&store),
    ));
    let app = Arc::new(TestApp {
        session_store: Arc::clone(&store),
        auth_service,
    });
    let assessment = AssessmentTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            initial: store.snapshot(),
            config: HarnessConfig { view, guarded },
            assessment_handles: assessment.clone(),
        },
    );

    ViewHarness { dom, assessment }
}

#[derive(Props, Clone)]
struct AppRouterProps {
    app: Arc<TestApp>,
    initial: SessionState,
    history: Rc<MemoryHistory>,
}

impl PartialEq for AppRouterProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// The real `Route` table, starting from an in-memory history.
#[component]
fn AppRouterHarness(props: AppRouterProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let initial = props.initial.clone();
    use_context_provider(move || SessionHandle::new(initial));
    let history: Rc<dyn History> = props.history.clone();
    use_context_provider(move || history);
    rsx! { Router::<Route> {} }
}

pub struct RoutedHarness {
    pub dom: VirtualDom,
    pub history: Rc<MemoryHistory>,
}

impl RoutedHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        // Guard effects navigate, which schedules another render.
        for _ in 0..3 {
            drive_dom(&mut self.dom);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn current_path(&self) -> String {
        self.history.current_route()
    }
}

/// Mount the application's router at `path` with the given session.
pub async fn setup_routed_harness(path: &str, session: SessionSetup) -> RoutedHarness {
    let store = session_store_for(session).await;
    let auth_service = Arc::new(AuthService::new(
        Arc::new(StaticAuthApi),
        Arc::clone(&store),
    ));
    let app = Arc::new(TestApp {
        session_store: Arc::clone(&store),
        auth_service,
    });
    let history = Rc::new(MemoryHistory::with_initial_path(path));

    let dom = VirtualDom::new_with_props(
        AppRouterHarness,
        AppRouterProps {
            app,
            initial: store.snapshot(),
            history: Rc::clone(&history),
        },
    );

    RoutedHarness { dom, history }
}
