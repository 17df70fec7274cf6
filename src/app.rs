//! Root application component, routing, and service wiring.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::{TASKS_PATH, api_base_url};
use crate::net::auth::AuthService;
use crate::net::interceptor::AuthInterceptor;
use crate::net::pipeline::{ApiClient, Pipeline, Transport};
use crate::net::tasks::TaskService;
use crate::net::transport::default_transport;
use crate::pages::{login::LoginPage, tasks::TasksPage};
use crate::state::session::SessionStore;
use crate::util::auth::{AuthGuard, BrowserNavigator, Navigator};

/// Services shared through Leptos context.
///
/// One [`SessionStore`] is injected into the auth interceptor and the auth
/// service, which the guard consults, so a clear from any of them is seen by all.
#[derive(Clone)]
pub struct AppServices {
    pub session: SessionStore,
    pub auth: AuthService,
    pub tasks: TaskService,
    pub guard: AuthGuard,
    pub navigator: Arc<dyn Navigator>,
}

impl AppServices {
    pub fn new(session: SessionStore, transport: Arc<dyn Transport>, navigator: Arc<dyn Navigator>) -> Self {
        let interceptor = AuthInterceptor::new(session.clone(), navigator.clone());
        let client = ApiClient::new(Pipeline::new(transport).with_stage(Arc::new(interceptor)));
        let auth = AuthService::new(client.clone(), session.clone());
        Self {
            guard: AuthGuard::new(auth.clone(), navigator.clone()),
            auth,
            tasks: TaskService::new(client),
            session,
            navigator,
        }
    }

    /// Wiring for the running app: `localStorage`, HTTP, `window.location`.
    pub fn browser() -> Self {
        Self::new(
            SessionStore::browser(),
            default_transport(&api_base_url()),
            Arc::new(BrowserNavigator),
        )
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppServices::browser());

    view! {
        <Title text="Sticky Tasks"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=TASKS_PATH/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("tasks") view=TasksPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=TASKS_PATH/> }/>
            </Routes>
        </Router>
    }
}
