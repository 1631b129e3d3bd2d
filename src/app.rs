//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::RequireAuth;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::store::SessionStore;
use crate::storage::BrowserStorage;

/// Session store shared through context by pages and the route guard.
pub type SharedSessionStore = RwSignal<SessionStore<BrowserStorage>>;

/// Root component — provides the session store and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session: SharedSessionStore = RwSignal::new(SessionStore::new(BrowserStorage));
    provide_context(session);

    // Restore any persisted session once at startup. The closure reads
    // no signals, so the effect runs a single time.
    Effect::new(move || {
        session.update(SessionStore::restore);
    });

    view! {
        <Title text="Medical Notes Cleaner"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
            </Routes>
        </Router>
    }
}
