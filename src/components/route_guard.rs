//! Route guard for authenticated pages.

use leptos::children::ChildrenFn;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SharedSessionStore;

/// Gate around protected content.
///
/// While session restoration is in flight this renders a loading screen
/// and performs no navigation. Afterwards it renders its children when
/// authenticated and redirects to `/login` otherwise. The check
/// re-evaluates on every session change, so logging out on a protected
/// page redirects immediately.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SharedSessionStore>();
    let navigate = use_navigate();

    // Redirect to login once restoration has settled unauthenticated.
    Effect::new(move || {
        let store = session.get();
        if !store.session().loading && !store.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    move || {
        let store = session.get();
        if store.session().loading {
            view! {
                <div class="loading-screen">
                    <div class="spinner"></div>
                    <p>"Loading..."</p>
                </div>
            }
            .into_any()
        } else if store.is_authenticated() {
            children()
        } else {
            // The effect above is navigating away.
            ().into_any()
        }
    }
}
