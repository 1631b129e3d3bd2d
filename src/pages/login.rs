//! Login page — collects credentials and establishes a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SharedSessionStore;
use crate::auth;

/// Login form with in-flight and error state.
///
/// Both fields are `required`, so empty submissions never reach the
/// session store. The submit button is disabled while a login is in
/// flight.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SharedSessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        submitting.set(true);

        let identifier = email.get_untracked();
        let secret = password.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(&identifier, &secret).await {
                Ok(granted) => {
                    session.update(|store| store.establish(granted.user, granted.token));
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__panel">
                <h2>"Sign in to Medical Notes Cleaner"</h2>
                <p class="auth-page__subtitle">"Clean your medical documentation"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email address"
                        <input
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            required=true
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        error
                            .get()
                            .map(|message| view! { <div class="alert alert--error">{message}</div> })
                    }}

                    <div class="alert alert--info">
                        <strong>"Test credentials:"</strong>
                        <br/>
                        "Email: test@test.com"
                        <br/>
                        "Password: password"
                    </div>

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "No account yet? " <a href="/signup">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
