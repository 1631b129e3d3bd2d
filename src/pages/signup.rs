//! Signup page — creates an account and establishes a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::SharedSessionStore;
use crate::auth;

/// Signup form: display name, email, and password.
///
/// Same submission protocol as the login form; the display name is
/// carried into the session verbatim.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<SharedSessionStore>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        submitting.set(true);

        let name = full_name.get_untracked();
        let identifier = email.get_untracked();
        let secret = password.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::signup(&identifier, &secret, &name).await {
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
                <h2>"Create your account"</h2>
                <p class="auth-page__subtitle">"Clean your medical documentation"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full name"
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="name"
                            required=true
                            placeholder="Enter your full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>

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
                            autocomplete="new-password"
                            required=true
                            placeholder="Choose a password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        error
                            .get()
                            .map(|message| view! { <div class="alert alert--error">{message}</div> })
                    }}

                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="auth-page__switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
