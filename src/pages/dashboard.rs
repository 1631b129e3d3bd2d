//! Dashboard page — authenticated landing with the note-cleaning stub.

use leptos::prelude::*;

use crate::app::SharedSessionStore;
use crate::components::note_panel::NotePanel;

/// Dashboard shown behind the route guard.
///
/// Displays the signed-in identity and offers logout; navigation after
/// logout is the guard's job, not this page's.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SharedSessionStore>();

    let full_name = move || {
        session
            .get()
            .session()
            .user
            .as_ref()
            .map(|user| user.full_name.clone())
            .unwrap_or_default()
    };
    let email = move || {
        session
            .get()
            .session()
            .user
            .as_ref()
            .map(|user| user.email.clone())
            .unwrap_or_default()
    };
    let user_id = move || {
        session
            .get()
            .session()
            .user
            .as_ref()
            .map(|user| user.id.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| session.update(|store| store.logout());

    view! {
        <div class="dashboard-page">
            <nav class="navbar">
                <h1>"Medical Notes Cleaner"</h1>
                <div class="navbar__actions">
                    <span>{move || format!("Welcome, {}", full_name())}</span>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </nav>

            <main class="dashboard-page__content">
                <section class="card">
                    <h2>"Welcome to Your Medical Notes Dashboard"</h2>
                    <p>
                        "Transform messy medical documentation into clean, professional notes using AI-powered processing."
                    </p>
                    <div class="alert alert--success">
                        {move || format!("Authentication working! You are logged in as {}", email())}
                    </div>
                </section>

                <NotePanel/>

                <section class="card">
                    <h3>"Your Account"</h3>
                    <div class="dashboard-page__account">
                        <div>
                            <strong>"Email:"</strong>
                            <br/>
                            {email}
                        </div>
                        <div>
                            <strong>"User ID:"</strong>
                            <br/>
                            {user_id}
                        </div>
                    </div>
                </section>
            </main>
        </div>
    }
}
