//! Note-cleaning placeholder card.
//!
//! The "Clean Note" action is intentionally not wired to any backend;
//! the AI processing service does not exist yet.

use leptos::prelude::*;

/// Card with a raw-note textarea and an inert submit button.
#[component]
pub fn NotePanel() -> impl IntoView {
    let note = RwSignal::new(String::new());

    let on_clean = move |_| {
        // Placeholder until the cleaning backend is integrated.
        log::info!(
            "note cleaning requested ({} chars); no backend wired yet",
            note.get_untracked().len()
        );
    };

    view! {
        <section class="card note-panel">
            <h3>"Process Medical Notes"</h3>
            <p>"Enter your raw medical notes below and our AI will clean and format them."</p>

            <label class="note-panel__label">
                "Raw Medical Note"
                <textarea
                    class="note-panel__input"
                    rows="4"
                    placeholder="Example: pt c/o cp x3d, worsening w/ exertion. PE: hr 95, bp 140/90..."
                    prop:value=move || note.get()
                    on:input=move |ev| note.set(event_target_value(&ev))
                ></textarea>
            </label>

            <button class="btn btn--primary" on:click=on_clean>
                "Clean Note"
            </button>

            <div class="alert alert--info">
                <strong>"Coming next:"</strong>
                " AI note processing will connect to the cleaning backend. For now this demonstrates the complete authentication flow."
            </div>
        </section>
    }
}
