//! # mednotes-client
//!
//! Leptos + WASM front-end shell for the Medical Notes Cleaner product:
//! a login/signup flow backed by a mocked authentication API and a
//! route-guarded dashboard with a placeholder note-cleaning panel.
//!
//! There is no server in this repository. Sessions are persisted to
//! browser localStorage; the real authentication and note-cleaning
//! backends are future external collaborators.

pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod state;
pub mod storage;

/// Browser entry point — mounts the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
