//! Shared UI components.

pub mod note_panel;
pub mod route_guard;
