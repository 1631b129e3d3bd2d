//! Client-side session state.
//!
//! Split into the plain `Session` entity and the `SessionStore` that
//! owns it together with the persistence backend.

pub mod session;
pub mod store;
