#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::state::session::{Session, SessionUser};
use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

/// Single source of truth for authentication state.
///
/// Owns the [`Session`] and the persistence backend; every mutation
/// goes through here. The component tree shares it as
/// `RwSignal<SessionStore<BrowserStorage>>`, so the route guard
/// re-evaluates on every change.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// New store with an empty session; `loading` stays true until
    /// [`restore`](Self::restore) has run.
    pub fn new(storage: S) -> Self {
        Self {
            session: Session::starting(),
            storage,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Repopulate the session from persisted storage.
    ///
    /// Runs once at startup. A partial pair, an empty token, or an
    /// unparseable user record is treated as corrupt: both entries are
    /// deleted and the session stays anonymous. Clears `loading` on
    /// every path.
    pub fn restore(&mut self) {
        let token = self.storage.get(TOKEN_KEY);
        let raw_user = self.storage.get(USER_KEY);

        match (token, raw_user) {
            (Some(token), Some(raw_user)) if !token.is_empty() => {
                match serde_json::from_str::<SessionUser>(&raw_user) {
                    Ok(user) => {
                        self.session.user = Some(user);
                        self.session.token = Some(token);
                    }
                    Err(err) => {
                        log::warn!("discarding unparseable persisted session: {err}");
                        self.discard_persisted();
                    }
                }
            }
            (None, None) => {}
            _ => {
                log::warn!("discarding partial persisted session");
                self.discard_persisted();
            }
        }

        self.session.loading = false;
    }

    /// Install a freshly authenticated session and persist both entries.
    pub fn establish(&mut self, user: SessionUser, token: String) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                self.storage.set(TOKEN_KEY, &token);
                self.storage.set(USER_KEY, &raw);
            }
            Err(err) => log::error!("failed to persist session user: {err}"),
        }
        self.session.user = Some(user);
        self.session.token = Some(token);
    }

    /// Clear the session and delete both persisted entries.
    pub fn logout(&mut self) {
        self.discard_persisted();
        self.session.clear();
    }

    fn discard_persisted(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
