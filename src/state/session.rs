#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Identity record for the signed-in user.
///
/// Persisted as JSON under the `"user"` storage key; all fields are
/// opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

/// In-memory authentication state.
///
/// `user` and `token` are set together and cleared together; `loading`
/// is true only while startup restoration is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Session {
    /// Empty session in the pre-restoration state.
    pub fn starting() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// True iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// Drop the user/token pair, keeping the loading flag as-is.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}
