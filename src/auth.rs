//! Mock authentication API.
//!
//! Stands in for the future authentication backend: every call succeeds
//! after a fixed artificial delay and fabricates a deterministic user
//! record plus a fresh opaque token. The secret is accepted but never
//! inspected. Real credential verification and token issuance belong to
//! an external service that does not exist yet, so nothing here is a
//! security mechanism.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use thiserror::Error;

use crate::state::session::SessionUser;

#[cfg(feature = "csr")]
const AUTH_DELAY_MS: u32 = 1_000;

/// Authentication failure with a message fit for direct display.
///
/// Unreachable with the mock (both operations always succeed); reserved
/// for the real backend integration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Login failed. Please try again.")]
    LoginFailed,
    #[error("Signup failed. Please try again.")]
    SignupFailed,
}

/// A freshly issued session: the user record and its opaque token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub user: SessionUser,
    pub token: String,
}

/// Authenticate with an email and secret.
///
/// # Errors
///
/// The mock never fails; the error path is the contract reserved for
/// the real backend.
pub async fn login(email: &str, _secret: &str) -> Result<AuthSession, AuthError> {
    artificial_delay().await;
    Ok(login_session(email))
}

/// Create an account with an email, secret, and display name.
///
/// # Errors
///
/// The mock never fails; the error path is the contract reserved for
/// the real backend.
pub async fn signup(email: &str, _secret: &str, full_name: &str) -> Result<AuthSession, AuthError> {
    artificial_delay().await;
    Ok(signup_session(email, full_name))
}

/// Deterministic login session for an identifier.
///
/// The display name is the part of the email before the first `@`;
/// identifiers without an `@` fall back to `"User"`.
fn login_session(email: &str) -> AuthSession {
    let full_name = email
        .split_once('@')
        .map_or_else(|| "User".to_owned(), |(local, _)| local.to_owned());
    AuthSession {
        user: SessionUser {
            id: "user_123".to_owned(),
            email: email.to_owned(),
            full_name,
        },
        token: generate_token(),
    }
}

/// Signup session: display name taken verbatim, fresh user id.
fn signup_session(email: &str, full_name: &str) -> AuthSession {
    AuthSession {
        user: SessionUser {
            id: format!("user_{}", uuid::Uuid::new_v4().simple()),
            email: email.to_owned(),
            full_name: full_name.to_owned(),
        },
        token: generate_token(),
    }
}

/// Client-generated opaque token; a placeholder until a real issuer exists.
fn generate_token() -> String {
    format!("mock-token-{}", uuid::Uuid::new_v4().simple())
}

/// Fixed delay standing in for network latency (browser builds only).
async fn artificial_delay() {
    #[cfg(feature = "csr")]
    gloo_timers::future::TimeoutFuture::new(AUTH_DELAY_MS).await;
}
