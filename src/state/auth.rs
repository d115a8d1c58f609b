//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components read this to coordinate login
//! redirects and admin-only rendering. The bearer token itself is not part
//! of the state; it lives in localStorage where the request layer picks it
//! up, so components never touch credentials.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// localStorage key holding the bearer token between visits.
pub(crate) const TOKEN_KEY: &str = "auth_token";

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true while the startup session probe is in flight; guards
/// hold off redirecting until it settles.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State for app startup, before the session probe has run.
    pub fn probing() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Store a fresh token and resolve it into a user via `GET /auth/me`.
///
/// The token has to be in storage before the profile call so the request
/// layer can attach it. A failed profile fetch drops the token again so a
/// half-open session does not linger.
///
/// # Errors
///
/// Returns an error string when the profile fetch fails.
pub async fn begin_session(auth: RwSignal<AuthState>, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        storage::save_string(TOKEN_KEY, token);
        match crate::net::api::fetch_current_user().await {
            Some(user) => {
                auth.set(AuthState {
                    user: Some(user),
                    loading: false,
                });
                Ok(())
            }
            None => {
                storage::remove(TOKEN_KEY);
                auth.set(AuthState::default());
                Err("profile fetch failed".to_owned())
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, token);
        Err("not available on server".to_owned())
    }
}

/// Resolve the stored token into a user via `GET /auth/me`.
///
/// A missing or rejected token settles the state as logged out; the token
/// is dropped so later requests do not keep presenting it.
pub async fn restore_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        if storage::load_string(TOKEN_KEY).is_none() {
            auth.set(AuthState::default());
            return;
        }
        match crate::net::api::fetch_current_user().await {
            Some(user) => auth.set(AuthState {
                user: Some(user),
                loading: false,
            }),
            None => {
                storage::remove(TOKEN_KEY);
                auth.set(AuthState::default());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Tell the server goodbye, then tear the session down locally.
///
/// The server call is best-effort; local teardown happens regardless so
/// logout always works offline.
pub async fn end_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        crate::net::api::logout().await;
    }
    storage::remove(TOKEN_KEY);
    auth.set(AuthState::default());
}
