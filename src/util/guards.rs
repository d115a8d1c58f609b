//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated page applies identical unauthenticated-redirect
//! behavior, and the admin pages additionally bounce non-superusers back to
//! the student dashboard. The predicates are pure so they can be unit tested
//! without a reactive runtime.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True when auth has finished loading and no user is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// True when auth has finished loading and the user is not a superuser.
pub fn should_redirect_non_admin(state: &AuthState) -> bool {
    !state.loading
        && state
            .user
            .as_ref()
            .is_none_or(|user| !user.is_superuser)
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect non-admin users off admin routes once auth has loaded.
pub fn install_admin_guard<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate("/login", NavigateOptions::default());
        } else if should_redirect_non_admin(&state) {
            navigate("/", NavigateOptions::default());
        }
    });
}
