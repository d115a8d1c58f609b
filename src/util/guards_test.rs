use super::*;
use crate::net::types::User;

fn user(is_superuser: bool) -> User {
    User {
        id: "u1".to_owned(),
        name: "Ola".to_owned(),
        email: "ola@example.com".to_owned(),
        is_superuser,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn redirects_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user(false)), loading: false };
    assert!(!should_redirect_unauth(&state));
}

// =============================================================
// should_redirect_non_admin
// =============================================================

#[test]
fn blocks_regular_user_from_admin_routes() {
    let state = AuthState { user: Some(user(false)), loading: false };
    assert!(should_redirect_non_admin(&state));
}

#[test]
fn allows_superuser_on_admin_routes() {
    let state = AuthState { user: Some(user(true)), loading: false };
    assert!(!should_redirect_non_admin(&state));
}

#[test]
fn admin_guard_waits_for_auth_to_load() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_non_admin(&state));
}
