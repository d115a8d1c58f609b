#![cfg(not(feature = "hydrate"))]

use super::*;

// =====================
// AuthState
// =====================

#[test]
fn default_state_is_logged_out_and_settled() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn probing_state_is_loading_without_a_user() {
    let state = AuthState::probing();
    assert!(state.user.is_none());
    assert!(state.loading);
}
