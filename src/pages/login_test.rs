#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(
        validate_credentials("", "secret"),
        Some("Podaj nazwę użytkownika i hasło.")
    );
    assert_eq!(
        validate_credentials("ala", ""),
        Some("Podaj nazwę użytkownika i hasło.")
    );
    assert_eq!(
        validate_credentials("   ", "secret"),
        Some("Podaj nazwę użytkownika i hasło.")
    );
    assert_eq!(validate_credentials("ala", "secret"), None);
}

#[test]
fn bad_credentials_map_to_polish_message() {
    assert_eq!(
        login_error_message("login failed: 401"),
        "Nieprawidłowa nazwa użytkownika lub hasło."
    );
    assert_eq!(
        login_error_message("login failed: 400"),
        "Nieprawidłowa nazwa użytkownika lub hasło."
    );
}

#[test]
fn other_errors_keep_the_cause() {
    assert_eq!(
        login_error_message("login failed: 500"),
        "Logowanie nie powiodło się: login failed: 500"
    );
}
