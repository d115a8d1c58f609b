#![cfg(not(feature = "hydrate"))]

use super::*;

// =====================
// Path helpers
// =====================

#[test]
fn flashcard_paths_cover_list_and_item_forms() {
    assert_eq!(flashcards_path(None), "/fiszki/");
    assert_eq!(flashcards_path(Some("g-1")), "/fiszki/?group_id=g-1");
    assert_eq!(flashcard_path("f-2"), "/fiszki/f-2");
    assert_eq!(group_path("g-3"), "/fiszki/groups/g-3");
}

#[test]
fn translate_paths_follow_the_active_language() {
    assert_eq!(translate_base(TargetLanguage::Fr), "/translate-pl-fr");
    assert_eq!(translate_base(TargetLanguage::En), "/translate-pl-en");

    assert_eq!(
        translate_items_path(TargetLanguage::Fr, "g-1"),
        "/translate-pl-fr/items/?group_id=g-1"
    );
    assert_eq!(translate_items_root(TargetLanguage::En), "/translate-pl-en/items/");
    assert_eq!(
        translate_item_path(TargetLanguage::En, "i-7"),
        "/translate-pl-en/items/i-7"
    );
    assert_eq!(
        translate_batch_path(TargetLanguage::Fr),
        "/translate-pl-fr/items/batch"
    );
}

// =====================
// Form encoding
// =====================

#[test]
fn form_encoding_passes_unreserved_characters_through() {
    assert_eq!(
        form_urlencode(&[("username", "jan.kowalski"), ("password", "Tajne-123")]),
        "username=jan.kowalski&password=Tajne-123"
    );
}

#[test]
fn form_encoding_escapes_reserved_characters() {
    assert_eq!(
        form_urlencode(&[("username", "user+a@test.pl")]),
        "username=user%2Ba%40test.pl"
    );
    assert_eq!(form_urlencode(&[("password", "a b&c=d")]), "password=a%20b%26c%3Dd");
}

#[test]
fn form_encoding_escapes_multibyte_characters_per_byte() {
    assert_eq!(form_urlencode(&[("password", "żółć")]), "password=%C5%BC%C3%B3%C5%82%C4%87");
}

#[test]
fn form_encoding_joins_pairs_with_ampersands() {
    assert_eq!(form_urlencode(&[]), "");
    assert_eq!(
        form_urlencode(&[("a", "1"), ("b", "2"), ("c", "3")]),
        "a=1&b=2&c=3"
    );
}

// =====================
// Messages
// =====================

#[test]
fn failure_messages_name_the_action_and_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
    assert_eq!(
        request_failed_message("group create", 500),
        "group create failed: 500"
    );
}
