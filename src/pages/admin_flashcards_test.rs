#![cfg(not(feature = "hydrate"))]

use super::*;

fn group(id: &str, name: &str) -> Group {
    Group {
        id: id.to_owned(),
        name: name.to_owned(),
        description: None,
        language: None,
        total_items: None,
        created_at: None,
        updated_at: None,
    }
}

// =====================
// Validation
// =====================

#[test]
fn text_sides_are_required() {
    assert_eq!(validate_text_pl("  "), Some("Tekst polski jest wymagany"));
    assert_eq!(validate_text_pl("dom"), None);
    assert_eq!(validate_text_target(""), Some("Tłumaczenie jest wymagane"));
    assert_eq!(validate_text_target("maison"), None);
}

#[test]
fn image_url_must_be_http_when_present() {
    assert_eq!(validate_image_url(""), None);
    assert_eq!(validate_image_url("   "), None);
    assert_eq!(validate_image_url("https://example.com/dom.png"), None);
    assert_eq!(validate_image_url("http://example.com/dom.png"), None);
    assert_eq!(
        validate_image_url("dom.png"),
        Some("Adres obrazka musi zaczynać się od http")
    );
}

// =====================
// Payload shape
// =====================

#[test]
fn payload_omits_empty_optionals() {
    let payload = flashcard_payload(" dom ", " maison ", "  ", "");
    assert_eq!(payload.text_pl, "dom");
    assert_eq!(payload.text_target, "maison");
    assert_eq!(payload.image_url, None);
    assert_eq!(payload.group_id, None);
}

#[test]
fn payload_keeps_provided_optionals() {
    let payload = flashcard_payload("dom", "maison", "https://example.com/d.png", "g2");
    assert_eq!(payload.image_url, Some("https://example.com/d.png".to_owned()));
    assert_eq!(payload.group_id, Some("g2".to_owned()));
}

// =====================
// Group lookup
// =====================

#[test]
fn group_name_resolves_known_ids() {
    let groups = vec![group("g1", "Zwierzęta"), group("g2", "Kolory")];
    assert_eq!(
        group_name(&groups, Some("g2")),
        Some("Kolory".to_owned())
    );
    assert_eq!(group_name(&groups, Some("g9")), None);
    assert_eq!(group_name(&groups, None), None);
}
