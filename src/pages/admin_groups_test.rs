#![cfg(not(feature = "hydrate"))]

use super::*;

// =====================
// Validation
// =====================

#[test]
fn name_is_required() {
    assert_eq!(validate_name(""), Some("Nazwa jest wymagana"));
    assert_eq!(validate_name("   "), Some("Nazwa jest wymagana"));
    assert_eq!(validate_name("Zwierzęta"), None);
}

#[test]
fn name_length_limit_counts_characters_not_bytes() {
    let ok = "ż".repeat(NAME_MAX);
    assert_eq!(validate_name(&ok), None);
    let too_long = "ż".repeat(NAME_MAX + 1);
    assert_eq!(validate_name(&too_long), Some("Nazwa jest zbyt długa"));
}

#[test]
fn description_is_optional_but_bounded() {
    assert_eq!(validate_description(""), None);
    let too_long = "a".repeat(DESCRIPTION_MAX + 1);
    assert_eq!(validate_description(&too_long), Some("Opis jest zbyt długi"));
}

// =====================
// Payload shape
// =====================

#[test]
fn payload_trims_and_omits_empty_description() {
    let payload = group_payload("  Zwierzęta  ", "   ", Some(TargetLanguage::Fr));
    assert_eq!(payload.name, "Zwierzęta");
    assert_eq!(payload.description, None);
    assert_eq!(payload.language, Some(TargetLanguage::Fr));
}

#[test]
fn payload_keeps_nonempty_description() {
    let payload = group_payload("Kolory", " podstawowe kolory ", None);
    assert_eq!(payload.description, Some("podstawowe kolory".to_owned()));
    assert_eq!(payload.language, None);
}

// =====================
// Count parsing
// =====================

#[test]
fn parse_positive_accepts_numbers_and_rejects_garbage() {
    assert_eq!(parse_positive("7", 3), 7);
    assert_eq!(parse_positive(" 12 ", 3), 12);
    assert_eq!(parse_positive("0", 3), 3);
    assert_eq!(parse_positive("-4", 3), 3);
    assert_eq!(parse_positive("abc", 3), 3);
    assert_eq!(parse_positive("", 3), 3);
}
