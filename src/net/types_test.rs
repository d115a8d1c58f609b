#![cfg(not(feature = "hydrate"))]

use super::*;

fn study_group(json: &str) -> StudyGroup {
    serde_json::from_str(json).unwrap()
}

// =====================
// Response parsing
// =====================

#[test]
fn user_parses_from_backend_json() {
    let user: User = serde_json::from_str(
        r#"{
            "id": "u-1",
            "name": "Ala",
            "email": "ala@example.com",
            "is_superuser": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }"#,
    )
    .unwrap();
    assert_eq!(user.name, "Ala");
    assert!(user.is_superuser);
}

#[test]
fn language_response_carries_code_and_config() {
    let resp: LanguageResponse = serde_json::from_str(
        r#"{
            "language": "en",
            "config": {"name": "angielski", "name_en": "English", "code": "EN", "flag": "🇬🇧"}
        }"#,
    )
    .unwrap();
    assert_eq!(resp.language, TargetLanguage::En);
    assert_eq!(resp.config.code, "EN");
}

#[test]
fn group_tolerates_missing_optional_fields() {
    let group: Group = serde_json::from_str(
        r#"{
            "id": "g-1",
            "name": "Zwierzęta",
            "description": null,
            "language": "fr",
            "total_items": 12,
            "created_at": null,
            "updated_at": null
        }"#,
    )
    .unwrap();
    assert_eq!(group.name, "Zwierzęta");
    assert_eq!(group.language, Some(TargetLanguage::Fr));
    assert_eq!(group.total_items, Some(12));
}

// =====================
// Payload serialization
// =====================

#[test]
fn group_payload_omits_unset_fields() {
    let json = serde_json::to_string(&GroupPayload {
        name: "Nowa grupa".to_owned(),
        description: None,
        language: None,
    })
    .unwrap();
    assert_eq!(json, r#"{"name":"Nowa grupa"}"#);
}

#[test]
fn group_payload_includes_set_fields() {
    let value = serde_json::to_value(GroupPayload {
        name: "Grupa".to_owned(),
        description: Some("opis".to_owned()),
        language: Some(TargetLanguage::En),
    })
    .unwrap();
    assert_eq!(value["description"], "opis");
    assert_eq!(value["language"], "en");
}

#[test]
fn translate_item_payload_omits_unset_fields() {
    let json = serde_json::to_string(&TranslateItemPayload {
        text_pl: "kot".to_owned(),
        text_target: "chat".to_owned(),
        category: None,
        group_id: None,
    })
    .unwrap();
    assert_eq!(json, r#"{"text_pl":"kot","text_target":"chat"}"#);
}

#[test]
fn generate_request_omits_unset_category() {
    let json = serde_json::to_string(&GenerateRequest {
        level: "A2".to_owned(),
        count: 10,
        category: None,
    })
    .unwrap();
    assert_eq!(json, r#"{"level":"A2","count":10}"#);
}

#[test]
fn session_request_serializes_all_fields() {
    let json = serde_json::to_string(&StudySessionRequest {
        group_ids: vec!["g-1".to_owned(), "g-2".to_owned()],
        include_learned: false,
        limit: 50,
    })
    .unwrap();
    assert_eq!(
        json,
        r#"{"group_ids":["g-1","g-2"],"include_learned":false,"limit":50}"#
    );
}

#[test]
fn progress_update_serializes_all_fields() {
    let json = serde_json::to_string(&ProgressUpdate {
        fiszka_id: "f-9".to_owned(),
        learned: true,
    })
    .unwrap();
    assert_eq!(json, r#"{"fiszka_id":"f-9","learned":true}"#);
}

// =====================
// StudyGroup helpers
// =====================

#[test]
fn counts_prefer_the_item_fields() {
    let group = study_group(
        r#"{"id":"g","name":"n","total_items":10,"learned_items":4,"total_fiszki":99,"learned_fiszki":99}"#,
    );
    assert_eq!(group.total(), 10);
    assert_eq!(group.learned(), 4);
}

#[test]
fn counts_fall_back_to_legacy_fields() {
    let group = study_group(r#"{"id":"g","name":"n","total_fiszki":7,"learned_fiszki":7}"#);
    assert_eq!(group.total(), 7);
    assert_eq!(group.learned(), 7);
    assert!(group.is_complete());
}

#[test]
fn missing_counts_mean_zero_and_never_complete() {
    let group = study_group(r#"{"id":"g","name":"n"}"#);
    assert_eq!(group.total(), 0);
    assert_eq!(group.learned(), 0);
    assert!(!group.is_complete());
}

#[test]
fn search_matches_name_and_description_case_insensitively() {
    let group = study_group(r#"{"id":"g","name":"Zwierzęta domowe","description":"Kot, pies"}"#);
    assert!(group.matches_query(""));
    assert!(group.matches_query("zwierz"));
    assert!(group.matches_query("DOMOWE"));
    assert!(group.matches_query("pies"));
    assert!(!group.matches_query("ptaki"));
}
